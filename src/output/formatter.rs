use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::data::effects;
use crate::scoring::engine::Analysis;
use crate::scoring::select::EffectDetail;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a level as a fixed one-decimal score, e.g. "8.3"
pub fn format_level(level: f64) -> String {
    format!("{:.1}", level)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a description to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Render a full analysis as a multi-section text report.
///
/// `strong_threshold` marks the dominant effect as strong when its level
/// reaches it (the configured dominant-effect threshold).
pub fn format_analysis(
    sample_name: Option<&str>,
    analysis: &Analysis,
    strong_threshold: f64,
    use_colors: bool,
) -> String {
    let mut out = String::new();

    if let Some(name) = sample_name {
        if use_colors {
            out.push_str(&format!("{}\n\n", name.bold()));
        } else {
            out.push_str(&format!("{}\n\n", name));
        }
    }

    let strong = analysis.dominant.level >= strong_threshold;
    out.push_str(&format_dominant(&analysis.dominant, strong, use_colors));

    if !analysis.supporting.is_empty() {
        out.push_str("\nSupporting:\n");
        for effect in &analysis.supporting {
            out.push_str(&format_effect_line(effect, use_colors));
        }
    }

    if !analysis.additional.is_empty() {
        out.push_str("\nAdditional:\n");
        for effect in &analysis.additional {
            out.push_str(&format_effect_line(effect, use_colors));
        }
    }

    if !analysis.interactions.is_empty() {
        out.push_str("\nInteractions:\n");
        for interaction in &analysis.interactions {
            let line = format!(
                "  {} ({} + {}, strength {})",
                interaction.name,
                interaction.effects.0,
                interaction.effects.1,
                format_level(interaction.strength),
            );
            if use_colors {
                out.push_str(&format!("{}\n", line.cyan()));
            } else {
                out.push_str(&format!("{}\n", line));
            }
        }
    }

    out
}

fn format_dominant(effect: &EffectDetail, strong: bool, use_colors: bool) -> String {
    let marker = if strong { " (strong)" } else { "" };
    let headline = format!(
        "Dominant: {} {}{}",
        effect.name,
        format_level(effect.level),
        marker
    );
    let description = fitted_description(&effect.description);

    if use_colors {
        format!("{}\n  {}\n", headline.bold(), description.dimmed())
    } else {
        format!("{}\n  {}\n", headline, description)
    }
}

fn format_effect_line(effect: &EffectDetail, use_colors: bool) -> String {
    let level = format!("{:>5}", format_level(effect.level));
    if use_colors {
        format!(
            "  {}  {} - {}\n",
            level.bold(),
            effect.name,
            fitted_description(&effect.description).dimmed()
        )
    } else {
        format!(
            "  {}  {} - {}\n",
            level,
            effect.name,
            fitted_description(&effect.description)
        )
    }
}

fn fitted_description(description: &str) -> String {
    match get_terminal_width() {
        Some(width) if width > 30 => truncate(description, width - 12),
        Some(_) => truncate(description, 20),
        None => description.to_string(),
    }
}

/// List the full effect vocabulary, one effect per line
pub fn format_effect_catalog(use_colors: bool) -> String {
    effects::EFFECTS
        .iter()
        .map(|effect| {
            if use_colors {
                format!(
                    "{:<15} {}",
                    effect.id.bold(),
                    effect.description.dimmed()
                )
            } else {
                format!("{:<15} {}", effect.id, effect.description)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
