use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a tea sample and print its effect profile
    Analyze {
        /// Path to a tea sample JSON file
        sample: PathBuf,

        /// Emit the full analysis as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// List the effect vocabulary
    Effects,
}

#[derive(Parser, Debug)]
#[command(name = "steeped")]
#[command(about = "Tea effect profiling CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/steeped/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to a reference data JSON file (overrides the config setting)
    #[arg(short, long, global = true)]
    data: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let file_config = match steeped::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring_config = file_config.scoring.unwrap_or_default();
    if let Err(errors) = steeped::scoring::validate_config(&scoring_config) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Reference data: CLI flag wins over the config file setting
    let data_path = cli.data.map(PathBuf::from).or(file_config.data);
    let reference_data = match data_path {
        Some(path) => {
            let content = match fs::read_to_string(&path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to read reference data at {}: {}", path.display(), e);
                    std::process::exit(EXIT_CONFIG);
                }
            };
            match steeped::data::ReferenceData::from_json_str(&content) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("Reference data error: {}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        None => steeped::data::ReferenceData::default(),
    };

    let unknown = reference_data.unknown_effect_ids();
    if !unknown.is_empty() {
        eprintln!("Reference data names unknown effects: {}", unknown.join(", "));
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Loaded {} tea types, {} processing methods, {} interaction rules",
            reference_data.tea_types.len(),
            reference_data.processing.len(),
            reference_data.interactions.len()
        );
    }

    let strong_threshold = scoring_config.thresholds.dominant_effect;
    let engine = steeped::Engine::new(scoring_config, reference_data);

    match cli.command {
        Commands::Analyze { sample, json } => {
            let content = match fs::read_to_string(&sample) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to read sample at {}: {}", sample.display(), e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let value: serde_json::Value = match serde_json::from_str(&content) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("Sample is not valid JSON: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let sample_name = value
                .get("name")
                .and_then(|n| n.as_str())
                .map(|n| n.to_string());

            let analysis = engine.calculate_value(&value);

            if json {
                match serde_json::to_string_pretty(&analysis) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Failed to serialize analysis: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                let use_colors = steeped::output::should_use_colors();
                let report = steeped::output::format_analysis(
                    sample_name.as_deref(),
                    &analysis,
                    strong_threshold,
                    use_colors,
                );
                println!("{}", report);
            }

            if cli.verbose {
                eprintln!(
                    "Analyzed {} effects in {:?}",
                    analysis.final_scores.len(),
                    start_time.elapsed()
                );
            }
        }
        Commands::Effects => {
            let use_colors = steeped::output::should_use_colors();
            println!("{}", steeped::output::format_effect_catalog(use_colors));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
