//! Command-line questionnaire: pass the symptom keys you are experiencing.
//!
//! ```text
//! mineral-check Fatigue Brain_Fog Palpitations
//! mineral-check --list
//! ```

use std::process::ExitCode;

use clap::Parser;
use mineral_awareness::{engine, report, ScoringConfig, Symptom, SymptomVector};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "mineral-check",
    version,
    about = "Map self-reported symptoms to likely mineral deficiencies",
    long_about = "Each SYMPTOM_KEY marks that symptom as present; all others are absent.\n\
        Thresholds come from config/scoring.toml or MINERAL_CONFIG_PATH.",
    after_help = "Educational use only. Not a diagnosis."
)]
struct Cli {
    /// Print the recognized symptom keys and exit
    #[arg(long)]
    list: bool,

    /// Symptom keys to mark as present (see --list)
    #[arg(value_name = "SYMPTOM_KEY")]
    symptoms: Vec<String>,
}

fn print_symptoms() {
    for s in Symptom::ALL {
        println!("{:<22}{}", s.key(), s.label());
    }
}

fn main() -> ExitCode {
    // Usage errors exit with 2 from clap itself.
    let cli = Cli::parse();

    let _ = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if cli.list {
        print_symptoms();
        return ExitCode::SUCCESS;
    }

    let config = match ScoringConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let parsed = SymptomVector::from_flags(cli.symptoms.iter().map(|key| (key.as_str(), true)));
    for w in &parsed.warnings {
        eprintln!("warning: {w}");
    }

    let assessment = engine::assess(&parsed.vector, &config.thresholds);
    print!("{}", report::render_text(&assessment));
    ExitCode::SUCCESS
}
