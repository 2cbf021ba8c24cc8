#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gtm_diagnostic::engine::metrics::format_metric_value;
use gtm_diagnostic::{AnswerSet, DiagnosticEngine, FixLibrary, MetricCatalog};

#[derive(Parser)]
#[command(name = "gtm", version, about = "GTM diagnostic scoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate both catalogs
    Validate {
        #[arg(long)]
        metrics: Option<PathBuf>,
        #[arg(long)]
        fixes: Option<PathBuf>,
    },
    /// Score an answers JSON file and print the composite result
    Score {
        /// Path to an answers JSON file
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        metrics: Option<PathBuf>,
        #[arg(long)]
        fixes: Option<PathBuf>,
        /// Also print formatted headline metrics to stderr
        #[arg(long)]
        details: bool,
    },
}

fn load_catalogs(
    metrics: Option<PathBuf>,
    fixes: Option<PathBuf>,
) -> Result<(MetricCatalog, FixLibrary), Box<dyn std::error::Error>> {
    let metrics_path = metrics.unwrap_or_else(MetricCatalog::default_path);
    let fixes_path = fixes.unwrap_or_else(FixLibrary::default_path);
    let catalog = MetricCatalog::from_path(&metrics_path)
        .map_err(|e| format!("{}: {e}", metrics_path.display()))?;
    let library = FixLibrary::from_path(&fixes_path)
        .map_err(|e| format!("{}: {e}", fixes_path.display()))?;
    Ok((catalog, library))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { metrics, fixes } => {
            let (catalog, library) = load_catalogs(metrics, fixes)?;
            // Building the engine runs both validations.
            let _engine = DiagnosticEngine::new(catalog.clone(), library.clone())?;
            println!(
                "metric catalog ok (version: {})",
                catalog.version.as_deref().unwrap_or("unversioned")
            );
            println!(
                "fix library ok (version: {})",
                library.version.as_deref().unwrap_or("unversioned")
            );
        }
        Commands::Score {
            input,
            metrics,
            fixes,
            details,
        } => {
            let (catalog, library) = load_catalogs(metrics, fixes)?;
            let engine = DiagnosticEngine::new(catalog, library)?;

            let raw = std::fs::read_to_string(&input)
                .map_err(|e| format!("{}: {e}", input.display()))?;
            let answers: AnswerSet = serde_json::from_str(&raw)?;

            let result = engine.evaluate(&answers)?;
            println!("{}", serde_json::to_string_pretty(&result)?);

            if details {
                for m in &result.metric_highlights {
                    eprintln!(
                        "{:<12} {:<24} {:>12}  (score {:.2})",
                        m.area.label(),
                        m.name,
                        format_metric_value(m.name, m.value),
                        m.score
                    );
                }
            }
        }
    }

    Ok(())
}
