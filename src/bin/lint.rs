//! Schema Lint CLI
//!
//! Reads a schema file, runs the lint pipeline, and prints a report.
//! Exits 1 when any error-severity issue is found, 0 otherwise.

use std::path::PathBuf;

use clap::Parser;
use schema_lint::{
    has_errors, read_schema_file, render_json, render_text, LintConfig, ReportFormat, RuleEngine,
    SchemaParser,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-lint")]
#[command(about = "Static analysis for Prisma-style schema definitions")]
struct Cli {
    /// Path to the schema file
    schema: PathBuf,

    /// Report format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Path to a config file (schemalint.toml)
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(clean) => {
            if !clean {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = LintConfig::load_from(cli.config.as_deref())?;

    let schema = read_schema_file(&cli.schema)?;
    let models = SchemaParser::new().parse(&schema);
    let issues = RuleEngine::without(&config.rules.disabled).run(&models);

    let format = cli.format.unwrap_or(config.report.format);
    match format {
        ReportFormat::Text => println!("{}", render_text(&issues)),
        ReportFormat::Json => println!("{}", render_json(&issues)?),
    }

    Ok(!has_errors(&issues))
}
