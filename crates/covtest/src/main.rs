// crates/covtest/src/main.rs

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use covtest_core::{pipeline, schema};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Transform a PHAC COVID-19 testing report CSV for database loading.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the source report CSV
    file: PathBuf,

    /// Target column-naming convention
    #[arg(long, value_enum, default_value = "snake")]
    naming: Naming,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Naming {
    /// snake_case warehouse fields, jurisdiction filtering
    Snake,
    /// PascalCase database fields, strict typing, CST update times
    Pascal,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    info!(file = %cli.file.display(), "starting program");

    let variant = match cli.naming {
        Naming::Snake => &schema::SNAKE,
        Naming::Pascal => &schema::PASCAL,
    };

    let output = pipeline::run(&cli.file, variant, Utc::now())?;
    info!(output = %output.display(), "wrote transformed report");
    Ok(())
}
