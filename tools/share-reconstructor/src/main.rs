use anyhow::{bail, Context, Result};
use clap::Parser;
use math_lib::matrix::DivisionMode;
use share_reconstructor::{config::Config, output::OutputFormat, runner::Runner};
use std::{io, path::PathBuf};

#[derive(Parser, Debug)]
#[clap(name = "share-reconstructor", about = "Recovers secrets from Shamir share documents")]
struct Options {
    /// The path to an optional YAML config file.
    #[clap(long)]
    config: Option<PathBuf>,

    /// What to do when back substitution leaves a remainder: truncate or exact.
    #[clap(long)]
    division: Option<DivisionMode>,

    /// How secrets are printed.
    #[clap(long, value_enum)]
    format: Option<OutputFormat>,

    /// The share documents to reconstruct, processed in order.
    #[clap(required = true)]
    documents: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let options = Options::parse();

    let mut config = Config::load(options.config.as_deref()).context("failed to load config")?;
    if let Some(division) = options.division {
        config.solver.division = division;
    }
    if let Some(format) = options.format {
        config.output.format = format;
    }

    let runner = Runner::new(&config);
    let mut stdout = io::stdout().lock();
    let summary = runner.run(&options.documents, &mut stdout)?;
    if summary.failed > 0 {
        bail!("{} of {} documents failed", summary.failed, options.documents.len());
    }
    Ok(())
}
