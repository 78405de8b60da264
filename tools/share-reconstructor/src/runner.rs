//! Runs reconstructions over a list of share documents.

use crate::{
    config::Config,
    output::{OutputFormat, SecretOutput},
};
use anyhow::Context;
use log::{debug, info};
use shamir_sharing::{Reconstruction, SecretReconstructor};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// The outcome of a run over several documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Documents whose secret was printed.
    pub succeeded: usize,

    /// Documents that could not be reconstructed.
    pub failed: usize,
}

/// Reconstructs the secret of every document it's given and prints it.
pub struct Runner {
    reconstructor: SecretReconstructor,
    format: OutputFormat,
}

impl Runner {
    /// Constructs a new runner out of a configuration.
    pub fn new(config: &Config) -> Self {
        Self { reconstructor: SecretReconstructor::new(config.solver.division), format: config.output.format }
    }

    /// Reads a document from disk and reconstructs its secret.
    pub fn reconstruct_file(&self, path: &Path) -> anyhow::Result<Reconstruction> {
        let contents = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        self.reconstructor.reconstruct_str(&contents).with_context(|| format!("failed to reconstruct {}", path.display()))
    }

    /// Processes every document in order.
    ///
    /// A document that fails is reported on stderr and the run moves on to the next one. Only failing to write the
    /// output aborts the run.
    pub fn run<W: Write>(&self, paths: &[PathBuf], out: &mut W) -> anyhow::Result<Summary> {
        let mut summary = Summary::default();
        for (index, path) in paths.iter().enumerate() {
            let document = index.saturating_add(1);
            match self.reconstruct_file(path) {
                Ok(reconstruction) => {
                    info!(
                        "Document {document} reconstructed from {} shares, {} ignored",
                        reconstruction.abscissas.len(),
                        reconstruction.ignored
                    );
                    let output =
                        SecretOutput { document, path: path.display().to_string(), secret: reconstruction.secret };
                    output.write(self.format, out).context("failed to write output")?;
                    summary.succeeded = summary.succeeded.saturating_add(1);
                }
                Err(e) => {
                    debug!("Document {document} failed: {e:?}");
                    eprintln!("Error in document {document}: {e:#}");
                    summary.failed = summary.failed.saturating_add(1);
                }
            }
        }
        Ok(summary)
    }
}
