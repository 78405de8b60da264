use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::io::{self, Write};

/// How reconstructed secrets are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One `Secret <n> (constant term): <value>` line per document.
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

/// A reconstructed secret ready to be printed.
#[serde_as]
#[derive(Clone, Debug, Serialize)]
pub struct SecretOutput {
    /// The 1-based position of the document in the command line.
    pub document: usize,

    /// The document path.
    pub path: String,

    /// The secret, always written as a decimal string so it is never rounded by JSON readers.
    #[serde_as(as = "DisplayFromStr")]
    pub secret: BigInt,
}

impl SecretOutput {
    /// Writes this secret in the given format.
    pub fn write<W: Write>(&self, format: OutputFormat, writer: &mut W) -> io::Result<()> {
        match format {
            OutputFormat::Text => writeln!(writer, "Secret {} (constant term): {}", self.document, self.secret),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, self)?;
                writeln!(writer)
            }
        }
    }
}
