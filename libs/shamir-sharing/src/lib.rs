//! Shamir secret reconstruction from share documents.
//!
//! Share values are decoded from arbitrary radixes into exact integers and the secret is recovered by solving the
//! Vandermonde system of the first `k` shares with fraction-free Gaussian elimination.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]

pub mod document;
pub mod errors;
pub mod radix;
pub mod reconstruct;

pub use document::ShareDocument;
pub use errors::{DecodeError, InsufficientSharesError, MalformedInputError, ReconstructionError};
pub use reconstruct::{Reconstruction, SecretReconstructor};
