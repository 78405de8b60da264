//! Secret reconstruction.

use crate::{
    document::ShareDocument,
    errors::{InsufficientSharesError, ReconstructionError},
};
use log::{debug, warn};
use math_lib::{
    matrix::{DegenerateSystem, DivisionMode},
    polynomial::{point_sequence::Interpolation, PointSequence, Polynomial},
};
use num_bigint::BigInt;

/// A reconstructed secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconstruction {
    /// The constant term of the interpolated polynomial.
    pub secret: BigInt,

    /// The whole interpolated polynomial, lowest degree first.
    pub polynomial: Polynomial,

    /// The abscissas of the shares that were used, in ascending order.
    pub abscissas: Vec<BigInt>,

    /// Number of shares beyond the threshold that were ignored.
    pub ignored: usize,

    /// Columns of the system without a usable pivot.
    pub degeneracies: Vec<DegenerateSystem>,
}

/// Recovers secrets from share documents.
///
/// Only the first `k` shares by ascending abscissa are used, any other share is ignored. The linear system is solved
/// with exact integer arithmetic, `division` controls what happens if back substitution hits a remainder.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecretReconstructor {
    division: DivisionMode,
}

impl SecretReconstructor {
    /// Constructs a new reconstructor.
    pub fn new(division: DivisionMode) -> Self {
        Self { division }
    }

    /// The division mode used during back substitution.
    pub fn division(&self) -> DivisionMode {
        self.division
    }

    /// Parses a JSON document and reconstructs the secret behind it.
    pub fn reconstruct_str(&self, json: &str) -> Result<Reconstruction, ReconstructionError> {
        let document = ShareDocument::from_json_str(json)?;
        self.reconstruct(&document)
    }

    /// Reconstructs the secret behind the shares in a document.
    pub fn reconstruct(&self, document: &ShareDocument) -> Result<Reconstruction, ReconstructionError> {
        let k = document.threshold().k;
        let available = document.shares().len();
        debug!("Reconstructing secret with threshold {k} from {available} shares");
        ensure_enough(k, available)?;

        let points = document.points()?;
        let Interpolation { polynomial, degeneracies } = self.solve(&points, k)?;
        let secret = polynomial.constant_term()?.clone();
        debug!("Interpolated a polynomial of degree {}", polynomial.degree());
        let used = usize::try_from(k).unwrap_or(usize::MAX);
        let abscissas: Vec<BigInt> = points.points().iter().take(used).map(|point| point.x().clone()).collect();
        let ignored = available.saturating_sub(abscissas.len());
        if ignored > 0 {
            debug!("Ignoring {ignored} shares beyond the threshold");
        }
        Ok(Reconstruction { secret, polynomial, abscissas, ignored, degeneracies })
    }

    /// Interpolates the polynomial of degree `k - 1` through the first `k` points.
    ///
    /// The points are expected to be sorted already.
    pub fn solve(&self, points: &PointSequence, k: u64) -> Result<Interpolation, ReconstructionError> {
        ensure_enough(k, points.len())?;
        let selected = points.take(k).map_err(|_| InsufficientSharesError { required: k, available: points.len() })?;
        let interpolation = selected.interpolate(self.division)?;
        for degeneracy in &interpolation.degeneracies {
            warn!("Degenerate system: {degeneracy}");
        }
        Ok(interpolation)
    }
}

fn ensure_enough(k: u64, available: usize) -> Result<(), InsufficientSharesError> {
    if u64::try_from(available).is_ok_and(|available| available >= k) {
        Ok(())
    } else {
        Err(InsufficientSharesError { required: k, available })
    }
}
