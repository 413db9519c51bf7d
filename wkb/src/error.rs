use serde::Serialize;
use thiserror::Error;

/// Failure conditions of action evaluation and level search.
///
/// `InvalidEnergy` is expected while scanning an energy range and is used to
/// skip invalid scan points. The remaining variants surface per level and
/// never abort a whole catalog run.
#[derive(Serialize, Debug, Clone, PartialEq, Error)]
pub enum WkbError {
    #[error("energy {energy} outside the classically allowed range ({e_min}, {e_max})")]
    InvalidEnergy { energy: f64, e_min: f64, e_max: f64 },

    #[error(
        "quadrature error estimate {error:.3e} left after {max_subdivisions} subdivisions"
    )]
    IntegrationDivergence { error: f64, max_subdivisions: usize },

    #[error("no sign change of the quantization mismatch for n = {n} in ({e_lo}, {e_hi})")]
    NoRootInDomain { n: u32, e_lo: f64, e_hi: f64 },

    #[error(
        "root search for n = {n} stopped after {max_iter} iterations \
        with bracket ({e_lo}, {e_hi}), best estimate {best}"
    )]
    RootNotConverged {
        n: u32,
        best: f64,
        e_lo: f64,
        e_hi: f64,
        max_iter: usize,
    },
}
