use super::{ActionIntegral, allowed_region, momentum};
use crate::{error::WkbError, potentials::potential::BoundPotential};

/// Composite Bode rule over a fixed, even subdivision of the allowed region.
///
/// The 7-32-12-32-7 stencil is summed over groups of four subintervals with
/// weight 14 on shared group boundaries. The boundary weight-7 terms are
/// dropped since the integrand vanishes exactly at the turning points, so no
/// sample is ever taken at the bounds themselves.
#[derive(Clone, Debug)]
pub struct BodeAction {
    subdivisions: usize,
}

impl BodeAction {
    /// Creates the rule with the given subdivision count, which must be a
    /// positive multiple of four.
    pub fn new(subdivisions: usize) -> Self {
        assert!(
            subdivisions >= 4 && subdivisions % 4 == 0,
            "Bode rule requires a multiple of 4 subdivisions, got {subdivisions}"
        );

        Self { subdivisions }
    }
}

impl ActionIntegral for BodeAction {
    fn action<P: BoundPotential>(&self, potential: &P, energy: f64) -> Result<f64, WkbError> {
        let (x_in, x_out) = allowed_region(potential, energy)?;

        let n = self.subdivisions;
        let h = (x_out - x_in) / n as f64;

        let mut sum = 0.;
        for j in (1..n).step_by(2) {
            sum += 32. * momentum(potential, energy, x_in + j as f64 * h);
        }
        for j in (2..n).step_by(4) {
            sum += 12. * momentum(potential, energy, x_in + j as f64 * h);
        }
        for j in (4..n).step_by(4) {
            sum += 14. * momentum(potential, energy, x_in + j as f64 * h);
        }

        Ok(potential.action_scaling() * 2. * h / 45. * sum)
    }
}
