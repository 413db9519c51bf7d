use super::potential::BoundPotential;
use crate::error::WkbError;

/// Lennard-Jones potential in reduced units, `V(x) = 4 (x⁻¹² − x⁻⁶)`,
/// with well depth 1 at `x = 2^(1/6)` and dissociation threshold 0.
#[derive(Clone, Debug)]
pub struct LennardJones {
    scaling: f64,
}

impl LennardJones {
    /// Creates the potential with action scaling `γ = σ √(2 m V0) / ħ`.
    pub fn new(scaling: f64) -> Self {
        Self { scaling }
    }
}

impl BoundPotential for LennardJones {
    fn value(&self, x: f64) -> f64 {
        4. * (x.powi(-12) - x.powi(-6))
    }

    fn energy_range(&self) -> (f64, f64) {
        (-1., 0.)
    }

    fn turning_points(&self, energy: f64) -> Result<(f64, f64), WkbError> {
        self.check_energy(energy)?;

        // E = V(x) inverted through u = x⁻⁶, giving 4u² − 4u − E = 0.
        let root = (1. + energy).sqrt();
        let x_in = (2. / energy * (root - 1.)).cbrt().sqrt();
        let x_out = (2. / energy * (-root - 1.)).cbrt().sqrt();

        Ok((x_in, x_out))
    }

    fn action_scaling(&self) -> f64 {
        self.scaling
    }

    fn period_factor(&self) -> f64 {
        1.
    }
}
