use super::potential::BoundPotential;
use crate::error::WkbError;

/// Morse potential `V(r) = V0 ((1 − e^{(r_eq − r)/β})² − 1)` with depth `V0`,
/// equilibrium position `r_eq` and range parameter `β`.
#[derive(Clone, Debug)]
pub struct Morse {
    depth: f64,
    equilibrium: f64,
    range: f64,
    scaling: f64,
}

impl Morse {
    pub fn new(depth: f64, equilibrium: f64, range: f64, scaling: f64) -> Self {
        Self {
            depth,
            equilibrium,
            range,
            scaling,
        }
    }

    /// Closed form of the action integral over half a period,
    /// `S(E) = γ π β (√V0 − √(−E))`.
    pub fn action_closed_form(&self, energy: f64) -> Result<f64, WkbError> {
        self.check_energy(energy)?;

        let value = std::f64::consts::PI
            * self.range
            * (self.depth.sqrt() - (-energy).sqrt());

        Ok(self.scaling * value)
    }
}

impl BoundPotential for Morse {
    fn value(&self, r: f64) -> f64 {
        let f = 1. - ((self.equilibrium - r) / self.range).exp();
        self.depth * (f * f - 1.)
    }

    fn energy_range(&self) -> (f64, f64) {
        (-self.depth, 0.)
    }

    fn turning_points(&self, energy: f64) -> Result<(f64, f64), WkbError> {
        self.check_energy(energy)?;

        let root = (energy / self.depth + 1.).sqrt();
        let r_in = self.equilibrium - self.range * (1. + root).ln();
        let r_out = self.equilibrium - self.range * (1. - root).ln();

        Ok((r_in, r_out))
    }

    fn action_scaling(&self) -> f64 {
        self.scaling
    }

    fn period_factor(&self) -> f64 {
        2.
    }
}
