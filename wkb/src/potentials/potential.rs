use crate::error::WkbError;

/// Trait defining a one-dimensional potential that supports bound motion,
/// with classical turning points known in closed form.
pub trait BoundPotential {
    /// Potential value at position `x`.
    fn value(&self, x: f64) -> f64;

    /// Open interval `(E_min, E_max)` of energies with classically bound motion,
    /// from the potential minimum to the dissociation threshold.
    fn energy_range(&self) -> (f64, f64);

    /// Positions where `energy` equals the potential value, bounding the
    /// classically allowed region, `x_in < x_out` for every valid energy.
    fn turning_points(&self, energy: f64) -> Result<(f64, f64), WkbError>;

    /// Scaling constant multiplying the action integral.
    fn action_scaling(&self) -> f64;

    /// Period factor `P` of the quantization condition `S(E) = (n + 1/2) P π`.
    fn period_factor(&self) -> f64;

    fn check_energy(&self, energy: f64) -> Result<(), WkbError> {
        let (e_min, e_max) = self.energy_range();
        if energy <= e_min || energy >= e_max {
            return Err(WkbError::InvalidEnergy {
                energy,
                e_min,
                e_max,
            });
        }

        Ok(())
    }
}
