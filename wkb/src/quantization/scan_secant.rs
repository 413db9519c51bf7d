use super::{LevelSolver, quantization_target};
use crate::{action::ActionIntegral, error::WkbError, potentials::potential::BoundPotential};

/// Scan-then-secant level search.
///
/// Marches the energy in fixed steps from the bottom of the well until the
/// quantization mismatch changes sign, then refines the root with a fixed
/// number of secant iterations seeded by the two bracketing samples.
///
/// The step size trades accuracy for action evaluations: steps coarser than
/// the curvature of `S(E)` can miss a sign change entirely, and two roots
/// closer together than one step are silently missed.
#[derive(Clone, Debug)]
pub struct ScanSecant<A> {
    pub integrator: A,
    pub step: f64,
    pub secant_iters: usize,
}

impl<A: ActionIntegral> ScanSecant<A> {
    pub fn new(integrator: A) -> Self {
        Self {
            integrator,
            step: 2f64.powi(-9),
            secant_iters: 10,
        }
    }

    fn refine<P: BoundPotential>(
        &self,
        potential: &P,
        target: f64,
        bracket: [[f64; 2]; 2],
    ) -> Result<f64, WkbError> {
        let [[mut e_prev, mut f_prev], [mut e_cur, mut f_cur]] = bracket;

        for _ in 0..self.secant_iters {
            let denom = f_cur - f_prev;
            if denom == 0. {
                break;
            }

            let e_next = e_cur - f_cur * (e_cur - e_prev) / denom;
            let f_next = match self.action(potential, e_next) {
                Ok(action) => action - target,
                // no bracketing invariant is kept, an iterate stepping
                // outside the valid domain ends the refinement
                Err(WkbError::InvalidEnergy { .. }) => break,
                Err(err) => return Err(err),
            };

            (e_prev, f_prev) = (e_cur, f_cur);
            (e_cur, f_cur) = (e_next, f_next);

            if f_cur == 0. {
                break;
            }
        }

        Ok(e_cur)
    }
}

impl<A: ActionIntegral> LevelSolver for ScanSecant<A> {
    fn action<P: BoundPotential>(&self, potential: &P, energy: f64) -> Result<f64, WkbError> {
        self.integrator.action(potential, energy)
    }

    fn level_energy<P: BoundPotential>(&self, potential: &P, n: u32) -> Result<f64, WkbError> {
        let (e_min, e_max) = potential.energy_range();
        let target = quantization_target(potential, n);

        let mut previous: Option<[f64; 2]> = None;
        let mut energy = e_min + self.step;

        while energy < e_max {
            let mismatch = match self.action(potential, energy) {
                Ok(action) => action - target,
                Err(WkbError::InvalidEnergy { .. }) => {
                    energy += self.step;
                    continue;
                }
                Err(err) => return Err(err),
            };

            if let Some([e_prev, f_prev]) = previous {
                if (mismatch > 0.) != (f_prev > 0.) {
                    return self.refine(potential, target, [[e_prev, f_prev], [energy, mismatch]]);
                }
            }

            previous = Some([energy, mismatch]);
            energy += self.step;
        }

        Err(WkbError::NoRootInDomain {
            n,
            e_lo: e_min,
            e_hi: e_max,
        })
    }
}
