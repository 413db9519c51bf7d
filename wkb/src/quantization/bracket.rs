use super::{LevelSolver, quantization_target};
use crate::{
    action::ActionIntegral,
    error::WkbError,
    potentials::potential::BoundPotential,
    utility::{BrentError, brent_root_method},
};

/// Bracket-guaranteed level search.
///
/// Brackets the root a priori by insetting the valid energy range by a small
/// relative margin, then iterates Brent's method until the bracket width
/// falls below `tolerance` or `max_iter` iterations were spent. The
/// invariant `f(e_lo) f(e_hi) <= 0` holds through the whole search.
#[derive(Clone, Debug)]
pub struct BracketSearch<A> {
    pub integrator: A,
    pub bracket_inset: f64,
    pub tolerance: f64,
    pub max_iter: usize,
}

impl<A: ActionIntegral> BracketSearch<A> {
    pub fn new(integrator: A) -> Self {
        Self {
            integrator,
            bracket_inset: 1e-4,
            tolerance: 1e-3,
            max_iter: 100,
        }
    }
}

impl<A: ActionIntegral> LevelSolver for BracketSearch<A> {
    fn action<P: BoundPotential>(&self, potential: &P, energy: f64) -> Result<f64, WkbError> {
        self.integrator.action(potential, energy)
    }

    fn level_energy<P: BoundPotential>(&self, potential: &P, n: u32) -> Result<f64, WkbError> {
        let (e_min, e_max) = potential.energy_range();
        let margin = self.bracket_inset * (e_max - e_min);
        let (e_lo, e_hi) = (e_min + margin, e_max - margin);

        let target = quantization_target(potential, n);
        let mismatch = |energy: f64| self.action(potential, energy).map(|s| s - target);

        let f_lo = mismatch(e_lo)?;
        let f_hi = mismatch(e_hi)?;
        if f_lo * f_hi > 0. {
            return Err(WkbError::NoRootInDomain { n, e_lo, e_hi });
        }

        brent_root_method(
            [e_lo, f_lo],
            [e_hi, f_hi],
            mismatch,
            self.tolerance,
            self.max_iter,
        )
        .map_err(|err| match err {
            BrentError::Evaluation(err) => err,
            BrentError::NoSignChange => WkbError::NoRootInDomain { n, e_lo, e_hi },
            BrentError::IterationBudget { best, bracket } => WkbError::RootNotConverged {
                n,
                best,
                e_lo: bracket.0,
                e_hi: bracket.1,
                max_iter: self.max_iter,
            },
        })
    }
}
