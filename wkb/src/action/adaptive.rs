use gauss_quad::GaussLegendre;

use super::{ActionIntegral, allowed_region, momentum};
use crate::{error::WkbError, potentials::potential::BoundPotential};

/// Adaptive quadrature with Gauss-Legendre panels.
///
/// Each interval stores the estimate of its bisected refinement together
/// with the difference to the unrefined panel as its error estimate. The
/// worst interval is bisected first, until the summed error estimate meets
/// the absolute or relative tolerance. The workspace is bounded by
/// `max_subdivisions` intervals; exhausting it fails the evaluation with
/// `IntegrationDivergence`.
///
/// All panel nodes are interior points, so the square-root branch points of
/// the integrand at the turning points are never sampled directly.
pub struct AdaptiveAction {
    rule: GaussLegendre,
    abs_tol: f64,
    rel_tol: f64,
    max_subdivisions: usize,
}

#[derive(Clone, Copy, Debug)]
struct Interval {
    lo: f64,
    hi: f64,
    estimate: f64,
    error: f64,
}

impl AdaptiveAction {
    /// Creates the integrator with a `points`-point Gauss-Legendre panel rule.
    ///
    /// # Panics
    /// When the panel rule cannot be constructed. The quadrature workspace is
    /// required for any run, so this failure is fatal.
    pub fn new(points: usize, abs_tol: f64, rel_tol: f64, max_subdivisions: usize) -> Self {
        let rule = GaussLegendre::new(points)
            .expect("could not allocate the Gauss-Legendre quadrature rule");

        Self {
            rule,
            abs_tol,
            rel_tol,
            max_subdivisions,
        }
    }

    fn refine(&self, f: &impl Fn(f64) -> f64, lo: f64, hi: f64) -> Interval {
        let mid = 0.5 * (lo + hi);

        let whole = self.rule.integrate(lo, hi, f);
        let halves = self.rule.integrate(lo, mid, f) + self.rule.integrate(mid, hi, f);

        Interval {
            lo,
            hi,
            estimate: halves,
            error: (whole - halves).abs(),
        }
    }
}

impl Default for AdaptiveAction {
    fn default() -> Self {
        Self::new(15, 0., 1e-7, 1000)
    }
}

impl ActionIntegral for AdaptiveAction {
    fn action<P: BoundPotential>(&self, potential: &P, energy: f64) -> Result<f64, WkbError> {
        let (x_in, x_out) = allowed_region(potential, energy)?;
        let f = |x: f64| momentum(potential, energy, x);

        let mut intervals = vec![self.refine(&f, x_in, x_out)];

        loop {
            let total: f64 = intervals.iter().map(|i| i.estimate).sum();
            let error: f64 = intervals.iter().map(|i| i.error).sum();

            if error <= self.abs_tol.max(self.rel_tol * total.abs()) {
                return Ok(potential.action_scaling() * total);
            }

            if intervals.len() >= self.max_subdivisions {
                return Err(WkbError::IntegrationDivergence {
                    error,
                    max_subdivisions: self.max_subdivisions,
                });
            }

            let worst = intervals
                .iter()
                .enumerate()
                .max_by(|x, y| x.1.error.partial_cmp(&y.1.error).unwrap())
                .map(|(index, _)| index)
                .unwrap();

            let Interval { lo, hi, .. } = intervals.swap_remove(worst);
            let mid = 0.5 * (lo + hi);

            intervals.push(self.refine(&f, lo, mid));
            intervals.push(self.refine(&f, mid, hi));
        }
    }
}
