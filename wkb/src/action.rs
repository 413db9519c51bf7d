pub mod adaptive;
pub mod bode;

use crate::{error::WkbError, potentials::potential::BoundPotential};

/// Numerical evaluation of the classical action integral
/// `S(E) = γ ∫ √(E − V(x)) dx` between the turning points of the potential.
///
/// `S` is monotonically increasing on the classically allowed energy range
/// and vanishes at the potential minimum, both required by the bracketing
/// logic of the level solvers.
pub trait ActionIntegral {
    fn action<P: BoundPotential>(&self, potential: &P, energy: f64) -> Result<f64, WkbError>;
}

/// Classical momentum `√(E − V(x))` of the integrand.
pub(crate) fn momentum<P: BoundPotential>(potential: &P, energy: f64, x: f64) -> f64 {
    // roundoff next to the turning points can push E - V slightly negative
    (energy - potential.value(x)).max(0.).sqrt()
}

pub(crate) fn allowed_region<P: BoundPotential>(
    potential: &P,
    energy: f64,
) -> Result<(f64, f64), WkbError> {
    let (x_in, x_out) = potential.turning_points(energy)?;

    if x_in >= x_out {
        let (e_min, e_max) = potential.energy_range();
        return Err(WkbError::InvalidEnergy {
            energy,
            e_min,
            e_max,
        });
    }

    Ok((x_in, x_out))
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::action::{ActionIntegral, adaptive::AdaptiveAction, bode::BodeAction};
    use crate::error::WkbError;
    use crate::potentials::{lennard_jones::LennardJones, morse::Morse};
    use crate::utility::linspace;

    fn h2_lennard_jones() -> LennardJones {
        LennardJones::new(21.7)
    }

    fn h2_morse() -> Morse {
        Morse::new(4.747, 0.74166, 0.73318636, 21.7)
    }

    #[test]
    fn test_action_monotone() {
        let lj = h2_lennard_jones();
        let bode = BodeAction::new(8192);

        let energies = linspace(-0.999, -0.001, 200);
        let actions: Vec<f64> = energies
            .iter()
            .map(|&energy| bode.action(&lj, energy).unwrap())
            .collect();

        for (window, energy) in actions.windows(2).zip(&energies) {
            assert!(
                window[1] >= window[0],
                "action decreased between E = {} and the next sample",
                energy
            );
        }
    }

    #[test]
    fn test_action_vanishes_at_minimum() {
        let lj = h2_lennard_jones();
        let bode = BodeAction::new(8192);

        let near_bottom = bode.action(&lj, -1. + 1e-4).unwrap();
        assert!(near_bottom >= 0.);
        assert!(near_bottom < 1e-2, "S = {} near the minimum", near_bottom);

        assert!(bode.action(&lj, -1. + 1e-6).unwrap() < near_bottom);
    }

    #[test]
    fn test_morse_closed_form() {
        let morse = h2_morse();
        let bode = BodeAction::new(2048);
        let adaptive = AdaptiveAction::default();

        for &energy in &[-4., -2.373, -1., -0.1] {
            let exact = morse.action_closed_form(energy).unwrap();

            let value = bode.action(&morse, energy).unwrap();
            assert_abs_diff_eq!(value, exact, epsilon = 1e-3 * exact);

            let value = adaptive.action(&morse, energy).unwrap();
            assert_abs_diff_eq!(value, exact, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_strategies_agree() {
        let lj = h2_lennard_jones();
        let bode = BodeAction::new(8192);
        let adaptive = AdaptiveAction::default();

        for &energy in &[-0.9, -0.5, -0.1] {
            let fixed = bode.action(&lj, energy).unwrap();
            let adapted = adaptive.action(&lj, energy).unwrap();

            assert_abs_diff_eq!(fixed, adapted, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_invalid_energy() {
        let lj = h2_lennard_jones();
        let bode = BodeAction::new(128);

        assert!(matches!(
            bode.action(&lj, 0.5),
            Err(WkbError::InvalidEnergy { .. })
        ));
    }

    #[test]
    fn test_workspace_exhaustion() {
        let lj = h2_lennard_jones();
        let starved = AdaptiveAction::new(15, 0., 1e-12, 8);

        let result = starved.action(&lj, -0.5);
        assert!(
            matches!(result, Err(WkbError::IntegrationDivergence { .. })),
            "expected IntegrationDivergence, got {:?}",
            result
        );
    }
}
