use std::time::Instant;

use hhmmss::Hhmmss;
use wkb::{
    action::{adaptive::AdaptiveAction, bode::BodeAction},
    catalog::{action_sweep_over, quantized_levels},
    potentials::lennard_jones::LennardJones,
    problems_impl,
    quantization::{bracket::BracketSearch, scan_secant::ScanSecant},
    save_data, save_serialize,
    utility::linspace,
};

use crate::consts::Consts;

pub struct LennardJonesSpectrum;

problems_impl!(LennardJonesSpectrum, "H2 Lennard-Jones",
    "bound levels" => |_| Self::levels(),
    "action curve" => |_| Self::action_curve(),
);

impl LennardJonesSpectrum {
    fn potential() -> LennardJones {
        LennardJones::new(Consts::LJ_GAMMA)
    }

    fn levels() {
        let start = Instant::now();

        let potential = Self::potential();

        // the well holds 6 levels, S(0⁻) ≈ 5.81 π
        let brent = BracketSearch::new(AdaptiveAction::default());
        let catalog = quantized_levels(&potential, &brent, 6);

        let scan = ScanSecant::new(BodeAction::new(8192));
        let scanned = quantized_levels(&potential, &scan, 6);

        println!("Calculated in time {}\n", start.elapsed().hhmmssxxx());

        for failure in catalog.failures.iter().chain(&scanned.failures) {
            println!("level {} failed: {}", failure.n, failure.error);
        }

        let ns: Vec<f64> = catalog.levels.ns.iter().map(|&n| n as f64).collect();
        let energies = catalog.levels.energies.clone();
        let energies_ev: Vec<f64> = energies.iter().map(|e| e * Consts::LJ_DEPTH_EV).collect();

        let header = "level\tenergy [V0]\tenergy [eV]";
        let data = vec![ns, energies, energies_ev];
        save_data("semiclassical/lj_levels", header, &data).unwrap();

        save_serialize("semiclassical/lj_levels", &catalog).unwrap();

        for (n, energy) in scanned.levels.ns.iter().zip(&scanned.levels.energies) {
            let brent_energy = catalog.levels.energies[*n as usize];
            println!(
                "n = {}: scan {:.6}, brent {:.6}, difference {:.2e}",
                n,
                energy,
                brent_energy,
                (energy - brent_energy).abs()
            );
        }
    }

    fn action_curve() {
        let potential = Self::potential();
        let integrator = AdaptiveAction::default();

        // denser sampling close to dissociation, where S(E) turns steep
        let mut energies = linspace(-1., -0.01, 507);
        energies.extend(linspace(-0.01, 0., 128).into_iter().skip(1));

        let sweep = action_sweep_over(&potential, &integrator, &energies);

        let header = "energy [V0]\taction";
        let data = vec![sweep.energies.clone(), sweep.actions.clone()];
        save_data("semiclassical/lj_action", header, &data).unwrap();

        save_serialize("semiclassical/lj_action", &sweep).unwrap();
    }
}
