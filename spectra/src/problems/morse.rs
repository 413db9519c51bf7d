use std::time::Instant;

use hhmmss::Hhmmss;
use wkb::{
    action::bode::BodeAction,
    catalog::{action_sweep_over, quantized_levels},
    potentials::morse::Morse,
    problems_impl,
    quantization::scan_secant::ScanSecant,
    save_data, save_serialize,
    utility::linspace,
};

use crate::consts::Consts;

pub struct MorseSpectrum;

problems_impl!(MorseSpectrum, "H2 Morse",
    "bound levels" => |_| Self::levels(),
    "action curve" => |_| Self::action_curve(),
);

impl MorseSpectrum {
    fn potential() -> Morse {
        Morse::new(
            Consts::MORSE_DEPTH,
            Consts::MORSE_EQUILIBRIUM,
            Consts::MORSE_BETA,
            Consts::MORSE_GAMMA,
        )
    }

    /// Quantized energy from the closed-form Morse action,
    /// `E_n = -(√V0 - (2n + 1) / (γ β))²`.
    fn exact_energy(n: u32) -> f64 {
        let root = Consts::MORSE_DEPTH.sqrt()
            - (2. * n as f64 + 1.) / (Consts::MORSE_GAMMA * Consts::MORSE_BETA);

        -root * root
    }

    fn levels() {
        let start = Instant::now();

        let potential = Self::potential();

        let mut scan = ScanSecant::new(BodeAction::new(128));
        scan.step = 1e-3;

        // 17 levels fit below dissociation, the last request is left to fail
        let catalog = quantized_levels(&potential, &scan, 18);

        println!("Calculated in time {}\n", start.elapsed().hhmmssxxx());

        for failure in &catalog.failures {
            println!("level {} failed: {}", failure.n, failure.error);
        }

        let ns: Vec<f64> = catalog.levels.ns.iter().map(|&n| n as f64).collect();
        let energies = catalog.levels.energies.clone();
        let exact: Vec<f64> = catalog.levels.ns.iter().map(|&n| Self::exact_energy(n)).collect();

        for ((n, energy), exact) in catalog.levels.ns.iter().zip(&energies).zip(&exact) {
            println!(
                "n = {}: E = {:.6} eV, exact {:.6} eV, difference {:.2e}",
                n,
                energy,
                exact,
                (energy - exact).abs()
            );
        }

        let header = "level\tenergy [eV]\texact energy [eV]";
        let data = vec![ns, energies, exact];
        save_data("semiclassical/morse_levels", header, &data).unwrap();

        save_serialize("semiclassical/morse_levels", &catalog).unwrap();
    }

    fn action_curve() {
        let potential = Self::potential();
        let integrator = BodeAction::new(128);

        let energies = linspace(-Consts::MORSE_DEPTH, 0., 2431);
        let sweep = action_sweep_over(&potential, &integrator, &energies);

        let exact: Vec<f64> = sweep
            .energies
            .iter()
            .map(|&energy| potential.action_closed_form(energy).unwrap())
            .collect();

        let header = "energy [eV]\taction\texact action";
        let data = vec![sweep.energies.clone(), sweep.actions.clone(), exact];
        save_data("semiclassical/morse_action", header, &data).unwrap();

        save_serialize("semiclassical/morse_action", &sweep).unwrap();
    }
}
