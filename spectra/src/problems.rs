use wkb::problems_impl;

use self::{lennard_jones::LennardJonesSpectrum, morse::MorseSpectrum};

mod lennard_jones;
mod morse;

pub struct Problems;

problems_impl!(Problems, "semiclassical spectra",
    "H2 Lennard-Jones" => LennardJonesSpectrum::select,
    "H2 Morse" => MorseSpectrum::select,
);
