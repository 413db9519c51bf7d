pub struct Consts;

impl Consts {
    /// Action scaling sqrt(2 m epsilon) sigma / hbar of the reduced
    /// Lennard-Jones well, H2 parameters.
    pub const LJ_GAMMA: f64 = 21.7;

    /// Well depth of the Lennard-Jones potential in eV.
    pub const LJ_DEPTH_EV: f64 = 4.747;

    /// Well depth of the H2 Morse potential in eV.
    pub const MORSE_DEPTH: f64 = 4.747;

    /// Equilibrium distance of the H2 Morse potential in angstrom.
    pub const MORSE_EQUILIBRIUM: f64 = 0.74166;

    /// Range parameter of the H2 Morse potential in angstrom.
    pub const MORSE_BETA: f64 = 0.73318636;

    /// Action scaling of the H2 Morse well, same reduced units as the
    /// Lennard-Jones one.
    pub const MORSE_GAMMA: f64 = 21.7;
}
