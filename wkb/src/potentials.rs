pub mod lennard_jones;
pub mod morse;
pub mod potential;
