//! Semiclassical (Bohr-Sommerfeld) quantization of one-dimensional bound
//! potentials: closed-form turning points, numerical action integrals and
//! root searches for the quantized energies `S(E_n) = (n + 1/2) P π`.

pub mod action;
pub mod catalog;
pub mod error;
pub mod potentials;
pub mod problem_selector;
pub mod quantization;
pub mod utility;

use std::{
    fs::{File, create_dir_all},
    io::Write,
    path::Path,
};

use serde::Serialize;

/// Saves the columns of `data` as tab-separated values in
/// `data/<filename>.dat`, one header line first, for the external plotting
/// pipeline.
pub fn save_data(filename: &str, header: &str, data: &[Vec<f64>]) -> Result<(), std::io::Error> {
    let n = data.first().map_or(0, |column| column.len());
    for column in data {
        assert!(column.len() == n, "Same length data allowed only")
    }

    let mut path = std::env::current_dir()?;
    path.push("data");
    path.push(filename);
    path.set_extension("dat");

    let mut buf = header.to_string();
    for i in 0..n {
        let line = data
            .iter()
            .fold(String::new(), |s, column| s + &format!("\t{:e}", column[i]));

        buf.push_str(&format!("\n{}", line.trim()));
    }

    let filepath = path.parent().unwrap();
    if !Path::new(filepath).exists() {
        create_dir_all(filepath)?;
        println!("created path {}", filepath.display());
    }

    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(())
}

/// Saves `data` as JSON in `data/<filename>.json`.
pub fn save_serialize(filename: &str, data: &impl Serialize) -> Result<(), std::io::Error> {
    let mut path = std::env::current_dir()?;
    path.push("data");
    path.push(filename);
    path.set_extension("json");

    let buf = serde_json::to_string(data)?;

    let filepath = path.parent().unwrap();
    if !Path::new(filepath).exists() {
        create_dir_all(filepath)?;
        println!("created path {}", filepath.display());
    }

    let mut file = File::create(&path)?;
    file.write_all(buf.as_bytes())?;

    println!("saved data on {}", path.display());
    Ok(())
}
