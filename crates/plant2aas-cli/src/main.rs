//! Command-line interface for plant2aas
//! This binary converts engineering plant descriptions into AASX packages.
//!
//! Usage:
//!   plant2aas aml `<input.xml>` `<output.aasx>`   - Convert an AutomationML plant topology
//!   plant2aas fpd `<input.json>` `<output.aasx>`  - Convert an FPD process description

use clap::{Arg, ArgMatches, Command};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let matches = Command::new("plant2aas")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts engineering plant descriptions into AASX packages")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("aml")
                .about("Convert an AutomationML (CAEX) plant topology")
                .arg(
                    Arg::new("input")
                        .help("Path to the AutomationML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .help("Path of the AASX package to write")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("fpd")
                .about("Convert a formalized process description (JSON)")
                .arg(
                    Arg::new("input")
                        .help("Path to the FPD JSON export")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .help("Path of the AASX package to write")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("aml", sub_matches)) => handle_aml_command(sub_matches),
        Some(("fpd", sub_matches)) => handle_fpd_command(sub_matches),
        _ => unreachable!("a subcommand is required"),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        process::exit(1);
    }
}

fn handle_aml_command(matches: &ArgMatches) -> Result<(), String> {
    let (input, output) = io_paths(matches);

    let xml_content = read_input(&input)?;
    let plant = plant2aas_aml::load_plant_from_str(&xml_content).map_err(|e| e.to_string())?;
    let env = plant2aas_aml::convert_plant(&plant);

    plant2aas_aasx::save_aasx_to_path(&output, &env).map_err(|e| e.to_string())?;
    info!(
        "converted plant topology {} into {}",
        input.display(),
        output.display()
    );
    Ok(())
}

fn handle_fpd_command(matches: &ArgMatches) -> Result<(), String> {
    let (input, output) = io_paths(matches);

    let json_content = read_input(&input)?;
    let fpd = plant2aas_fpd::load_fpd_from_str(&json_content).map_err(|e| e.to_string())?;
    let env = plant2aas_fpd::convert_fpd(&fpd);

    plant2aas_aasx::save_aasx_to_path(&output, &env).map_err(|e| e.to_string())?;
    info!(
        "converted process description {} into {}",
        input.display(),
        output.display()
    );
    Ok(())
}

fn io_paths(matches: &ArgMatches) -> (PathBuf, PathBuf) {
    let input = PathBuf::from(matches.get_one::<String>("input").unwrap());
    let output = PathBuf::from(matches.get_one::<String>("output").unwrap());
    (input, output)
}

fn read_input(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))
}
