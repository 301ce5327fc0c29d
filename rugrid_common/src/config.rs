//! Configuration loading for the rugrid binaries.

use crate::error::Result;
use clap::Parser;
use serde::de::DeserializeOwned;
use serde_json::from_reader;
use std::{fs::File, io::BufReader};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
/// Command line arguments for the rugrid binaries.
pub struct Args {
    /// path to the config file, defaults are used when omitted
    #[arg(long)]
    pub config_path: Option<String>,
}

impl Args {
    /// helper function for exporting the `clap::Parser::parse` function
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

/// Load the configuration from a JSON file.
/// Each binary defines its own config struct and deserializes into it.
pub fn load_config<T: DeserializeOwned>(path: &str) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = from_reader(reader)?;
    Ok(config)
}
