//! TOML configuration with command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use lift_core::SimConfig;

use crate::Cli;

/// Load `cli.config` if given (missing keys fall back to defaults), apply
/// the command-line overrides on top and validate the result.
pub fn load_config(cli: &Cli) -> Result<SimConfig> {
    let mut config = match &cli.config {
        Some(path) => read_file(path)?,
        None => SimConfig::default(),
    };

    if let Some(floors) = cli.floors {
        config.building.floor_count = floors;
    }
    if let Some(capacity) = cli.capacity {
        config.building.capacity = capacity;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(points) = cli.points {
        config.point_count = points;
    }
    if cli.threads.is_some() {
        config.num_threads = cli.threads;
    }

    config.validate()?;
    Ok(config)
}

fn read_file(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
