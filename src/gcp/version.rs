//! Compute API versions

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compute API version a self-link is rendered against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Version {
    #[default]
    #[serde(rename = "v1", alias = "ga")]
    #[value(name = "v1", alias = "ga")]
    Ga,
    #[serde(rename = "beta")]
    #[value(name = "beta")]
    Beta,
    #[serde(rename = "alpha")]
    #[value(name = "alpha")]
    Alpha,
}

impl Version {
    pub const ALL: [Version; 3] = [Version::Ga, Version::Beta, Version::Alpha];

    /// Path segment used for this version in compute URLs
    pub fn token(self) -> &'static str {
        match self {
            Version::Ga => "v1",
            Version::Beta => "beta",
            Version::Alpha => "alpha",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "ga" | "stable" => Ok(Version::Ga),
            "beta" => Ok(Version::Beta),
            "alpha" => Ok(Version::Alpha),
            _ => Err(format!("unknown compute API version: {s}")),
        }
    }
}
