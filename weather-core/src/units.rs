use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Error;

/// Measurement system requested from the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kelvin.
    Standard,
    /// Celsius.
    Metric,
    /// Fahrenheit.
    #[default]
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Standard, Units::Metric, Units::Imperial]
    }

    /// Single-letter temperature label used in summaries.
    pub fn temperature_initial(&self) -> &'static str {
        match self {
            Units::Standard => "K",
            Units::Metric => "C",
            Units::Imperial => "F",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "standard" => Ok(Units::Standard),
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(Error::InvalidUnits(value.to_string())),
        }
    }
}
