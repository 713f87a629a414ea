// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of PrintSense.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use serde::{Deserialize, Serialize};
use std::fmt;

/// Units reported by OctoPrint sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitOfMeasurement {
    #[serde(rename = "°C")]
    Celsius,
    #[serde(rename = "%")]
    Percentage,
    #[serde(rename = "s")]
    Seconds,
}

impl UnitOfMeasurement {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Percentage => "%",
            Self::Seconds => "s",
        }
    }

    /// Temperatures and percentages read as 0 when absent and are rounded
    /// to two decimals. Other units pass through untouched.
    pub fn rounds_value(&self) -> bool {
        matches!(self, Self::Celsius | Self::Percentage)
    }
}

impl fmt::Display for UnitOfMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Temperature,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    Measurement,
}

impl StateClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Measurement => "measurement",
        }
    }
}
