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

use crate::units::UnitOfMeasurement;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monitored conditions supported by the OctoPrint sensor platform.
/// Serialized with the same human-readable names users put in their config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorCondition {
    /// Tool and bed temperatures, expanded per tool into actual/target sensors
    Temperatures,
    #[serde(rename = "Current State")]
    CurrentState,
    #[serde(rename = "Job Percentage")]
    JobPercentage,
    #[serde(rename = "Time Remaining")]
    TimeRemaining,
    #[serde(rename = "Time Elapsed")]
    TimeElapsed,
}

/// One row of the static sensor table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorTypeSpec {
    /// OctoPrint API endpoint, e.g. "printer" or "job"
    pub endpoint: &'static str,
    /// Group inside the endpoint response, e.g. "temperature" or "progress"
    pub group: &'static str,
    /// Key of the value inside the group ("*" for per-tool temperatures)
    pub key: &'static str,
    pub unit: Option<UnitOfMeasurement>,
    pub icon: Option<&'static str>,
}

impl SensorCondition {
    /// Static table lookup for this condition
    pub fn spec(&self) -> SensorTypeSpec {
        match self {
            Self::Temperatures => SensorTypeSpec {
                endpoint: "printer",
                group: "temperature",
                key: "*",
                unit: Some(UnitOfMeasurement::Celsius),
                icon: None,
            },
            Self::CurrentState => SensorTypeSpec {
                endpoint: "printer",
                group: "state",
                key: "text",
                unit: None,
                icon: Some("mdi:printer-3d"),
            },
            Self::JobPercentage => SensorTypeSpec {
                endpoint: "job",
                group: "progress",
                key: "completion",
                unit: Some(UnitOfMeasurement::Percentage),
                icon: Some("mdi:file-percent"),
            },
            Self::TimeRemaining => SensorTypeSpec {
                endpoint: "job",
                group: "progress",
                key: "printTimeLeft",
                unit: Some(UnitOfMeasurement::Seconds),
                icon: Some("mdi:clock-end"),
            },
            Self::TimeElapsed => SensorTypeSpec {
                endpoint: "job",
                group: "progress",
                key: "printTime",
                unit: Some(UnitOfMeasurement::Seconds),
                icon: Some("mdi:clock-start"),
            },
        }
    }

    /// Human-readable condition name, as used in configuration
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Temperatures => "Temperatures",
            Self::CurrentState => "Current State",
            Self::JobPercentage => "Job Percentage",
            Self::TimeRemaining => "Time Remaining",
            Self::TimeElapsed => "Time Elapsed",
        }
    }

    /// All conditions in table order. This is also the default monitored set.
    pub fn all() -> &'static [SensorCondition] {
        &[
            Self::Temperatures,
            Self::CurrentState,
            Self::JobPercentage,
            Self::TimeRemaining,
            Self::TimeElapsed,
        ]
    }
}

impl fmt::Display for SensorCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SensorCondition {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .find(|c| c.display_name() == s)
            .copied()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown sensor condition: '{}'. Supported conditions: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(SensorCondition::display_name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// Temperature reading kind; every tool gets one sensor per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureKind {
    Actual,
    Target,
}

impl TemperatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actual => "actual",
            Self::Target => "target",
        }
    }

    /// Kinds in the order sensors are created for each tool
    pub fn all() -> &'static [TemperatureKind] {
        &[Self::Actual, Self::Target]
    }
}

impl fmt::Display for TemperatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
