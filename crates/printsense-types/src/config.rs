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

use crate::sensor_types::SensorCondition;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Top-level configuration: one entry per OctoPrint server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintSenseConfig {
    pub printers: Vec<PrinterConfig>,
}

/// Configuration for a single OctoPrint server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Display name, used as the prefix of every sensor name
    #[serde(default = "default_name")]
    pub name: String,

    /// Hostname or IP address of the OctoPrint server
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Path OctoPrint is served under; normalised to start and end with '/'
    #[serde(default = "default_path")]
    pub path: String,

    /// Use https instead of http
    #[serde(default)]
    pub ssl: bool,

    /// Printer has a heated bed. Together with `number_of_tools` this fixes
    /// the tool list so temperature sensors exist while the printer is off.
    #[serde(default)]
    pub bed: bool,

    #[serde(default)]
    pub number_of_tools: u32,

    #[serde(default)]
    pub sensors: SensorsConfig,
}

/// Which sensors to create for a printer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorsConfig {
    #[serde(default = "default_monitored_conditions")]
    pub monitored_conditions: Vec<SensorCondition>,
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            monitored_conditions: default_monitored_conditions(),
        }
    }
}

fn default_name() -> String {
    "OctoPrint".to_owned()
}

fn default_port() -> u16 {
    80
}

fn default_path() -> String {
    "/".to_owned()
}

fn default_monitored_conditions() -> Vec<SensorCondition> {
    SensorCondition::all().to_vec()
}

/// What the host hands the sensor platform for a discovered printer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryInfo {
    pub name: String,
    /// Key of the shared API client for this printer
    pub base_url: String,
    /// Monitored conditions, in creation order
    pub sensors: Vec<SensorCondition>,
    /// Tools from configuration; when empty the printer is asked instead
    #[serde(default)]
    pub tools: Vec<String>,
}

impl PrinterConfig {
    /// Base URL of the OctoPrint API, e.g. `http://octopi.local:80/api/`
    pub fn base_url(&self) -> String {
        let protocol = if self.ssl { "https" } else { "http" };
        format!(
            "{}://{}:{}{}api/",
            protocol,
            self.host,
            self.port,
            normalize_path(&self.path)
        )
    }

    /// Tools named by `number_of_tools` and `bed`: `tool0..toolN`, then `bed`
    pub fn configured_tools(&self) -> Vec<String> {
        let mut tools: Vec<String> = (0..self.number_of_tools)
            .map(|n| format!("tool{n}"))
            .collect();
        if self.bed {
            tools.push("bed".to_owned());
        }
        tools
    }

    pub fn discovery_info(&self) -> DiscoveryInfo {
        DiscoveryInfo {
            name: self.name.clone(),
            base_url: self.base_url(),
            sensors: self.sensors.monitored_conditions.clone(),
            tools: self.configured_tools(),
        }
    }
}

/// Ensure a URL path starts and ends with a single '/'
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}

impl PrintSenseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Printers must exist and be distinguishable by both name and base URL
    pub fn validate(&self) -> Result<()> {
        if self.printers.is_empty() {
            bail!("At least one printer must be configured");
        }

        let mut names = HashSet::new();
        let mut urls = HashSet::new();
        for printer in &self.printers {
            if printer.host.trim().is_empty() {
                bail!("Printer '{}' has an empty host", printer.name);
            }
            if !names.insert(printer.name.as_str()) {
                bail!("Duplicate printer name: '{}'", printer.name);
            }
            let base_url = printer.base_url();
            if !urls.insert(base_url.clone()) {
                bail!("Duplicate printer address: {}", base_url);
            }
        }
        Ok(())
    }

    pub fn discovery_infos(&self) -> Vec<DiscoveryInfo> {
        self.printers
            .iter()
            .map(PrinterConfig::discovery_info)
            .collect()
    }
}

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PrintSenseConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = PrintSenseConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    info!(
        "📋 Loaded configuration from {} ({} printer(s))",
        path.display(),
        config.printers.len()
    );
    Ok(config)
}
