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

use crate::api::{ApiRegistry, OctoPrintApi};
use crate::entity::AddEntities;
use crate::errors::{SetupError, SetupResult};
use crate::notification::{Notifier, offline_printer_notification};
use crate::sensor::OctoPrintSensor;
use printsense_types::{DiscoveryInfo, SensorCondition, TemperatureKind};
use std::sync::Arc;
use tracing::{info, warn};

/// Set up the OctoPrint sensors of one discovered printer.
///
/// Does nothing without discovery info. Looks up the shared client for the
/// printer's base URL, takes the configured tools or asks the printer for
/// them, warns the user through `notifier` when temperatures are monitored
/// but no tools are known, and hands every created sensor to the host with
/// `update_before_add` set.
pub async fn setup_platform<A>(
    discovery_info: Option<&DiscoveryInfo>,
    registry: &ApiRegistry,
    notifier: &dyn Notifier,
    add_entities: &mut A,
) -> SetupResult<()>
where
    A: AddEntities<OctoPrintSensor> + ?Sized,
{
    let Some(discovery_info) = discovery_info else {
        return Ok(());
    };

    let api = registry
        .get(&discovery_info.base_url)
        .ok_or_else(|| SetupError::UnknownPrinter(discovery_info.base_url.clone()))?;
    let tools = if discovery_info.tools.is_empty() {
        api.get_tools().await?
    } else {
        discovery_info.tools.clone()
    };

    if discovery_info
        .sensors
        .contains(&SensorCondition::Temperatures)
        && tools.is_empty()
    {
        warn!(
            "🖨️ [OCTOPRINT] {} reported no tools; temperature sensors skipped",
            discovery_info.name
        );
        notifier.create(offline_printer_notification());
    }

    let sensors = build_sensors(&api, &discovery_info.name, &discovery_info.sensors, &tools);
    info!(
        "🖨️ [OCTOPRINT] Adding {} sensor(s) for {} ({})",
        sensors.len(),
        discovery_info.name,
        discovery_info.base_url
    );
    add_entities.add_entities(sensors, true);
    Ok(())
}

/// Create sensors for `conditions`, in order.
/// Temperatures expand to an actual and a target sensor per tool.
pub fn build_sensors(
    api: &Arc<dyn OctoPrintApi>,
    name: &str,
    conditions: &[SensorCondition],
    tools: &[String],
) -> Vec<OctoPrintSensor> {
    let mut sensors = Vec::new();
    for condition in conditions {
        match condition {
            SensorCondition::Temperatures => {
                for tool in tools {
                    for kind in TemperatureKind::all() {
                        sensors.push(OctoPrintSensor::temperature(
                            Arc::clone(api),
                            name,
                            tool,
                            *kind,
                        ));
                    }
                }
            }
            SensorCondition::CurrentState
            | SensorCondition::JobPercentage
            | SensorCondition::TimeRemaining
            | SensorCondition::TimeElapsed => {
                sensors.push(OctoPrintSensor::for_condition(
                    Arc::clone(api),
                    name,
                    *condition,
                ));
            }
        }
    }
    sensors
}
