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

pub mod config;
pub mod sensor_types;
pub mod units;
pub mod value;

pub use config::{DiscoveryInfo, PrintSenseConfig, PrinterConfig, SensorsConfig, load_config};
pub use sensor_types::{SensorCondition, SensorTypeSpec, TemperatureKind};
pub use units::{DeviceClass, StateClass, UnitOfMeasurement};
pub use value::SensorValue;
