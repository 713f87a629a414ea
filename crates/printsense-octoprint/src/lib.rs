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

pub mod api;
pub mod entity;
pub mod errors;
pub mod notification;
pub mod platform;
pub mod sensor;

#[cfg(test)]
mod testing;

pub use api::{ApiRegistry, OctoPrintApi};
pub use entity::{AddEntities, SensorEntity};
pub use errors::{ApiError, ApiResult, SetupError, SetupResult};
pub use notification::{LogNotifier, Notifier, PersistentNotification};
pub use platform::{build_sensors, setup_platform};
pub use sensor::{OctoPrintSensor, SensorParams};
