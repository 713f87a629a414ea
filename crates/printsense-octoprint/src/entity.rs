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

use crate::errors::ApiResult;
use async_trait::async_trait;
use printsense_types::{DeviceClass, SensorValue, StateClass, UnitOfMeasurement};

/// What the host reads from a polled sensor entity
#[async_trait]
pub trait SensorEntity: Send + Sync {
    fn name(&self) -> &str;

    fn native_value(&self) -> Option<SensorValue>;

    fn native_unit_of_measurement(&self) -> Option<UnitOfMeasurement>;

    fn icon(&self) -> Option<&str> {
        None
    }

    fn device_class(&self) -> Option<DeviceClass> {
        None
    }

    fn state_class(&self) -> Option<StateClass> {
        None
    }

    /// State as the host displays it
    fn state(&self) -> Option<String> {
        self.native_value().map(|value| value.to_string())
    }

    /// Refresh the stored state; called by the host on every poll
    async fn update(&mut self) -> ApiResult<()>;
}

/// Host callback that registers newly created entities.
/// With `update_before_add` the host polls each entity once before adding it.
pub trait AddEntities<E> {
    fn add_entities(&mut self, entities: Vec<E>, update_before_add: bool);
}

impl<E, F> AddEntities<E> for F
where
    F: FnMut(Vec<E>, bool),
{
    fn add_entities(&mut self, entities: Vec<E>, update_before_add: bool) {
        self(entities, update_before_add);
    }
}
