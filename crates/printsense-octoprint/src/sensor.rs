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

use crate::api::OctoPrintApi;
use crate::entity::SensorEntity;
use crate::errors::ApiResult;
use async_trait::async_trait;
use printsense_types::{
    DeviceClass, SensorCondition, SensorValue, StateClass, TemperatureKind, UnitOfMeasurement,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Decimal places kept for temperatures and percentages
const ROUND_DIGITS: i32 = 2;

/// Construction parameters for an [`OctoPrintSensor`]
#[derive(Debug, Clone)]
pub struct SensorParams {
    /// Condition shown in the sensor name ("Current State", "actual", ...)
    pub condition: String,
    /// Value selector passed to the API ("text", "completion", "actual", ...)
    pub sensor_type: String,
    /// Printer name, prefix of the sensor name
    pub sensor_name: String,
    pub unit: Option<UnitOfMeasurement>,
    pub endpoint: String,
    pub group: String,
    pub tool: Option<String>,
    pub icon: Option<String>,
    pub device_class: Option<DeviceClass>,
    pub state_class: Option<StateClass>,
}

/// One polled OctoPrint value exposed as a sensor entity
pub struct OctoPrintSensor {
    sensor_name: String,
    name: String,
    sensor_type: String,
    api: Arc<dyn OctoPrintApi>,
    state: Option<SensorValue>,
    unit: Option<UnitOfMeasurement>,
    endpoint: String,
    group: String,
    tool: Option<String>,
    icon: Option<String>,
    device_class: Option<DeviceClass>,
    state_class: Option<StateClass>,
}

impl OctoPrintSensor {
    pub fn new(api: Arc<dyn OctoPrintApi>, params: SensorParams) -> Self {
        let name = match &params.tool {
            None => format!("{} {}", params.sensor_name, params.condition),
            Some(tool) => format!("{} {} {} temp", params.sensor_name, params.condition, tool),
        };

        let sensor = Self {
            sensor_name: params.sensor_name,
            name,
            sensor_type: params.sensor_type,
            api,
            state: None,
            unit: params.unit,
            endpoint: params.endpoint,
            group: params.group,
            tool: params.tool,
            icon: params.icon,
            device_class: params.device_class,
            state_class: params.state_class,
        };
        debug!("Created OctoPrint sensor {:?}", sensor);
        sensor
    }

    /// Sensor for a non-temperature condition, described by the static table
    pub fn for_condition(
        api: Arc<dyn OctoPrintApi>,
        sensor_name: &str,
        condition: SensorCondition,
    ) -> Self {
        let spec = condition.spec();
        Self::new(
            api,
            SensorParams {
                condition: condition.display_name().to_owned(),
                sensor_type: spec.key.to_owned(),
                sensor_name: sensor_name.to_owned(),
                unit: spec.unit,
                endpoint: spec.endpoint.to_owned(),
                group: spec.group.to_owned(),
                tool: None,
                icon: spec.icon.map(str::to_owned),
                device_class: None,
                state_class: None,
            },
        )
    }

    /// Actual or target temperature of one tool
    pub fn temperature(
        api: Arc<dyn OctoPrintApi>,
        sensor_name: &str,
        tool: &str,
        kind: TemperatureKind,
    ) -> Self {
        let spec = SensorCondition::Temperatures.spec();
        Self::new(
            api,
            SensorParams {
                condition: kind.as_str().to_owned(),
                sensor_type: kind.as_str().to_owned(),
                sensor_name: sensor_name.to_owned(),
                unit: spec.unit,
                endpoint: spec.endpoint.to_owned(),
                group: spec.group.to_owned(),
                tool: Some(tool.to_owned()),
                icon: None,
                device_class: Some(DeviceClass::Temperature),
                state_class: Some(StateClass::Measurement),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Printer name this sensor belongs to
    pub fn sensor_name(&self) -> &str {
        &self.sensor_name
    }

    pub fn sensor_type(&self) -> &str {
        &self.sensor_type
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn tool(&self) -> Option<&str> {
        self.tool.as_deref()
    }

    /// Current value. Temperatures and percentages read as 0 when the API
    /// returned null and are rounded to two decimals.
    pub fn native_value(&self) -> Option<SensorValue> {
        match self.unit {
            Some(unit) if unit.rounds_value() => {
                let state = self.state.clone().unwrap_or(SensorValue::Number(0.0));
                Some(state.rounded(ROUND_DIGITS))
            }
            _ => self.state.clone(),
        }
    }

    pub fn native_unit_of_measurement(&self) -> Option<UnitOfMeasurement> {
        self.unit
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn device_class(&self) -> Option<DeviceClass> {
        self.device_class
    }

    pub fn state_class(&self) -> Option<StateClass> {
        self.state_class
    }

    /// Poll the API for this sensor's value.
    ///
    /// Connection failures keep the previous state and are not returned;
    /// the client has already logged them. Other API errors propagate.
    pub async fn update(&mut self) -> ApiResult<()> {
        let result = self
            .api
            .update(
                &self.sensor_type,
                &self.endpoint,
                &self.group,
                self.tool.as_deref(),
            )
            .await;

        match result {
            Ok(value) => {
                trace!("{} = {:?}", self.name, value);
                self.state = value;
                Ok(())
            }
            Err(e) if e.is_connection() => {
                debug!("Skipping update of {}: {}", self.name, e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl fmt::Debug for OctoPrintSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OctoPrintSensor")
            .field("name", &self.name)
            .field("sensor_type", &self.sensor_type)
            .field("endpoint", &self.endpoint)
            .field("group", &self.group)
            .field("tool", &self.tool)
            .field("unit", &self.unit)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SensorEntity for OctoPrintSensor {
    fn name(&self) -> &str {
        OctoPrintSensor::name(self)
    }

    fn native_value(&self) -> Option<SensorValue> {
        OctoPrintSensor::native_value(self)
    }

    fn native_unit_of_measurement(&self) -> Option<UnitOfMeasurement> {
        self.unit
    }

    fn icon(&self) -> Option<&str> {
        OctoPrintSensor::icon(self)
    }

    fn device_class(&self) -> Option<DeviceClass> {
        self.device_class
    }

    fn state_class(&self) -> Option<StateClass> {
        self.state_class
    }

    async fn update(&mut self) -> ApiResult<()> {
        OctoPrintSensor::update(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::testing::MockApi;

    #[test]
    fn test_names() {
        let api = MockApi::new(vec![]);
        let state =
            OctoPrintSensor::for_condition(api.clone(), "OctoPrint", SensorCondition::CurrentState);
        assert_eq!(state.name(), "OctoPrint Current State");

        let temp = OctoPrintSensor::temperature(api, "OctoPrint", "tool0", TemperatureKind::Target);
        assert_eq!(temp.name(), "OctoPrint target tool0 temp");
    }

    #[test]
    fn test_table_metadata() {
        let api = MockApi::new(vec![]);
        let sensor = OctoPrintSensor::for_condition(api, "Prusa", SensorCondition::TimeRemaining);

        assert_eq!(sensor.sensor_type(), "printTimeLeft");
        assert_eq!(sensor.endpoint(), "job");
        assert_eq!(sensor.group(), "progress");
        assert_eq!(sensor.tool(), None);
        assert_eq!(
            sensor.native_unit_of_measurement(),
            Some(UnitOfMeasurement::Seconds)
        );
        assert_eq!(sensor.icon(), Some("mdi:clock-end"));
        assert_eq!(sensor.device_class(), None);
        assert_eq!(sensor.state_class(), None);
    }

    #[test]
    fn test_temperature_metadata() {
        let api = MockApi::new(vec![]);
        let sensor = OctoPrintSensor::temperature(api, "Prusa", "bed", TemperatureKind::Actual);

        assert_eq!(sensor.sensor_type(), "actual");
        assert_eq!(sensor.endpoint(), "printer");
        assert_eq!(sensor.group(), "temperature");
        assert_eq!(sensor.tool(), Some("bed"));
        assert_eq!(sensor.icon(), None);
        assert_eq!(sensor.device_class(), Some(DeviceClass::Temperature));
        assert_eq!(sensor.state_class(), Some(StateClass::Measurement));
    }

    #[test]
    fn test_absent_rounded_values_read_as_zero() {
        let api = MockApi::new(vec![]);
        let temp = OctoPrintSensor::temperature(api.clone(), "P", "bed", TemperatureKind::Actual);
        assert_eq!(temp.native_value(), Some(SensorValue::Number(0.0)));

        let progress =
            OctoPrintSensor::for_condition(api.clone(), "P", SensorCondition::JobPercentage);
        assert_eq!(progress.native_value(), Some(SensorValue::Number(0.0)));

        let remaining =
            OctoPrintSensor::for_condition(api.clone(), "P", SensorCondition::TimeRemaining);
        assert_eq!(remaining.native_value(), None);

        let state = OctoPrintSensor::for_condition(api, "P", SensorCondition::CurrentState);
        assert_eq!(state.native_value(), None);
    }

    #[tokio::test]
    async fn test_update_stores_value_and_rounds() {
        let api = MockApi::new(vec![Ok(Some(SensorValue::Number(54.12345)))]);
        let mut sensor =
            OctoPrintSensor::for_condition(api.clone(), "P", SensorCondition::JobPercentage);

        sensor.update().await.unwrap();

        assert_eq!(sensor.native_value(), Some(SensorValue::Number(54.12)));
        assert_eq!(
            api.calls(),
            vec![(
                "completion".to_owned(),
                "job".to_owned(),
                "progress".to_owned(),
                None
            )]
        );
    }

    #[tokio::test]
    async fn test_update_passes_tool() {
        let api = MockApi::new(vec![Ok(Some(SensorValue::Number(210.0)))]);
        let mut sensor =
            OctoPrintSensor::temperature(api.clone(), "P", "tool1", TemperatureKind::Target);

        sensor.update().await.unwrap();

        assert_eq!(sensor.native_value(), Some(SensorValue::Number(210.0)));
        assert_eq!(api.calls()[0].3.as_deref(), Some("tool1"));
    }

    #[tokio::test]
    async fn test_seconds_are_not_rounded() {
        let api = MockApi::new(vec![Ok(Some(SensorValue::Number(1234.5678)))]);
        let mut sensor = OctoPrintSensor::for_condition(api, "P", SensorCondition::TimeElapsed);

        sensor.update().await.unwrap();

        assert_eq!(sensor.native_value(), Some(SensorValue::Number(1234.5678)));
    }

    #[tokio::test]
    async fn test_text_state_passes_through() {
        let api = MockApi::new(vec![Ok(Some(SensorValue::from("Printing")))]);
        let mut sensor = OctoPrintSensor::for_condition(api, "P", SensorCondition::CurrentState);

        sensor.update().await.unwrap();

        assert_eq!(sensor.native_value(), Some(SensorValue::from("Printing")));
        assert_eq!(SensorEntity::state(&sensor).as_deref(), Some("Printing"));
    }

    #[tokio::test]
    async fn test_connection_error_keeps_previous_state() {
        let api = MockApi::new(vec![
            Ok(Some(SensorValue::Number(199.876))),
            Err(ApiError::Connection("printer unreachable".to_owned())),
        ]);
        let mut sensor =
            OctoPrintSensor::temperature(api.clone(), "P", "tool0", TemperatureKind::Actual);

        sensor.update().await.unwrap();
        sensor.update().await.unwrap();

        assert_eq!(sensor.native_value(), Some(SensorValue::Number(199.88)));
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_other_errors_propagate() {
        let api = MockApi::new(vec![
            Ok(Some(SensorValue::from("Operational"))),
            Err(ApiError::Status {
                status: 409,
                message: "Printer is not operational".to_owned(),
            }),
        ]);
        let mut sensor = OctoPrintSensor::for_condition(api, "P", SensorCondition::CurrentState);

        sensor.update().await.unwrap();
        let result = sensor.update().await;

        assert!(matches!(result, Err(ApiError::Status { status: 409, .. })));
        assert_eq!(sensor.native_value(), Some(SensorValue::from("Operational")));
    }

    #[tokio::test]
    async fn test_null_from_api_clears_state() {
        let api = MockApi::new(vec![Ok(Some(SensorValue::Number(600.0))), Ok(None)]);
        let mut sensor = OctoPrintSensor::for_condition(api, "P", SensorCondition::TimeRemaining);

        sensor.update().await.unwrap();
        assert_eq!(sensor.native_value(), Some(SensorValue::Number(600.0)));

        sensor.update().await.unwrap();
        assert_eq!(sensor.native_value(), None);
    }

    #[test]
    fn test_debug_output_omits_client() {
        let api = MockApi::new(vec![]);
        let sensor = OctoPrintSensor::for_condition(api, "P", SensorCondition::CurrentState);
        let debug = format!("{sensor:?}");

        assert!(debug.starts_with("OctoPrintSensor { name: \"P Current State\""));
        assert!(!debug.contains("MockApi"));
    }
}
