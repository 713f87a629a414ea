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
use crate::errors::{ApiError, ApiResult};
use async_trait::async_trait;
use printsense_types::SensorValue;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub(crate) type UpdateCall = (String, String, String, Option<String>);

/// Scripted API client: replays queued responses and records every call.
/// Once the queue is empty every update returns `Ok(None)`.
pub(crate) struct MockApi {
    tools: Vec<String>,
    tools_error: Option<String>,
    responses: Mutex<VecDeque<ApiResult<Option<SensorValue>>>>,
    calls: Mutex<Vec<UpdateCall>>,
}

impl MockApi {
    pub(crate) fn new(responses: Vec<ApiResult<Option<SensorValue>>>) -> Arc<Self> {
        Self::with_tools(&[], responses)
    }

    pub(crate) fn with_tools(
        tools: &[&str],
        responses: Vec<ApiResult<Option<SensorValue>>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            tools: tools.iter().map(|t| (*t).to_owned()).collect(),
            tools_error: None,
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Client whose tool query fails with `ApiError::Status`
    pub(crate) fn failing_tools(message: &str) -> Arc<Self> {
        Arc::new(Self {
            tools: Vec::new(),
            tools_error: Some(message.to_owned()),
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> Vec<UpdateCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OctoPrintApi for MockApi {
    async fn get_tools(&self) -> ApiResult<Vec<String>> {
        match &self.tools_error {
            Some(message) => Err(ApiError::Status {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(self.tools.clone()),
        }
    }

    async fn update(
        &self,
        sensor_type: &str,
        endpoint: &str,
        group: &str,
        tool: Option<&str>,
    ) -> ApiResult<Option<SensorValue>> {
        self.calls.lock().unwrap().push((
            sensor_type.to_owned(),
            endpoint.to_owned(),
            group.to_owned(),
            tool.map(str::to_owned),
        ));
        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }
}
