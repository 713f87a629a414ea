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
use printsense_types::SensorValue;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shared OctoPrint client used by every sensor of one printer.
/// Retries, pooling, authentication and response parsing live in the implementation.
#[async_trait]
pub trait OctoPrintApi: Send + Sync {
    /// Heaters reported by the printer, e.g. `["bed", "tool0"]`.
    /// Empty when the printer is offline.
    async fn get_tools(&self) -> ApiResult<Vec<String>>;

    /// Fetch one value from `endpoint`/`group`, selected by `sensor_type`
    /// and, for temperatures, `tool`. `None` means the API returned null.
    async fn update(
        &self,
        sensor_type: &str,
        endpoint: &str,
        group: &str,
        tool: Option<&str>,
    ) -> ApiResult<Option<SensorValue>>;
}

/// Shared API clients keyed by printer base URL
#[derive(Default, Clone)]
pub struct ApiRegistry {
    clients: HashMap<String, Arc<dyn OctoPrintApi>>,
}

impl ApiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the client for `base_url`, returning any client it replaces
    pub fn register(
        &mut self,
        base_url: impl Into<String>,
        client: Arc<dyn OctoPrintApi>,
    ) -> Option<Arc<dyn OctoPrintApi>> {
        self.clients.insert(base_url.into(), client)
    }

    pub fn get(&self, base_url: &str) -> Option<Arc<dyn OctoPrintApi>> {
        self.clients.get(base_url).cloned()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl fmt::Debug for ApiRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut urls: Vec<&String> = self.clients.keys().collect();
        urls.sort();
        f.debug_struct("ApiRegistry").field("printers", &urls).finish()
    }
}
