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

use thiserror::Error;

/// Errors surfaced by an OctoPrint API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The printer could not be reached. Sensors keep their last state.
    #[error("connection error: {0}")]
    Connection(String),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while setting up the sensor platform
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no OctoPrint API client registered for {0}")]
    UnknownPrinter(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type SetupResult<T> = Result<T, SetupError>;
