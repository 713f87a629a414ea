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

use serde::Serialize;
use tracing::warn;

pub const NOTIFICATION_ID: &str = "octoprint_notification";
pub const NOTIFICATION_TITLE: &str = "OctoPrint sensor setup error";

const OFFLINE_MESSAGE: &str = concat!(
    "Your printer appears to be offline.<br />",
    "If you do not want to have your printer on <br />",
    " at all times, and you would like to monitor <br /> ",
    "temperatures, please add <br />",
    "bed and/or number&#95;of&#95;tools to your configuration <br />",
    "and restart."
);

/// A notification that stays visible until the user dismisses it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistentNotification {
    pub message: String,
    pub title: String,
    pub notification_id: String,
}

/// Raised when temperatures are monitored but the printer reports no tools
pub fn offline_printer_notification() -> PersistentNotification {
    PersistentNotification {
        message: OFFLINE_MESSAGE.to_owned(),
        title: NOTIFICATION_TITLE.to_owned(),
        notification_id: NOTIFICATION_ID.to_owned(),
    }
}

/// Host service that shows persistent notifications
pub trait Notifier: Send + Sync {
    fn create(&self, notification: PersistentNotification);
}

/// Notifier that only writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn create(&self, notification: PersistentNotification) {
        warn!(
            notification_id = %notification.notification_id,
            "🔔 [NOTIFY] {}: {}",
            notification.title,
            notification.message
        );
    }
}
