//! Process-wide settings holder.
//!
//! [`GlobalSettings::instance`] is the only way to obtain the settings. The
//! first call fixes the environment name, the initial settings, and the
//! creation timestamp; later calls return the same instance unchanged.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::registry;

/// Shared, single-instance settings for the running process.
#[derive(Debug)]
pub struct GlobalSettings {
    environment: String,
    settings: RwLock<BTreeMap<String, String>>,
    created_at: DateTime<Utc>,
}

impl GlobalSettings {
    /// Returns the process-wide settings, creating them on first call.
    ///
    /// Arguments are only used by the call that creates the instance.
    pub fn instance(
        environment: impl Into<String>,
        settings: BTreeMap<String, String>,
    ) -> Arc<Self> {
        let environment = environment.into();
        registry::get_or_init(move || {
            tracing::info!(environment = %environment, "initializing global settings");
            Self {
                environment,
                settings: RwLock::new(settings),
                created_at: Utc::now(),
            }
        })
    }

    /// Returns the settings if they have already been created.
    pub fn current() -> Option<Arc<Self>> {
        registry::get::<Self>()
    }

    /// Environment name fixed at creation.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Creation timestamp; never changes, not even on [`reset`](Self::reset).
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Snapshot of the current settings map.
    #[must_use]
    pub fn settings(&self) -> BTreeMap<String, String> {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Looks up a single setting.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Clears every setting, keeping the environment and creation time.
    pub fn reset(&self) {
        tracing::debug!(environment = %self.environment, "resetting global settings");
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
