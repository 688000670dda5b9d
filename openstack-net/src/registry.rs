use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::{
    ConfigError, HttpSettings, JsonSettings, OpenStackNetConfigurationOptions, Tracing,
};

static GLOBAL: OnceLock<Arc<OpenStackNet>> = OnceLock::new();

/// Configuration registry for the base SDK.
///
/// Settings are applied once through [`OpenStackNet::configure`]; later calls are
/// ignored until [`OpenStackNet::reset_defaults`] runs. Callbacks edit copies that are
/// stored once they all return, so the accessors stay usable from inside a callback.
/// Calling `configure` or `reset_defaults` from a callback still deadlocks.
#[derive(Debug, Default)]
pub struct OpenStackNet {
    gate: Mutex<()>,
    configured: AtomicBool,
    options: RwLock<OpenStackNetConfigurationOptions>,
    http: RwLock<HttpSettings>,
    json: RwLock<JsonSettings>,
    tracing: Tracing,
}

impl OpenStackNet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> Arc<OpenStackNet> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(OpenStackNet::new())))
    }

    pub fn configure<H, J, O>(
        &self,
        configure_http: Option<H>,
        configure_json: Option<J>,
        configure_options: Option<O>,
    ) where
        H: FnOnce(&mut HttpSettings),
        J: FnOnce(&mut JsonSettings),
        O: FnOnce(&mut OpenStackNetConfigurationOptions),
    {
        let _gate = self.lock_gate();
        if self.is_configured() {
            debug!("openstack.net already configured, ignoring configure");
            return;
        }

        let mut http = self.http_settings();
        let mut json = self.json_settings();
        let mut options = self.options();
        if let Some(f) = configure_http {
            f(&mut http);
        }
        if let Some(f) = configure_json {
            f(&mut json);
        }
        if let Some(f) = configure_options {
            f(&mut options);
        }

        let header = options.user_agent_header();
        let timeout = http.timeout;
        *write(&self.http) = http;
        *write(&self.json) = json;
        *write(&self.options) = options;

        self.configured.store(true, Ordering::SeqCst);
        self.tracing.http.info(&format!(
            "configured: user-agent={:?} timeout={:?}",
            header, timeout
        ));
    }

    pub fn reset_defaults(&self) {
        let _gate = self.lock_gate();
        if !self.is_configured() {
            debug!("openstack.net not configured, nothing to reset");
            return;
        }

        *write(&self.options) = OpenStackNetConfigurationOptions::default();
        write(&self.http).reset_defaults();
        write(&self.json).reset_defaults();

        self.configured.store(false, Ordering::SeqCst);
        self.tracing.http.info("configuration reset to defaults");
    }

    pub fn is_configured(&self) -> bool {
        self.configured.load(Ordering::SeqCst)
    }

    pub fn options(&self) -> OpenStackNetConfigurationOptions {
        read(&self.options).clone()
    }

    pub fn http_settings(&self) -> HttpSettings {
        read(&self.http).clone()
    }

    pub fn json_settings(&self) -> JsonSettings {
        read(&self.json).clone()
    }

    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        read(&self.http).build_client(&read(&self.options))
    }

    pub fn tracing(&self) -> &Tracing {
        &self.tracing
    }

    // A callback that panicked poisons the gate; the flag was never set, so carry on.
    fn lock_gate(&self) -> MutexGuard<'_, ()> {
        self.gate
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
