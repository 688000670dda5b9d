use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, RwLock};

use openstack_net::{
    HttpSettings, JsonSettings, OpenStackNet, OpenStackNetConfigurationOptions, Tracing,
};
use tracing::{debug, info};

use crate::RackspaceNetConfigurationOptions;

static GLOBAL: OnceLock<RackspaceNet> = OnceLock::new();

/// Thread-safe gate over Rackspace.NET's configuration and the base SDK below it.
///
/// [`RackspaceNet::configure`] runs at most once until [`RackspaceNet::reset_defaults`]
/// reopens it. Repeated calls are silent no-ops. Callbacks may read the gate
/// (`configuration`, `is_configured`, `base`) but must not configure or reset it.
#[derive(Debug)]
pub struct RackspaceNet {
    gate: Mutex<()>,
    configured: AtomicBool,
    configuration: RwLock<RackspaceNetConfigurationOptions>,
    base: Arc<OpenStackNet>,
}

impl RackspaceNet {
    pub fn new(base: Arc<OpenStackNet>) -> Self {
        Self {
            gate: Mutex::new(()),
            configured: AtomicBool::new(false),
            configuration: RwLock::new(RackspaceNetConfigurationOptions::new()),
            base,
        }
    }

    /// The process-wide instance, layered over [`OpenStackNet::global`].
    pub fn global() -> &'static RackspaceNet {
        GLOBAL.get_or_init(|| RackspaceNet::new(OpenStackNet::global()))
    }

    /// Should be called once at start-up, before any service client is created.
    ///
    /// `configure` runs against the Rackspace options first; the resulting user agents
    /// then replace the base SDK's while `configure_http` and `configure_json` are
    /// forwarded to it unchanged.
    pub fn configure<H, J, O>(
        &self,
        configure_http: Option<H>,
        configure_json: Option<J>,
        configure: Option<O>,
    ) where
        H: FnOnce(&mut HttpSettings),
        J: FnOnce(&mut JsonSettings),
        O: FnOnce(&mut RackspaceNetConfigurationOptions),
    {
        let _gate = self.lock_gate();
        if self.is_configured() {
            debug!("rackspace.net already configured, ignoring configure");
            return;
        }

        let mut configuration = self.configuration();
        if let Some(f) = configure {
            f(&mut configuration);
        }

        self.base.configure(
            configure_http,
            configure_json,
            Some(|target: &mut OpenStackNetConfigurationOptions| configuration.apply(target)),
        );

        let user_agents = configuration.user_agents().len();
        *self
            .configuration
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = configuration;

        self.configured.store(true, Ordering::SeqCst);
        info!(user_agents, "rackspace.net configured");
    }

    /// Resets Rackspace.NET and the base SDK so [`RackspaceNet::configure`] can run again.
    pub fn reset_defaults(&self) {
        let _gate = self.lock_gate();
        if !self.is_configured() {
            debug!("rackspace.net not configured, nothing to reset");
            return;
        }

        self.configuration
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .reset_defaults();
        self.base.reset_defaults();

        self.configured.store(false, Ordering::SeqCst);
        info!("rackspace.net reset to defaults");
    }

    pub fn is_configured(&self) -> bool {
        self.configured.load(Ordering::SeqCst)
    }

    /// Snapshot of the current options.
    pub fn configuration(&self) -> RackspaceNetConfigurationOptions {
        self.configuration
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn base(&self) -> &OpenStackNet {
        &self.base
    }

    pub fn tracing(&self) -> &Tracing {
        self.base.tracing()
    }

    fn lock_gate(&self) -> MutexGuard<'_, ()> {
        self.gate
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
