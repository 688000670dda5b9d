mod options;
mod registry;
mod settings;

use openstack_net::{HttpSettings, JsonSettings, Tracing};

pub use openstack_net;
pub use options::{RackspaceNetConfigurationOptions, PRODUCT_NAME};
pub use registry::RackspaceNet;
pub use settings::{HttpSection, JsonSection, Settings, TracingSection};

/// Configures the process-wide instance once. See [`RackspaceNet::configure`].
pub fn configure<H, J, O>(configure_http: Option<H>, configure_json: Option<J>, configure: Option<O>)
where
    H: FnOnce(&mut HttpSettings),
    J: FnOnce(&mut JsonSettings),
    O: FnOnce(&mut RackspaceNetConfigurationOptions),
{
    RackspaceNet::global().configure(configure_http, configure_json, configure)
}

/// Resets the process-wide instance, Rackspace.NET and base SDK alike.
pub fn reset_defaults() {
    RackspaceNet::global().reset_defaults()
}

/// Global configuration. Modify using [`configure`].
pub fn configuration() -> RackspaceNetConfigurationOptions {
    RackspaceNet::global().configuration()
}

pub fn is_configured() -> bool {
    RackspaceNet::global().is_configured()
}

/// Trace sources of the process-wide instance; the same handles as [`RackspaceNet::tracing`].
pub fn trace_sources() -> &'static Tracing {
    RackspaceNet::global().tracing()
}
