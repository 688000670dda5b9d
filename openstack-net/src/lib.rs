pub mod errors;
pub mod http;
pub mod json;
pub mod options;
pub mod trace;
pub mod user_agent;
mod registry;


// Public re-exports for easy access
pub use errors::ConfigError;
pub use http::HttpSettings;
pub use json::{Formatting, JsonSettings, NullValueHandling};
pub use options::OpenStackNetConfigurationOptions;
pub use trace::{TraceLevel, TraceSource, Tracing};
pub use user_agent::ProductInfo;

pub use registry::OpenStackNet;
