use std::path::PathBuf;

use clap::Parser;
use rackspace_net::openstack_net::ProductInfo;

#[derive(Parser, Debug)]
#[command(name = "rackspace-net", about = "Print the effective Rackspace.NET configuration")]
pub struct Params {
    /// TOML settings file.
    #[arg(long, env = "RACKSPACE_NET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra product token, e.g. `my-app/1.0`. Repeatable.
    #[arg(long = "user-agent")]
    pub user_agents: Vec<ProductInfo>,

    /// Overrides the settings file's HTTP timeout.
    #[arg(long, env = "RACKSPACE_NET_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    #[arg(long, env = "RACKSPACE_NET_LOG", default_value = "info")]
    pub log_level: tracing::Level,
}
