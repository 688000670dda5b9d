use anyhow::{Context, Result};
use clap::Parser;
use rackspace_net::openstack_net::{
    HttpSettings, JsonSettings, OpenStackNetConfigurationOptions, ProductInfo,
};
use rackspace_net::{RackspaceNet, Settings};
use serde::Serialize;
use tracing::info;

use crate::params::Params;

mod params;

#[derive(Serialize)]
struct Effective<'a> {
    user_agents: &'a [ProductInfo],
    user_agent_header: String,
    timeout_secs: f64,
    connect_timeout_secs: Option<f64>,
    default_headers: Vec<(String, String)>,
    json: JsonSettings,
}

impl<'a> Effective<'a> {
    fn new(
        options: &'a OpenStackNetConfigurationOptions,
        http: &HttpSettings,
        json: &JsonSettings,
    ) -> Self {
        Self {
            user_agents: &options.user_agents,
            user_agent_header: options.user_agent_header(),
            timeout_secs: http.timeout.as_secs_f64(),
            connect_timeout_secs: http.connect_timeout.map(|d| d.as_secs_f64()),
            default_headers: http.default_headers.clone(),
            json: json.clone(),
        }
    }
}

fn main() -> Result<()> {
    let params = Params::parse();

    tracing_subscriber::fmt()
        .with_max_level(params.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .compact()
        .init();

    let mut settings = Settings::load_or_default(params.config.as_ref())?;
    settings.user_agents.extend(params.user_agents.iter().cloned());
    if let Some(secs) = params.timeout_secs {
        settings.http.timeout_secs = Some(secs);
    }

    let rackspace = RackspaceNet::global();
    settings.configure(rackspace);
    info!("rackspace.net configured from {:?}", params.config);

    // fail early on headers the client would refuse
    rackspace
        .base()
        .http_client()
        .context("building http client")?;

    let options = rackspace.base().options();
    let http = rackspace.base().http_settings();
    let json = rackspace.base().json_settings();
    let effective = Effective::new(&options, &http, &json);

    println!("{}", json.to_string(&effective).context("rendering configuration")?);
    Ok(())
}
