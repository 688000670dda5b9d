use serde::{Deserialize, Serialize};

use crate::ProductInfo;

pub const PRODUCT_NAME: &str = "openstack.net";

/// Settings shared by every OpenStack.NET service client.
/// Generally changed through [`crate::OpenStackNet::configure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenStackNetConfigurationOptions {
    /// Products advertised in the `User-Agent` header, in order.
    pub user_agents: Vec<ProductInfo>,
}

impl Default for OpenStackNetConfigurationOptions {
    fn default() -> Self {
        Self {
            user_agents: vec![ProductInfo::from_static(
                PRODUCT_NAME,
                env!("CARGO_PKG_VERSION"),
            )],
        }
    }
}

impl OpenStackNetConfigurationOptions {
    /// Clears the user agents without re-adding `openstack.net`; layers built on top
    /// append their own product instead.
    pub fn reset_defaults(&mut self) {
        self.user_agents.clear();
    }

    pub fn user_agent_header(&self) -> String {
        self.user_agents
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
