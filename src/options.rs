use openstack_net::{OpenStackNetConfigurationOptions, ProductInfo};
use serde::{Deserialize, Serialize};

pub const PRODUCT_NAME: &str = "rackspace.net";

/// Rackspace-specific settings layered over the base SDK options.
/// Generally changed through [`crate::RackspaceNet::configure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RackspaceNetConfigurationOptions {
    pub base: OpenStackNetConfigurationOptions,
}

impl Default for RackspaceNetConfigurationOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RackspaceNetConfigurationOptions {
    pub fn new() -> Self {
        let mut options = Self {
            base: OpenStackNetConfigurationOptions::default(),
        };
        options.reset_defaults();
        options
    }

    pub fn user_agents(&self) -> &[ProductInfo] {
        &self.base.user_agents
    }

    pub fn add_user_agent(&mut self, product: ProductInfo) {
        self.base.user_agents.push(product);
    }

    /// Base defaults first, then this crate's own product token.
    pub fn reset_defaults(&mut self) {
        self.base.reset_defaults();
        self.base
            .user_agents
            .push(ProductInfo::from_static(PRODUCT_NAME, env!("CARGO_PKG_VERSION")));
    }

    /// Replaces `target`'s user agents with ours. Anything already on `target` is dropped.
    pub fn apply(&self, target: &mut OpenStackNetConfigurationOptions) {
        target.user_agents.clear();
        target
            .user_agents
            .extend(self.base.user_agents.iter().cloned());
    }
}
