use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rackspace_net::openstack_net::{HttpSettings, JsonSettings, OpenStackNet};
use rackspace_net::{RackspaceNet, RackspaceNetConfigurationOptions};

pub type HttpFn = fn(&mut HttpSettings);
pub type JsonFn = fn(&mut JsonSettings);

/// A facade over its own base registry, so tests never touch the process globals.
pub fn isolated() -> RackspaceNet {
    RackspaceNet::new(Arc::new(OpenStackNet::new()))
}

#[derive(Default)]
pub struct CallCounts {
    pub http: AtomicUsize,
    pub json: AtomicUsize,
    pub options: AtomicUsize,
}

impl CallCounts {
    pub fn configure(&self, rackspace: &RackspaceNet) {
        rackspace.configure(
            Some(|_: &mut HttpSettings| {
                self.http.fetch_add(1, Ordering::SeqCst);
            }),
            Some(|_: &mut JsonSettings| {
                self.json.fetch_add(1, Ordering::SeqCst);
            }),
            Some(|_: &mut RackspaceNetConfigurationOptions| {
                self.options.fetch_add(1, Ordering::SeqCst);
            }),
        );
    }

    pub fn snapshot(&self) -> (usize, usize, usize) {
        (
            self.http.load(Ordering::SeqCst),
            self.json.load(Ordering::SeqCst),
            self.options.load(Ordering::SeqCst),
        )
    }
}
