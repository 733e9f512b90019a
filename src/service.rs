//! Sample service configuration bound by the demo binary.

use std::time::Duration;

use envbind::{Bindable, Schema};

/// Settings for a small network service.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Service name used in logs.
    pub name: String,
    pub listen_addr: String,
    pub port: i32,
    /// Enables verbose request logging.
    pub debug: bool,
    /// Fraction of requests traced, between 0 and 1.
    pub sample_rate: f32,
    pub request_timeout: Duration,
    /// How long in-flight requests get to finish on shutdown.
    pub shutdown_grace: Duration,
    /// Set by the host after binding; never read from the environment.
    pub instance_id: String,
}

impl Bindable for ServiceConfig {
    fn schema() -> Schema<Self> {
        Schema::<Self>::builder()
            .text("name", "SERVICE_NAME", "envbind-demo", |c| &mut c.name)
            .text("listen_addr", "SERVICE_LISTEN_ADDR", "127.0.0.1", |c| {
                &mut c.listen_addr
            })
            .int("port", "SERVICE_PORT", "8080", |c| &mut c.port)
            .bool("debug", "SERVICE_DEBUG", "false", |c| &mut c.debug)
            .float("sample_rate", "SERVICE_SAMPLE_RATE", "0.1", |c| {
                &mut c.sample_rate
            })
            .duration("request_timeout", "SERVICE_REQUEST_TIMEOUT", "30s", |c| {
                &mut c.request_timeout
            })
            .duration("shutdown_grace", "SERVICE_SHUTDOWN_GRACE", "5s", |c| {
                &mut c.shutdown_grace
            })
            .text("instance_id", "", "", |c| &mut c.instance_id)
            .build()
    }
}
