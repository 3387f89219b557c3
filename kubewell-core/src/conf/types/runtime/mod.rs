mod defaults;
mod kinds;
mod resolved_config;
mod resource_ref;
mod sections;

pub use defaults::*;
pub use kinds::{DeploymentType, PullPolicy, ServiceType, StatusSource, WatchScope, WireEnum};
pub use resolved_config::ResolvedConfig;
pub use resource_ref::{ResourceRef, ResourceRefError};
pub use sections::{
    AppProtect, AppProtectDos, HealthStatus, Image, Prometheus, ReportIngressStatus,
    ServiceOverrides, StatusEndpoint,
};
