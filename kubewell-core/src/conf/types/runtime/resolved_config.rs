use crate::conf::types::{
    AppProtect, AppProtectDos, DeploymentType, HealthStatus, Image, Prometheus,
    ReportIngressStatus, ResourceRef, ServiceOverrides, ServiceType, StatusEndpoint,
    StatusSource, WatchScope,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// The fully defaulted and validated form of an [`IngressControllerSpec`].
///
/// Produced only by [`resolve`]; every optional input has either its explicit value
/// or its documented default, and every reference is well-formed. A new spec always
/// yields a new value; nothing here is updated in place.
///
/// [`IngressControllerSpec`]: crate::conf::types::IngressControllerSpec
/// [`resolve`]: crate::conf::validation::resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub deployment_type: DeploymentType,
    pub use_plus_edition: bool,
    pub image: Image,
    /// `Some` for deployments (default 1), always `None` for daemonsets.
    pub replica_count: Option<i32>,
    pub default_tls_secret: Option<ResourceRef>,
    pub service_type: ServiceType,
    pub crds_enabled: bool,
    pub snippets_enabled: bool,
    pub preview_policies_enabled: bool,
    pub ingress_class: String,
    pub service: Option<ServiceOverrides>,
    pub watch_namespace: WatchScope,
    pub health_status: Option<HealthStatus>,
    pub debug_enabled: bool,
    pub log_level: u8,
    pub status_endpoint: Option<StatusEndpoint>,
    pub report_ingress_status: Option<ReportIngressStatus>,
    pub status_source: StatusSource,
    pub leader_election_enabled: bool,
    pub wildcard_tls_secret: Option<ResourceRef>,
    pub prometheus: Option<Prometheus>,
    pub latency_metrics_enabled: bool,
    pub extra_config_entries: BTreeMap<String, String>,
    pub global_configuration: Option<ResourceRef>,
    pub tls_passthrough_enabled: bool,
    pub app_protect: Option<AppProtect>,
    pub app_protect_dos: Option<AppProtectDos>,
    pub reload_timeout_ms: u32,
}

impl ResolvedConfig {
    pub fn prometheus_enabled(&self) -> bool {
        self.prometheus.as_ref().is_some_and(|p| p.enable)
    }

    pub fn status_endpoint_enabled(&self) -> bool {
        self.status_endpoint.as_ref().is_some_and(|s| s.enable)
    }
}
