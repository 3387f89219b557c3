mod app_protect;
mod health_status;
mod image;
mod integer;
mod manifest;
mod prometheus;
mod report_status;
mod service;
mod status_endpoint;

pub use app_protect::{AppProtectDosSpec, AppProtectSpec};
pub use health_status::HealthStatusSpec;
pub use image::ImageSpec;
pub use manifest::{IngressControllerManifest, IngressControllerStatus, ObjectMetaSpec};
pub use prometheus::PrometheusSpec;
pub use report_status::ReportIngressStatusSpec;
pub use service::ServiceSpec;
pub use status_endpoint::StatusEndpointSpec;

use integer::deserialize_wide_int;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Desired state of an ingress controller installation, as submitted by the user.
///
/// Every field is optional at this layer, including the required ones, so that
/// omissions and out-of-range values surface as validation violations instead of
/// deserialization failures. Unknown fields are ignored. The legacy wire names used
/// by existing custom resources are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressControllerSpec {
    /// `deployment` or `daemonset`.
    #[serde(alias = "type")]
    pub deployment_type: Option<String>,

    #[serde(alias = "KubewellPlus")]
    pub use_plus_edition: Option<bool>,

    pub image: Option<ImageSpec>,

    /// Only honoured for `deployment` installations.
    #[serde(default, alias = "replicas", deserialize_with = "deserialize_wide_int")]
    pub replica_count: Option<i128>,

    /// `namespace/name` of a kubernetes.io/tls Secret for the default server.
    #[serde(alias = "defaultSecret")]
    pub default_tls_secret_ref: Option<String>,

    /// `NodePort` or `LoadBalancer`.
    pub service_type: Option<String>,

    #[serde(alias = "enableCRDs")]
    pub crds_enabled: Option<bool>,

    #[serde(alias = "enableSnippets")]
    pub snippets_enabled: Option<bool>,

    #[serde(alias = "enablePreviewPolicies")]
    pub preview_policies_enabled: Option<bool>,

    pub ingress_class: Option<String>,

    pub service: Option<ServiceSpec>,

    pub watch_namespace: Option<String>,

    pub health_status: Option<HealthStatusSpec>,

    /// Requires `error-log-level: debug` in the extra config entries to be useful.
    #[serde(alias = "KubewellDebug")]
    pub debug_enabled: Option<bool>,

    #[serde(default, deserialize_with = "deserialize_wide_int")]
    pub log_level: Option<i128>,

    #[serde(alias = "KubewellStatus")]
    pub status_endpoint: Option<StatusEndpointSpec>,

    pub report_ingress_status: Option<ReportIngressStatusSpec>,

    #[serde(alias = "enableLeaderElection")]
    pub leader_election_enabled: Option<bool>,

    #[serde(alias = "wildcardTLS")]
    pub wildcard_tls_secret_ref: Option<String>,

    pub prometheus: Option<PrometheusSpec>,

    #[serde(alias = "enableLatencyMetrics")]
    pub latency_metrics_enabled: Option<bool>,

    /// Initial ConfigMap entries of the controller.
    #[serde(alias = "configMapData")]
    pub extra_config_entries: Option<BTreeMap<String, String>>,

    #[serde(alias = "globalConfiguration")]
    pub global_configuration_ref: Option<String>,

    #[serde(alias = "enableTLSPassthrough")]
    pub tls_passthrough_enabled: Option<bool>,

    pub app_protect: Option<AppProtectSpec>,

    pub app_protect_dos: Option<AppProtectDosSpec>,

    #[serde(default, alias = "KubewellReloadTimeout", deserialize_with = "deserialize_wide_int")]
    pub reload_timeout_ms: Option<i128>,
}
