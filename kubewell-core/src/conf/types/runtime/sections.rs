use crate::conf::types::{PullPolicy, ResourceRef};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub repository: String,
    pub tag: String,
    pub pull_policy: PullPolicy,
}

impl Image {
    /// `repository:tag`, as used in a container spec.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.repository, self.tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOverrides {
    pub extra_labels: BTreeMap<String, String>,
    pub extra_annotations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub enable: bool,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEndpoint {
    pub enable: bool,
    pub port: u16,
    pub allow_cidrs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIngressStatus {
    pub enable: bool,
    pub external_service: Option<String>,
    pub ingress_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prometheus {
    pub enable: bool,
    pub port: u16,
    pub secret: Option<ResourceRef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppProtect {
    pub enable: bool,
}

/// Unset limits fall back to the controller's own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProtectDos {
    pub enable: bool,
    pub debug: bool,
    pub max_daemons: Option<u32>,
    pub max_workers: Option<u32>,
    pub memory_mb: Option<u32>,
}
