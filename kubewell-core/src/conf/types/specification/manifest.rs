use crate::conf::types::IngressControllerSpec;
use serde::{Deserialize, Serialize};

/// A complete custom resource document. Only `spec` takes part in resolution;
/// `metadata` is kept for log context.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressControllerManifest {
    pub api_version: Option<String>,
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMetaSpec,
    #[serde(default)]
    pub spec: IngressControllerSpec,
    #[serde(default)]
    pub status: IngressControllerStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectMetaSpec {
    pub name: Option<String>,
    pub namespace: Option<String>,
}

impl ObjectMetaSpec {
    /// `namespace/name` when both are known, for log context.
    pub fn display_name(&self) -> String {
        match (&self.namespace, &self.name) {
            (Some(ns), Some(name)) => format!("{ns}/{name}"),
            (None, Some(name)) => name.clone(),
            _ => "<unnamed>".to_string(),
        }
    }
}

/// Observed state, written by the reconciler once the installation is materialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IngressControllerStatus {
    #[serde(default)]
    pub deployed: bool,
}
