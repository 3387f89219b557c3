use super::integer::deserialize_wide_int;
use serde::Deserialize;

/// The stub_status page (or the Plus API) of the data plane.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEndpointSpec {
    pub enable: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_wide_int")]
    pub port: Option<i128>,
    /// Comma separated IP/CIDR blocks allowed to reach the endpoint.
    pub allow_cidrs: Option<String>,
}
