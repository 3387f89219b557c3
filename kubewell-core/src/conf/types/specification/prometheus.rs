use super::integer::deserialize_wide_int;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrometheusSpec {
    pub enable: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_wide_int")]
    pub port: Option<i128>,
    #[serde(alias = "secret")]
    pub secret_ref: Option<String>,
}
