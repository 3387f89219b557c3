use super::integer::deserialize_wide_int;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProtectSpec {
    pub enable: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProtectDosSpec {
    pub enable: Option<bool>,
    pub debug: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_wide_int")]
    pub max_daemons: Option<i128>,
    #[serde(default, deserialize_with = "deserialize_wide_int")]
    pub max_workers: Option<i128>,
    #[serde(default, alias = "memory", deserialize_with = "deserialize_wide_int")]
    pub memory_mb: Option<i128>,
}
