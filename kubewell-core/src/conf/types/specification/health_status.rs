use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatusSpec {
    pub enable: Option<bool>,
    pub uri: Option<String>,
}
