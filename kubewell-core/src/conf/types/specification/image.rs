use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSpec {
    pub repository: Option<String>,
    pub tag: Option<String>,
    /// `Never`, `Always` or `IfNotPresent`.
    pub pull_policy: Option<String>,
}
