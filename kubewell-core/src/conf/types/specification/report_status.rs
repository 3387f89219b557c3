use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIngressStatusSpec {
    pub enable: Option<bool>,
    /// Ignored when the service type is `LoadBalancer`.
    pub external_service: Option<String>,
    /// Ignored when the service type is `LoadBalancer` or an external service is set.
    pub ingress_link: Option<String>,
}
