use serde::Serialize;
use std::fmt;

/// A closed set of values with fixed, case-sensitive wire spellings.
pub trait WireEnum: Sized + Copy + 'static {
    const VARIANTS: &'static [(&'static str, Self)];
    const ALLOWED: &'static [&'static str];

    fn from_wire(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(wire, _)| *wire == value)
            .map(|(_, variant)| *variant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentType {
    Deployment,
    #[serde(rename = "daemonset")]
    DaemonSet,
}

impl WireEnum for DeploymentType {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("deployment", Self::Deployment),
        ("daemonset", Self::DaemonSet),
    ];
    const ALLOWED: &'static [&'static str] = &["deployment", "daemonset"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceType {
    NodePort,
    LoadBalancer,
}

impl WireEnum for ServiceType {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("NodePort", Self::NodePort),
        ("LoadBalancer", Self::LoadBalancer),
    ];
    const ALLOWED: &'static [&'static str] = &["NodePort", "LoadBalancer"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PullPolicy {
    Never,
    Always,
    IfNotPresent,
}

impl WireEnum for PullPolicy {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("Never", Self::Never),
        ("Always", Self::Always),
        ("IfNotPresent", Self::IfNotPresent),
    ];
    const ALLOWED: &'static [&'static str] = &["Never", "Always", "IfNotPresent"];
}

/// Where the controller takes the address it writes into Ingress status.
///
/// Precedence: the operator-managed LoadBalancer service, then the named external
/// service, then the IngressLink resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusSource {
    LoadBalancerService,
    ExternalService,
    IngressLink,
    None,
}

impl fmt::Display for StatusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusSource::LoadBalancerService => "load balancer service",
            StatusSource::ExternalService => "external service",
            StatusSource::IngressLink => "ingress link",
            StatusSource::None => "none",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WatchScope {
    AllNamespaces,
    Namespace(String),
}

impl fmt::Display for WatchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchScope::AllNamespaces => f.write_str("all namespaces"),
            WatchScope::Namespace(ns) => write!(f, "namespace {ns}"),
        }
    }
}

macro_rules! wire_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let wire = <$ty as WireEnum>::VARIANTS
                        .iter()
                        .find(|(_, variant)| variant == self)
                        .map(|(wire, _)| *wire)
                        .unwrap_or_default();
                    f.write_str(wire)
                }
            }
        )*
    };
}

wire_display!(DeploymentType, ServiceType, PullPolicy);
