use crate::conf::types::{DeploymentType, FieldPath, ReportIngressStatus, ServiceType, StatusSource};
use crate::conf::validation::ValidationReport;
use crate::conf::validation::fields::CheckedFields;

/// Second pass: cross-field rules over the defaulted values of the first pass.
///
/// Each rule is evaluated on its own so every unmet dependency is reported. A rule
/// is skipped only when one of the fields it reads already failed the first pass.
pub(crate) fn check_dependencies(fields: &CheckedFields, report: &mut ValidationReport) {
    let crds_enabled = FieldPath::root("crdsEnabled");

    let crd_dependents = [
        ("snippetsEnabled", Some(fields.snippets_enabled)),
        ("previewPoliciesEnabled", Some(fields.preview_policies_enabled)),
        (
            "globalConfigurationRef",
            fields.global_configuration.as_ref().map(Option::is_some),
        ),
        ("tlsPassthroughEnabled", Some(fields.tls_passthrough_enabled)),
        (
            "appProtect.enable",
            Some(fields.app_protect.is_some_and(|ap| ap.enable)),
        ),
        ("appProtectDos.enable", Some(fields.app_protect_dos_enabled)),
    ];

    for (field, active) in crd_dependents {
        if active == Some(true) && !fields.crds_enabled {
            report.unmet_dependency(&FieldPath::from(field), &crds_enabled);
        }
    }

    if let Some(status) = &fields.report_ingress_status
        && status.ingress_link.is_some()
        && !status.enable
    {
        let section = FieldPath::root("reportIngressStatus");
        report.unmet_dependency(&section.child("ingressLink"), &section.child("enable"));
    }

    if fields.deployment_type == Some(DeploymentType::DaemonSet) && fields.replica_count_set {
        report.ignored_field(
            &FieldPath::root("replicaCount"),
            "only applies when deploymentType is deployment",
        );
    }
}

/// Decide where Ingress status addresses come from.
///
/// Reporting must be enabled. A `LoadBalancer` service type always wins, then an
/// explicit external service, then an IngressLink.
pub fn derive_status_source(
    service_type: ServiceType,
    report_status: Option<&ReportIngressStatus>,
) -> StatusSource {
    let Some(status) = report_status.filter(|s| s.enable) else {
        return StatusSource::None;
    };

    if service_type == ServiceType::LoadBalancer {
        StatusSource::LoadBalancerService
    } else if status.external_service.is_some() {
        StatusSource::ExternalService
    } else if status.ingress_link.is_some() {
        StatusSource::IngressLink
    } else {
        StatusSource::None
    }
}
