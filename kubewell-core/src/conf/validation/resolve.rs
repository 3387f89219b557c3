use crate::conf::types::{
    DEFAULT_REPLICA_COUNT, DeploymentType, IngressControllerSpec, ResolvedConfig,
};
use crate::conf::validation::dependencies::{check_dependencies, derive_status_source};
use crate::conf::validation::fields::{CheckedFields, check_fields};
use crate::conf::validation::{ValidatedConfig, ValidationErrors, ValidationReport};

/// Validate `spec`, apply defaults and derive the status source.
///
/// Pure and deterministic: no I/O, no logging, no shared state. Either every hard
/// violation is returned together, or a complete [`ResolvedConfig`] is returned with
/// any warnings.
pub fn resolve(spec: &IngressControllerSpec) -> Result<ValidatedConfig, ValidationErrors> {
    let mut report = ValidationReport::default();

    let fields = check_fields(spec, &mut report);
    check_dependencies(&fields, &mut report);

    let config = assemble(fields);
    debug_assert!(
        config.is_some() || report.has_errors(),
        "a field failed without recording a violation"
    );

    let warnings = report.into_result()?;
    config
        .map(|config| ValidatedConfig { config, warnings })
        .ok_or_else(|| ValidationErrors(Vec::new()))
}

fn assemble(fields: CheckedFields) -> Option<ResolvedConfig> {
    let deployment_type = fields.deployment_type?;
    let service_type = fields.service_type?;

    let replica_count = match deployment_type {
        DeploymentType::Deployment => Some(fields.replica_count?.unwrap_or(DEFAULT_REPLICA_COUNT)),
        DeploymentType::DaemonSet => None,
    };

    let status_source = derive_status_source(service_type, fields.report_ingress_status.as_ref());

    Some(ResolvedConfig {
        deployment_type,
        use_plus_edition: fields.use_plus_edition,
        image: fields.image?,
        replica_count,
        default_tls_secret: fields.default_tls_secret?,
        service_type,
        crds_enabled: fields.crds_enabled,
        snippets_enabled: fields.snippets_enabled,
        preview_policies_enabled: fields.preview_policies_enabled,
        ingress_class: fields.ingress_class,
        service: fields.service,
        watch_namespace: fields.watch_namespace,
        health_status: fields.health_status?,
        debug_enabled: fields.debug_enabled,
        log_level: fields.log_level?,
        status_endpoint: fields.status_endpoint?,
        report_ingress_status: fields.report_ingress_status,
        status_source,
        leader_election_enabled: fields.leader_election_enabled,
        wildcard_tls_secret: fields.wildcard_tls_secret?,
        prometheus: fields.prometheus?,
        latency_metrics_enabled: fields.latency_metrics_enabled,
        extra_config_entries: fields.extra_config_entries,
        global_configuration: fields.global_configuration?,
        tls_passthrough_enabled: fields.tls_passthrough_enabled,
        app_protect: fields.app_protect,
        app_protect_dos: fields.app_protect_dos?,
        reload_timeout_ms: fields.reload_timeout_ms?,
    })
}
