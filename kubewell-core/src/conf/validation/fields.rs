use crate::conf::types::*;
use crate::conf::validation::ValidationReport;
use crate::conf::validation::validator::{
    APP_PROTECT_DOS_LIMIT, Checked, LISTEN_PORT, LOG_LEVEL, RELOAD_TIMEOUT_MS, REPLICA_COUNT,
    non_empty, validate_allow_cidrs, validate_location_uri, validate_optional_range,
    validate_reference, validate_required_enum,
};
use std::collections::BTreeMap;

/// Result of the first pass: every field checked on its own, defaults applied.
///
/// Fields that can fail are wrapped in [`Checked`] so the dependency pass can skip
/// rules whose prerequisites are already known to be malformed.
#[derive(Debug)]
pub(crate) struct CheckedFields {
    pub deployment_type: Checked<DeploymentType>,
    pub use_plus_edition: bool,
    pub image: Checked<Image>,
    pub replica_count: Checked<Option<i32>>,
    pub replica_count_set: bool,
    pub default_tls_secret: Checked<Option<ResourceRef>>,
    pub service_type: Checked<ServiceType>,
    pub crds_enabled: bool,
    pub snippets_enabled: bool,
    pub preview_policies_enabled: bool,
    pub ingress_class: String,
    pub service: Option<ServiceOverrides>,
    pub watch_namespace: WatchScope,
    pub health_status: Checked<Option<HealthStatus>>,
    pub debug_enabled: bool,
    pub log_level: Checked<u8>,
    pub status_endpoint: Checked<Option<StatusEndpoint>>,
    pub report_ingress_status: Option<ReportIngressStatus>,
    pub leader_election_enabled: bool,
    pub wildcard_tls_secret: Checked<Option<ResourceRef>>,
    pub prometheus: Checked<Option<Prometheus>>,
    pub latency_metrics_enabled: bool,
    pub extra_config_entries: BTreeMap<String, String>,
    pub global_configuration: Checked<Option<ResourceRef>>,
    pub tls_passthrough_enabled: bool,
    pub app_protect: Option<AppProtect>,
    pub app_protect_dos_enabled: bool,
    pub app_protect_dos: Checked<Option<AppProtectDos>>,
    pub reload_timeout_ms: Checked<u32>,
}

/// First pass: enum membership, numeric ranges, reference shapes and required
/// fields, in field table order. Never stops early.
pub(crate) fn check_fields(
    spec: &IngressControllerSpec,
    report: &mut ValidationReport,
) -> CheckedFields {
    let deployment_type = validate_required_enum::<DeploymentType>(
        spec.deployment_type.as_deref(),
        report,
        &FieldPath::root("deploymentType"),
    );

    let image = check_image(spec.image.as_ref(), report, &FieldPath::root("image"));

    // Daemonsets ignore replicaCount entirely; the dependency pass warns about it.
    let replica_count = if deployment_type == Some(DeploymentType::DaemonSet) {
        Some(None)
    } else {
        validate_optional_range(
            spec.replica_count,
            &REPLICA_COUNT,
            report,
            &FieldPath::root("replicaCount"),
        )
    };

    let default_tls_secret = validate_reference(
        &spec.default_tls_secret_ref,
        report,
        &FieldPath::root("defaultTlsSecretRef"),
    );

    let service_type = validate_required_enum::<ServiceType>(
        spec.service_type.as_deref(),
        report,
        &FieldPath::root("serviceType"),
    );

    let health_status = check_health_status(
        spec.health_status.as_ref(),
        report,
        &FieldPath::root("healthStatus"),
    );

    let log_level = validate_optional_range(
        spec.log_level,
        &LOG_LEVEL,
        report,
        &FieldPath::root("logLevel"),
    )
    .map(|level| level.unwrap_or(DEFAULT_LOG_LEVEL));

    let status_endpoint = check_status_endpoint(
        spec.status_endpoint.as_ref(),
        report,
        &FieldPath::root("statusEndpoint"),
    );

    let report_ingress_status = spec
        .report_ingress_status
        .as_ref()
        .map(|section| ReportIngressStatus {
            enable: section.enable.unwrap_or(false),
            external_service: non_empty(&section.external_service).map(str::to_owned),
            ingress_link: non_empty(&section.ingress_link).map(str::to_owned),
        });

    let wildcard_tls_secret = validate_reference(
        &spec.wildcard_tls_secret_ref,
        report,
        &FieldPath::root("wildcardTlsSecretRef"),
    );

    let prometheus = check_prometheus(
        spec.prometheus.as_ref(),
        report,
        &FieldPath::root("prometheus"),
    );

    let global_configuration = validate_reference(
        &spec.global_configuration_ref,
        report,
        &FieldPath::root("globalConfigurationRef"),
    );

    let app_protect_dos = check_app_protect_dos(
        spec.app_protect_dos.as_ref(),
        report,
        &FieldPath::root("appProtectDos"),
    );

    let reload_timeout_ms = validate_optional_range(
        spec.reload_timeout_ms,
        &RELOAD_TIMEOUT_MS,
        report,
        &FieldPath::root("reloadTimeoutMs"),
    )
    .map(|timeout| timeout.unwrap_or(DEFAULT_RELOAD_TIMEOUT_MS));

    CheckedFields {
        deployment_type,
        use_plus_edition: spec.use_plus_edition.unwrap_or(false),
        image,
        replica_count,
        replica_count_set: spec.replica_count.is_some(),
        default_tls_secret,
        service_type,
        crds_enabled: spec.crds_enabled.unwrap_or(DEFAULT_CRDS_ENABLED),
        snippets_enabled: spec.snippets_enabled.unwrap_or(false),
        preview_policies_enabled: spec.preview_policies_enabled.unwrap_or(false),
        ingress_class: non_empty(&spec.ingress_class)
            .unwrap_or(DEFAULT_INGRESS_CLASS)
            .to_owned(),
        service: spec.service.as_ref().map(|service| ServiceOverrides {
            extra_labels: service.extra_labels.clone().unwrap_or_default(),
            extra_annotations: service.extra_annotations.clone().unwrap_or_default(),
        }),
        watch_namespace: match non_empty(&spec.watch_namespace) {
            Some(ns) => WatchScope::Namespace(ns.to_owned()),
            None => WatchScope::AllNamespaces,
        },
        health_status,
        debug_enabled: spec.debug_enabled.unwrap_or(false),
        log_level,
        status_endpoint,
        report_ingress_status,
        leader_election_enabled: spec
            .leader_election_enabled
            .unwrap_or(DEFAULT_LEADER_ELECTION_ENABLED),
        wildcard_tls_secret,
        prometheus,
        latency_metrics_enabled: spec.latency_metrics_enabled.unwrap_or(false),
        extra_config_entries: spec.extra_config_entries.clone().unwrap_or_default(),
        global_configuration,
        tls_passthrough_enabled: spec.tls_passthrough_enabled.unwrap_or(false),
        app_protect: spec.app_protect.as_ref().map(|section| AppProtect {
            enable: section.enable.unwrap_or(false),
        }),
        app_protect_dos_enabled: spec
            .app_protect_dos
            .as_ref()
            .and_then(|section| section.enable)
            .unwrap_or(false),
        app_protect_dos,
        reload_timeout_ms,
    }
}

fn check_image(
    spec: Option<&ImageSpec>,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<Image> {
    let Some(spec) = spec else {
        report.missing_required_field(path);
        return None;
    };

    let repository = required_string(&spec.repository, report, &path.child("repository"));
    let tag = required_string(&spec.tag, report, &path.child("tag"));
    let pull_policy = validate_required_enum::<PullPolicy>(
        spec.pull_policy.as_deref(),
        report,
        &path.child("pullPolicy"),
    );

    Some(Image {
        repository: repository?,
        tag: tag?,
        pull_policy: pull_policy?,
    })
}

fn required_string(
    value: &Option<String>,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<String> {
    match non_empty(value) {
        Some(s) => Some(s.to_owned()),
        None => {
            report.missing_required_field(path);
            None
        }
    }
}

fn check_health_status(
    spec: Option<&HealthStatusSpec>,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<Option<HealthStatus>> {
    let Some(spec) = spec else {
        return Some(None);
    };

    let uri = match non_empty(&spec.uri) {
        Some(uri) => validate_location_uri(uri, report, &path.child("uri"))?,
        None => DEFAULT_HEALTH_STATUS_URI.to_owned(),
    };

    Some(Some(HealthStatus {
        enable: spec.enable.unwrap_or(false),
        uri,
    }))
}

fn check_status_endpoint(
    spec: Option<&StatusEndpointSpec>,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<Option<StatusEndpoint>> {
    let Some(spec) = spec else {
        return Some(None);
    };

    let port = validate_optional_range::<u16>(spec.port, &LISTEN_PORT, report, &path.child("port"));

    let allow_cidrs = match non_empty(&spec.allow_cidrs) {
        Some(cidrs) => validate_allow_cidrs(cidrs, report, &path.child("allowCidrs")),
        None => Some(DEFAULT_STATUS_ALLOW_CIDRS.to_owned()),
    };

    Some(Some(StatusEndpoint {
        enable: spec.enable.unwrap_or(false),
        port: port?.unwrap_or(DEFAULT_STATUS_PORT),
        allow_cidrs: allow_cidrs?,
    }))
}

fn check_prometheus(
    spec: Option<&PrometheusSpec>,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<Option<Prometheus>> {
    let Some(spec) = spec else {
        return Some(None);
    };

    let port = validate_optional_range::<u16>(spec.port, &LISTEN_PORT, report, &path.child("port"));
    let secret = validate_reference(&spec.secret_ref, report, &path.child("secretRef"));

    Some(Some(Prometheus {
        enable: spec.enable.unwrap_or(false),
        port: port?.unwrap_or(DEFAULT_PROMETHEUS_PORT),
        secret: secret?,
    }))
}

fn check_app_protect_dos(
    spec: Option<&AppProtectDosSpec>,
    report: &mut ValidationReport,
    path: &FieldPath,
) -> Checked<Option<AppProtectDos>> {
    let Some(spec) = spec else {
        return Some(None);
    };

    let max_daemons = validate_optional_range(
        spec.max_daemons,
        &APP_PROTECT_DOS_LIMIT,
        report,
        &path.child("maxDaemons"),
    );
    let max_workers = validate_optional_range(
        spec.max_workers,
        &APP_PROTECT_DOS_LIMIT,
        report,
        &path.child("maxWorkers"),
    );
    let memory_mb = validate_optional_range(
        spec.memory_mb,
        &APP_PROTECT_DOS_LIMIT,
        report,
        &path.child("memoryMb"),
    );

    Some(Some(AppProtectDos {
        enable: spec.enable.unwrap_or(false),
        debug: spec.debug.unwrap_or(false),
        max_daemons: max_daemons?,
        max_workers: max_workers?,
        memory_mb: memory_mb?,
    }))
}
