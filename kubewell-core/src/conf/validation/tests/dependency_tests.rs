use crate::conf::types::*;
use crate::conf::validation::tests::test_helpers::{minimal_spec, paths};
use crate::conf::validation::{ViolationKind, derive_status_source, resolve};
use pretty_assertions::assert_eq;

fn crds_disabled() -> IngressControllerSpec {
    IngressControllerSpec {
        crds_enabled: Some(false),
        ..minimal_spec()
    }
}

#[test]
fn every_crd_dependent_is_reported() {
    // Arrange
    let spec = IngressControllerSpec {
        snippets_enabled: Some(true),
        preview_policies_enabled: Some(true),
        global_configuration_ref: Some("kubewell/global".to_string()),
        tls_passthrough_enabled: Some(true),
        app_protect: Some(AppProtectSpec { enable: Some(true) }),
        app_protect_dos: Some(AppProtectDosSpec {
            enable: Some(true),
            ..Default::default()
        }),
        ..crds_disabled()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(
        paths(errors.violations()),
        vec![
            "snippetsEnabled",
            "previewPoliciesEnabled",
            "globalConfigurationRef",
            "tlsPassthroughEnabled",
            "appProtect.enable",
            "appProtectDos.enable",
        ]
    );
    for violation in &errors {
        assert_eq!(
            violation.kind,
            ViolationKind::UnmetDependency {
                requires: FieldPath::root("crdsEnabled")
            }
        );
    }
}

#[test]
fn crd_dependents_pass_when_crds_default_to_enabled() {
    // Arrange
    let spec = IngressControllerSpec {
        snippets_enabled: Some(true),
        tls_passthrough_enabled: Some(true),
        app_protect: Some(AppProtectSpec { enable: Some(true) }),
        ..minimal_spec()
    };

    // Act
    let config = resolve(&spec).unwrap().config;

    // Assert
    assert!(config.crds_enabled);
    assert!(config.snippets_enabled);
    assert!(config.tls_passthrough_enabled);
}

#[test]
fn disabled_features_do_not_need_crds() {
    // Arrange
    let spec = IngressControllerSpec {
        snippets_enabled: Some(false),
        app_protect: Some(AppProtectSpec {
            enable: Some(false),
        }),
        app_protect_dos: Some(AppProtectDosSpec::default()),
        ..crds_disabled()
    };

    // Act
    let result = resolve(&spec);

    // Assert
    assert!(result.is_ok());
}

#[test]
fn malformed_global_configuration_skips_its_dependency_check() {
    // Arrange
    let spec = IngressControllerSpec {
        global_configuration_ref: Some("global".to_string()),
        snippets_enabled: Some(true),
        ..crds_disabled()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(
        paths(errors.violations()),
        vec!["globalConfigurationRef", "snippetsEnabled"]
    );
    assert!(matches!(
        errors.violations()[0].kind,
        ViolationKind::MalformedReference { .. }
    ));
}

#[test]
fn ingress_link_requires_status_reporting() {
    // Arrange
    let spec = IngressControllerSpec {
        report_ingress_status: Some(ReportIngressStatusSpec {
            enable: Some(false),
            external_service: None,
            ingress_link: Some("bigip-link".to_string()),
        }),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.violations()[0].path, "reportIngressStatus.ingressLink");
    assert_eq!(
        errors.violations()[0].kind,
        ViolationKind::UnmetDependency {
            requires: FieldPath::root("reportIngressStatus").child("enable")
        }
    );
}

#[test]
fn replica_count_on_daemonset_is_a_warning() {
    // Arrange
    let spec = IngressControllerSpec {
        deployment_type: Some("daemonset".to_string()),
        replica_count: Some(3),
        ..minimal_spec()
    };

    // Act
    let validated = resolve(&spec).unwrap();

    // Assert
    assert_eq!(validated.warnings.len(), 1);
    assert_eq!(validated.warnings[0].path, "replicaCount");
    assert!(validated.warnings[0].is_warning());
    assert!(matches!(
        validated.warnings[0].kind,
        ViolationKind::IgnoredField { .. }
    ));
    assert_eq!(validated.config.deployment_type, DeploymentType::DaemonSet);
    assert_eq!(validated.config.replica_count, None);
}

#[test]
fn replica_count_on_daemonset_is_not_range_checked() {
    // Arrange
    let spec = IngressControllerSpec {
        deployment_type: Some("daemonset".to_string()),
        replica_count: Some(-1),
        ..minimal_spec()
    };

    // Act
    let validated = resolve(&spec).unwrap();

    // Assert
    assert_eq!(paths(&validated.warnings), vec!["replicaCount"]);
    assert!(validated.warnings[0].is_warning());
    assert_eq!(validated.config.replica_count, None);
}

#[test]
fn warnings_do_not_mask_hard_violations() {
    // Arrange
    let spec = IngressControllerSpec {
        deployment_type: Some("daemonset".to_string()),
        replica_count: Some(3),
        log_level: Some(9),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(paths(errors.violations()), vec!["logLevel"]);
}

#[test]
fn status_source_load_balancer_wins_over_external_service() {
    // Arrange
    let status = ReportIngressStatus {
        enable: true,
        external_service: Some("svc".to_string()),
        ingress_link: Some("link".to_string()),
    };

    // Act
    let source = derive_status_source(ServiceType::LoadBalancer, Some(&status));

    // Assert
    assert_eq!(source, StatusSource::LoadBalancerService);
}

#[test]
fn status_source_external_service_wins_over_ingress_link() {
    // Arrange
    let status = ReportIngressStatus {
        enable: true,
        external_service: Some("svc".to_string()),
        ingress_link: Some("link".to_string()),
    };

    // Act
    let source = derive_status_source(ServiceType::NodePort, Some(&status));

    // Assert
    assert_eq!(source, StatusSource::ExternalService);
}

#[test]
fn status_source_falls_back_to_ingress_link() {
    // Arrange
    let status = ReportIngressStatus {
        enable: true,
        external_service: None,
        ingress_link: Some("link".to_string()),
    };

    // Act
    let source = derive_status_source(ServiceType::NodePort, Some(&status));

    // Assert
    assert_eq!(source, StatusSource::IngressLink);
}

#[test]
fn status_source_is_none_when_reporting_is_disabled() {
    // Arrange
    let disabled = ReportIngressStatus {
        enable: false,
        external_service: Some("svc".to_string()),
        ingress_link: None,
    };
    let nothing_named = ReportIngressStatus {
        enable: true,
        ..Default::default()
    };

    // Act & Assert
    assert_eq!(
        derive_status_source(ServiceType::LoadBalancer, None),
        StatusSource::None
    );
    assert_eq!(
        derive_status_source(ServiceType::LoadBalancer, Some(&disabled)),
        StatusSource::None
    );
    assert_eq!(
        derive_status_source(ServiceType::NodePort, Some(&nothing_named)),
        StatusSource::None
    );
}
