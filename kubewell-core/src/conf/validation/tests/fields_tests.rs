use crate::conf::parse::{ManifestFormat, parse_spec_str};
use crate::conf::types::*;
use crate::conf::validation::tests::test_helpers::{minimal_spec, paths};
use crate::conf::validation::{ViolationKind, resolve};
use pretty_assertions::assert_eq;

#[test]
fn missing_required_fields_are_reported() {
    // Arrange
    let spec = IngressControllerSpec::default();

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(paths(errors.violations()), vec!["deploymentType", "image", "serviceType"]);
    assert!(
        errors
            .iter()
            .all(|v| v.kind == ViolationKind::MissingRequiredField)
    );
}

#[test]
fn image_sub_fields_are_checked_individually() {
    // Arrange
    let spec = IngressControllerSpec {
        image: Some(ImageSpec {
            repository: Some(String::new()),
            tag: None,
            pull_policy: Some("Sometimes".to_string()),
        }),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(
        paths(errors.violations()),
        vec!["image.repository", "image.tag", "image.pullPolicy"]
    );
    assert_eq!(
        errors.violations()[2].kind,
        ViolationKind::InvalidEnum {
            value: "Sometimes".to_string(),
            allowed: PullPolicy::ALLOWED,
        }
    );
}

#[test]
fn enums_are_case_sensitive() {
    // Arrange
    let spec = IngressControllerSpec {
        deployment_type: Some("DaemonSet".to_string()),
        service_type: Some("loadbalancer".to_string()),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(paths(errors.violations()), vec!["deploymentType", "serviceType"]);
    assert!(
        errors
            .iter()
            .all(|v| matches!(v.kind, ViolationKind::InvalidEnum { .. }))
    );
}

#[test]
fn log_level_out_of_range() {
    for level in [-1, 4, 300] {
        // Arrange
        let spec = IngressControllerSpec {
            log_level: Some(level),
            ..minimal_spec()
        };

        // Act
        let errors = resolve(&spec).unwrap_err();

        // Assert
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.violations()[0].path, "logLevel");
        assert_eq!(
            errors.violations()[0].kind,
            ViolationKind::OutOfRange {
                value: level,
                min: 0,
                max: 3
            }
        );
    }
}

#[test]
fn oversized_integers_reach_the_range_check() {
    // Arrange
    let json = parse_spec_str(
        r#"{
            "deploymentType": "deployment",
            "serviceType": "NodePort",
            "image": {"repository": "r", "tag": "t", "pullPolicy": "Always"},
            "logLevel": 18446744073709551615,
            "prometheus": {"port": 100000000000000000000000}
        }"#,
        ManifestFormat::Json,
    )
    .unwrap();
    let yaml = parse_spec_str(
        "deploymentType: deployment\n\
         serviceType: NodePort\n\
         image: {repository: r, tag: t, pullPolicy: Always}\n\
         logLevel: 18446744073709551615\n\
         prometheus: {port: 100000000000000000000000}\n",
        ManifestFormat::Yaml,
    )
    .unwrap();

    for spec in [json, yaml] {
        // Act
        let errors = resolve(&spec).unwrap_err();

        // Assert
        assert_eq!(paths(errors.violations()), vec!["logLevel", "prometheus.port"]);
        assert_eq!(
            errors.violations()[0].kind,
            ViolationKind::OutOfRange {
                value: 18_446_744_073_709_551_615,
                min: 0,
                max: 3
            }
        );
        assert!(matches!(
            errors.violations()[1].kind,
            ViolationKind::OutOfRange { min: 1023, max: 65535, .. }
        ));
    }
}

#[test]
fn fractional_integers_are_parse_errors() {
    // Act
    let result = parse_spec_str(r#"{"logLevel": 1.5}"#, ManifestFormat::Json);

    // Assert
    assert!(result.is_err());
}

#[test]
fn log_level_bounds_are_inclusive() {
    for level in [0, 3] {
        // Arrange
        let spec = IngressControllerSpec {
            log_level: Some(level),
            ..minimal_spec()
        };

        // Act
        let resolved = resolve(&spec).unwrap();

        // Assert
        assert_eq!(i128::from(resolved.config.log_level), level);
    }
}

#[test]
fn ports_out_of_range_flag_only_that_field() {
    // Arrange
    let spec = IngressControllerSpec {
        status_endpoint: Some(StatusEndpointSpec {
            enable: Some(true),
            port: Some(80),
            allow_cidrs: Some("10.0.0.0/8".to_string()),
        }),
        prometheus: Some(PrometheusSpec {
            enable: Some(true),
            port: Some(65536),
            secret_ref: Some("monitoring/prometheus-tls".to_string()),
        }),
        log_level: Some(2),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(paths(errors.violations()), vec!["statusEndpoint.port", "prometheus.port"]);
    assert_eq!(
        errors.violations()[1].kind,
        ViolationKind::OutOfRange {
            value: 65536,
            min: 1023,
            max: 65535
        }
    );
}

#[test]
fn port_bounds_are_inclusive() {
    // Arrange
    let spec = IngressControllerSpec {
        status_endpoint: Some(StatusEndpointSpec {
            port: Some(1023),
            ..Default::default()
        }),
        prometheus: Some(PrometheusSpec {
            port: Some(65535),
            ..Default::default()
        }),
        ..minimal_spec()
    };

    // Act
    let config = resolve(&spec).unwrap().config;

    // Assert
    assert_eq!(config.status_endpoint.unwrap().port, 1023);
    assert_eq!(config.prometheus.unwrap().port, 65535);
}

#[test]
fn malformed_references_are_reported_per_field() {
    // Arrange
    let spec = IngressControllerSpec {
        default_tls_secret_ref: Some("default-tls".to_string()),
        wildcard_tls_secret_ref: Some("a/b/c".to_string()),
        prometheus: Some(PrometheusSpec {
            secret_ref: Some("/prom-tls".to_string()),
            ..Default::default()
        }),
        global_configuration_ref: Some("nginx/".to_string()),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(
        paths(errors.violations()),
        vec![
            "defaultTlsSecretRef",
            "wildcardTlsSecretRef",
            "prometheus.secretRef",
            "globalConfigurationRef",
        ]
    );
    assert!(
        errors
            .iter()
            .all(|v| matches!(v.kind, ViolationKind::MalformedReference { .. }))
    );
}

#[test]
fn empty_reference_counts_as_unset() {
    // Arrange
    let spec = IngressControllerSpec {
        default_tls_secret_ref: Some(String::new()),
        ..minimal_spec()
    };

    // Act
    let config = resolve(&spec).unwrap().config;

    // Assert
    assert_eq!(config.default_tls_secret, None);
}

#[test]
fn well_formed_references_are_parsed() {
    // Arrange
    let spec = IngressControllerSpec {
        default_tls_secret_ref: Some("kubewell/default-server-secret".to_string()),
        wildcard_tls_secret_ref: Some("kubewell/wildcard".to_string()),
        ..minimal_spec()
    };

    // Act
    let config = resolve(&spec).unwrap().config;

    // Assert
    assert_eq!(
        config.default_tls_secret,
        Some(ResourceRef {
            namespace: "kubewell".to_string(),
            name: "default-server-secret".to_string(),
        })
    );
    assert_eq!(
        config.wildcard_tls_secret.map(|r| r.to_string()),
        Some("kubewell/wildcard".to_string())
    );
}

#[test]
fn negative_replica_count_is_out_of_range() {
    // Arrange
    let spec = IngressControllerSpec {
        replica_count: Some(-1),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(paths(errors.violations()), vec!["replicaCount"]);
}

#[test]
fn allow_cidrs_must_be_addresses_or_blocks() {
    // Arrange
    let spec = IngressControllerSpec {
        status_endpoint: Some(StatusEndpointSpec {
            enable: Some(true),
            port: None,
            allow_cidrs: Some("10.0.0.0/8, not-an-ip".to_string()),
        }),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(paths(errors.violations()), vec!["statusEndpoint.allowCidrs"]);
    assert!(matches!(
        errors.violations()[0].kind,
        ViolationKind::InvalidFormat { .. }
    ));
}

#[test]
fn allow_cidrs_are_normalized() {
    // Arrange
    let spec = IngressControllerSpec {
        status_endpoint: Some(StatusEndpointSpec {
            allow_cidrs: Some(" 10.0.0.0/8 , 192.168.1.1,::1 ".to_string()),
            ..Default::default()
        }),
        ..minimal_spec()
    };

    // Act
    let config = resolve(&spec).unwrap().config;

    // Assert
    assert_eq!(
        config.status_endpoint.unwrap().allow_cidrs,
        "10.0.0.0/8,192.168.1.1,::1"
    );
}

#[test]
fn health_status_uri_must_be_absolute() {
    // Arrange
    let spec = IngressControllerSpec {
        health_status: Some(HealthStatusSpec {
            enable: Some(true),
            uri: Some("healthz".to_string()),
        }),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(paths(errors.violations()), vec!["healthStatus.uri"]);
}

#[test]
fn app_protect_dos_limits_must_not_be_negative() {
    // Arrange
    let spec = IngressControllerSpec {
        app_protect_dos: Some(AppProtectDosSpec {
            enable: Some(true),
            max_daemons: Some(-2),
            max_workers: Some(4),
            memory_mb: Some(-1),
            ..Default::default()
        }),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(
        paths(errors.violations()),
        vec!["appProtectDos.maxDaemons", "appProtectDos.memoryMb"]
    );
}

#[test]
fn reload_timeout_must_be_positive() {
    // Arrange
    let spec = IngressControllerSpec {
        reload_timeout_ms: Some(0),
        ..minimal_spec()
    };

    // Act
    let errors = resolve(&spec).unwrap_err();

    // Assert
    assert_eq!(paths(errors.violations()), vec!["reloadTimeoutMs"]);
}
