use std::time::Duration;

use skylane::{Skylane, SkylaneConfig, SkylaneError};

use crate::helpers::{MockConnector, place};

#[test]
fn build_requires_a_connector() {
    let err = Skylane::builder().build().err().unwrap();
    assert!(matches!(err, SkylaneError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_timeout() {
    let local = MockConnector::builder()
        .returns_airports(vec![place("OSL", "Oslo", "Norway")])
        .build();
    let err = Skylane::builder()
        .local(local)
        .provider_timeout(Duration::ZERO)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, SkylaneError::InvalidArg(_)));
}

#[test]
fn config_knobs_are_applied() {
    let local = MockConnector::builder().build();
    let skylane = Skylane::builder()
        .local(local)
        .config(SkylaneConfig {
            include_external: false,
            ..SkylaneConfig::default()
        })
        .external_min_query_len(4)
        .provider_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    let cfg = skylane.config();
    assert!(!cfg.include_external);
    assert_eq!(cfg.external_min_query_len, 4);
    assert_eq!(cfg.provider_timeout, Duration::from_secs(1));
}
