use std::time::Duration;

use skylane::{AirportQuery, Skylane, SkylaneError};

use crate::helpers::{MockConnector, codes, place};

#[tokio::test]
async fn failing_external_degrades_to_local_only() {
    let local = MockConnector::builder()
        .name("local")
        .returns_airports(vec![place("LHR", "London", "United Kingdom")])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .with_airports_fn(|_| Err(SkylaneError::Other("502 bad gateway".into())))
        .build();

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .build()
        .unwrap();
    let report = skylane
        .search_airports(&AirportQuery::new("lon").unwrap())
        .await
        .unwrap();

    assert_eq!(codes(&report.airports), vec!["LHR"]);
    assert_eq!(report.warnings.len(), 1);
    match &report.warnings[0] {
        SkylaneError::Connector { connector, msg } => {
            assert_eq!(connector, "external");
            assert!(msg.contains("502"));
        }
        other => panic!("unexpected warning: {other:?}"),
    }
}

#[tokio::test]
async fn both_sources_failing_yields_empty_list_not_error() {
    let local = MockConnector::builder()
        .name("local")
        .with_airports_fn(|_| Err(SkylaneError::connector("local", "db down")))
        .build();
    let external = MockConnector::builder()
        .name("external")
        .with_airports_fn(|_| Err(SkylaneError::not_found("airports for 'xx'")))
        .build();

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .build()
        .unwrap();
    let report = skylane
        .search_airports(&AirportQuery::new("xx").unwrap())
        .await
        .unwrap();

    assert!(report.airports.is_empty());
    assert_eq!(report.warnings.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn slow_source_times_out_without_blocking_the_other() {
    let local = MockConnector::builder()
        .name("local")
        .returns_airports(vec![place("FCO", "Rome", "Italy")])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .delay(Duration::from_secs(30))
        .returns_airports(vec![place("CIA", "Rome", "Italy")])
        .build();

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .provider_timeout(Duration::from_millis(500))
        .build()
        .unwrap();

    let started = tokio::time::Instant::now();
    let report = skylane
        .search_airports(&AirportQuery::new("rome").unwrap())
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(codes(&report.airports), vec!["FCO"]);
    assert!(matches!(
        report.warnings.as_slice(),
        [SkylaneError::ProviderTimeout { connector, .. }] if connector == "external"
    ));
}
