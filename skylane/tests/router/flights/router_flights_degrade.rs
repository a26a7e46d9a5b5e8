use std::time::Duration;

use skylane::{FlightQuery, Leg, Skylane, SkylaneError};

use crate::helpers::{MockConnector, ids, offer};

fn round_trip() -> FlightQuery {
    FlightQuery::builder("LHR", "DXB")
        .depart_date_str("2025-09-10")
        .unwrap()
        .return_date_str("2025-09-17")
        .unwrap()
        .build()
        .unwrap()
}

#[tokio::test]
async fn external_failure_keeps_local_offers_and_warns_per_leg() {
    let local = MockConnector::builder()
        .name("local")
        .returns_flights(vec![offer("L", 400, "08:00", "18:00")])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .with_flights_fn(|_| Err(SkylaneError::connector("external", "quota exceeded")))
        .build();

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .build()
        .unwrap();
    let report = skylane.search_flights(&round_trip()).await.unwrap();

    assert_eq!(ids(&report.outbound.flights), vec!["L"]);
    assert_eq!(ids(&report.inbound.unwrap().flights), vec!["L"]);
    // One warning per failed leg call.
    assert_eq!(report.warnings.len(), 2);
}

#[tokio::test]
async fn one_leg_failing_leaves_the_other_leg_intact() {
    let local = MockConnector::builder()
        .name("local")
        .with_flights_fn(|req| match req.leg {
            Leg::Outbound => Ok(vec![offer("OUT", 350, "07:00", "17:00")]),
            Leg::Return => Err(SkylaneError::not_found("flights DXB-LHR")),
        })
        .build();

    let skylane = Skylane::builder().local(local).build().unwrap();
    let report = skylane.search_flights(&round_trip()).await.unwrap();

    assert_eq!(ids(&report.outbound.flights), vec!["OUT"]);
    assert!(report.inbound.unwrap().flights.is_empty());
    assert!(matches!(
        report.warnings.as_slice(),
        [SkylaneError::NotFound { .. }]
    ));
}

#[tokio::test(start_paused = true)]
async fn legs_and_sources_run_concurrently() {
    let local = MockConnector::builder()
        .name("local")
        .delay(Duration::from_millis(300))
        .returns_flights(vec![offer("L", 100, "06:00", "09:00")])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .delay(Duration::from_millis(300))
        .returns_flights(vec![offer("E", 90, "06:30", "09:30")])
        .build();

    let skylane = Skylane::builder()
        .local(local.clone())
        .external(external.clone())
        .build()
        .unwrap();

    let started = tokio::time::Instant::now();
    let report = skylane.search_flights(&round_trip()).await.unwrap();

    // Four calls of 300ms each finish together.
    assert!(started.elapsed() < Duration::from_millis(600));
    assert_eq!(local.flight_calls(), 2);
    assert_eq!(external.flight_calls(), 2);
    assert_eq!(ids(&report.outbound.flights), vec!["L", "E"]);
}

#[tokio::test(start_paused = true)]
async fn timed_out_source_is_reported_as_provider_timeout() {
    let local = MockConnector::builder()
        .name("local")
        .returns_flights(vec![offer("L", 100, "06:00", "09:00")])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .delay(Duration::from_secs(60))
        .returns_flights(vec![offer("E", 90, "06:30", "09:30")])
        .build();

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .provider_timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let q = FlightQuery::builder("LHR", "DXB")
        .depart_date_str("2025-09-10")
        .unwrap()
        .build()
        .unwrap();
    let report = skylane.search_flights(&q).await.unwrap();

    assert_eq!(ids(&report.outbound.flights), vec!["L"]);
    match report.warnings.as_slice() {
        [SkylaneError::ProviderTimeout {
            connector,
            capability,
        }] => {
            assert_eq!(connector, "external");
            assert_eq!(capability, "flights");
        }
        other => panic!("unexpected warnings: {other:?}"),
    }
}
