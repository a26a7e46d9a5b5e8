use skylane::{AirportQuery, Capability, FlightQuery, Skylane, SkylaneError};

use crate::helpers::{MockConnector, place};

#[tokio::test]
async fn flights_unsupported_when_no_connector_searches_flights() {
    let local = MockConnector::builder()
        .returns_airports(vec![place("BER", "Berlin", "Germany")])
        .build();
    let skylane = Skylane::builder().local(local).build().unwrap();

    let q = FlightQuery::builder("BER", "MUC")
        .depart_date_str("2025-01-20")
        .unwrap()
        .build()
        .unwrap();
    match skylane.search_flights(&q).await {
        Err(SkylaneError::Unsupported { capability }) => {
            assert_eq!(capability, Capability::Flights.to_string());
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn airports_unsupported_when_only_provider_is_disabled() {
    let external = MockConnector::builder()
        .returns_airports(vec![place("BER", "Berlin", "Germany")])
        .build();
    let skylane = Skylane::builder()
        .external(external)
        .include_external(false)
        .build()
        .unwrap();

    let err = skylane
        .search_airports(&AirportQuery::new("berlin").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, SkylaneError::Unsupported { .. }));
}

#[tokio::test]
async fn price_analysis_unsupported_without_an_analysis_source() {
    let local = MockConnector::builder()
        .returns_airports(vec![place("BER", "Berlin", "Germany")])
        .build();
    let skylane = Skylane::builder().local(local).build().unwrap();

    let q = FlightQuery::builder("BER", "MUC")
        .depart_date_str("2025-01-20")
        .unwrap()
        .build()
        .unwrap();
    match skylane.price_analysis(&q).await {
        Err(SkylaneError::Unsupported { capability }) => {
            assert_eq!(capability, Capability::PriceAnalysis.to_string());
        }
        other => panic!("unexpected: {other:?}"),
    }
}
