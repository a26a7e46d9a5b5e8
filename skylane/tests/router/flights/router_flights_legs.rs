use std::sync::{Arc, Mutex};

use skylane::{Decimal, FlightQuery, Leg, SeatClass, Skylane, Source};

use crate::helpers::{MockConnector, ids, offer};

#[tokio::test]
async fn one_way_returns_outbound_only_with_local_first() {
    let local = MockConnector::builder()
        .name("local")
        .returns_flights(vec![
            offer("L1", 300, "09:00", "12:00"),
            offer("L2", 150, "18:30", "21:10"),
        ])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .returns_flights(vec![offer("E1", 120, "2025-06-01T07:10:00", "2025-06-01T10:00:00")])
        .build();

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .build()
        .unwrap();
    let q = FlightQuery::builder("jfk", "lhr")
        .depart_date_str("2025-06-01")
        .unwrap()
        .build()
        .unwrap();
    let report = skylane.search_flights(&q).await.unwrap();

    assert!(report.inbound.is_none());
    assert!(report.warnings.is_empty());
    let out = &report.outbound;
    assert_eq!(out.request.origin, "JFK");
    assert_eq!(ids(&out.flights), vec!["L1", "L2", "E1"]);
    assert_eq!(out.from_source(Source::Local).count(), 2);
    assert_eq!(out.from_source(Source::External).count(), 1);
    // Hours are derived from the raw times.
    assert_eq!(out.flights[1].departure_hour, Some(18));
    assert_eq!(out.flights[2].departure_hour, Some(7));
}

#[tokio::test]
async fn round_trip_swaps_endpoints_for_return_leg() {
    let seen: Arc<Mutex<Vec<(Leg, String, String, String)>>> = Arc::default();
    let log = Arc::clone(&seen);
    let local = MockConnector::builder()
        .name("local")
        .with_flights_fn(move |req| {
            log.lock().unwrap().push((
                req.leg,
                req.origin.clone(),
                req.destination.clone(),
                req.date.to_string(),
            ));
            assert_eq!(req.seat_class, SeatClass::Business);
            Ok(vec![offer(&format!("{}", req.leg), 500, "10:00", "13:00")])
        })
        .build();

    let skylane = Skylane::builder().local(local).build().unwrap();
    let q = FlightQuery::builder("JFK", "LHR")
        .depart_date_str("2025-06-01")
        .unwrap()
        .return_date_str("2025-06-08")
        .unwrap()
        .seat_class(SeatClass::Business)
        .build()
        .unwrap();
    let report = skylane.search_flights(&q).await.unwrap();

    let inbound = report.inbound.expect("round trip has a return leg");
    assert_eq!(inbound.request.origin, "LHR");
    assert_eq!(inbound.request.destination, "JFK");
    assert_eq!(inbound.flights.len(), 1);

    let mut calls = seen.lock().unwrap().clone();
    calls.sort_by_key(|c| c.3.clone());
    assert_eq!(
        calls,
        vec![
            (
                Leg::Outbound,
                "JFK".to_string(),
                "LHR".to_string(),
                "2025-06-01".to_string()
            ),
            (
                Leg::Return,
                "LHR".to_string(),
                "JFK".to_string(),
                "2025-06-08".to_string()
            ),
        ]
    );
}

#[tokio::test]
async fn records_are_stamped_with_the_producing_source() {
    let mut mislabeled = offer("X1", 200, "08:00", "11:00");
    mislabeled.source = Source::Local;
    let external = MockConnector::builder()
        .name("external")
        .returns_flights(vec![mislabeled])
        .build();

    let skylane = Skylane::builder().external(external).build().unwrap();
    let q = FlightQuery::builder("CDG", "FCO")
        .depart_date_str("2025-06-01")
        .unwrap()
        .build()
        .unwrap();
    let report = skylane.search_flights(&q).await.unwrap();

    assert_eq!(report.outbound.flights[0].source, Source::External);
}

#[tokio::test]
async fn negative_prices_and_out_of_range_hours_are_normalized() {
    let mut bad_hour = offer("H", 100, "--:--", "07:30");
    bad_hour.departure_hour = Some(25);
    let negative = offer("N", -5, "09:00", "10:00");
    let local = MockConnector::builder()
        .name("local")
        .returns_flights(vec![bad_hour, negative])
        .build();

    let skylane = Skylane::builder().local(local).build().unwrap();
    let q = FlightQuery::builder("AMS", "BCN")
        .depart_date_str("2025-06-01")
        .unwrap()
        .build()
        .unwrap();
    let report = skylane.search_flights(&q).await.unwrap();

    assert_eq!(ids(&report.outbound.flights), vec!["H"]);
    let f = &report.outbound.flights[0];
    assert_eq!(f.departure_hour, None);
    assert_eq!(f.arrival_hour, Some(7));
    assert_eq!(f.price, Decimal::new(100, 0));
}
