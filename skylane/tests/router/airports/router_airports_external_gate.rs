use skylane::{AirportQuery, Skylane};

use crate::helpers::{MockConnector, codes, place};

fn pair() -> (
    std::sync::Arc<MockConnector>,
    std::sync::Arc<MockConnector>,
) {
    let local = MockConnector::builder()
        .name("local")
        .returns_airports(vec![place("MAD", "Madrid", "Spain")])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .returns_airports(vec![place("AGP", "Málaga", "Spain")])
        .build();
    (local, external)
}

#[tokio::test]
async fn short_query_skips_external_provider() {
    let (local, external) = pair();
    let skylane = Skylane::builder()
        .local(local.clone())
        .external(external.clone())
        .build()
        .unwrap();

    let report = skylane
        .search_airports(&AirportQuery::new(" m ").unwrap())
        .await
        .unwrap();

    assert_eq!(codes(&report.airports), vec!["MAD"]);
    assert!(report.warnings.is_empty());
    assert_eq!(local.airport_calls(), 1);
    assert_eq!(external.airport_calls(), 0);
}

#[tokio::test]
async fn threshold_counts_characters_not_bytes() {
    let (local, external) = pair();
    let skylane = Skylane::builder()
        .local(local)
        .external(external.clone())
        .external_min_query_len(3)
        .build()
        .unwrap();

    // Two characters, four bytes.
    skylane
        .search_airports(&AirportQuery::new("Má").unwrap())
        .await
        .unwrap();
    assert_eq!(external.airport_calls(), 0);

    let report = skylane
        .search_airports(&AirportQuery::new("Mál").unwrap())
        .await
        .unwrap();
    assert_eq!(external.airport_calls(), 1);
    assert_eq!(codes(&report.airports), vec!["MAD", "AGP"]);
}

#[tokio::test]
async fn disabled_external_is_never_called() {
    let (local, external) = pair();
    let skylane = Skylane::builder()
        .local(local)
        .external(external.clone())
        .include_external(false)
        .build()
        .unwrap();

    let report = skylane
        .search_airports(&AirportQuery::new("madrid").unwrap())
        .await
        .unwrap();
    assert_eq!(codes(&report.airports), vec!["MAD"]);
    assert_eq!(external.airport_calls(), 0);
}
