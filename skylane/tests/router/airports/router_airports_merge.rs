use skylane::{AirportQuery, AirportSuggestion, Skylane, Source};

use crate::helpers::{MockConnector, codes, place};

#[tokio::test]
async fn local_results_rank_first_and_win_duplicates() {
    let local = MockConnector::builder()
        .name("local")
        .returns_airports(vec![
            place("LGA", "New York", "United States"),
            place("jfk", "New York", "United States"),
            place("EWR", "Newark", "United States"),
        ])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .returns_airports(vec![
            place("JFK", "New York City", "USA"),
            place("SWF", "Newburgh", "USA"),
            place("NYC", "Manhattan", "USA"),
        ])
        .build();

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .build()
        .unwrap();
    let report = skylane
        .search_airports(&AirportQuery::new("new").unwrap())
        .await
        .unwrap();

    assert!(report.warnings.is_empty());
    // Local group by city (stable for equal cities), then external group.
    assert_eq!(codes(&report.airports), vec!["LGA", "JFK", "EWR", "NYC", "SWF"]);
    let jfk = report.airports.iter().find(|a| a.code == "JFK").unwrap();
    assert_eq!(jfk.source, Source::Local);
    assert_eq!(jfk.city, "New York");
}

#[tokio::test]
async fn external_city_falls_back_to_name_and_blank_codes_are_dropped() {
    let local = MockConnector::builder()
        .name("local")
        .returns_airports(vec![])
        .build();
    let external = MockConnector::builder()
        .name("external")
        .returns_airports(vec![
            AirportSuggestion {
                code: Some("ORY".into()),
                name: Some("Orly".into()),
                country: Some("France".into()),
                ..AirportSuggestion::default()
            },
            AirportSuggestion {
                code: Some("  ".into()),
                city: Some("Nowhere".into()),
                ..AirportSuggestion::default()
            },
            place("cdg", "Paris", "France"),
        ])
        .build();

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .build()
        .unwrap();
    let report = skylane
        .search_airports(&AirportQuery::new("paris").unwrap())
        .await
        .unwrap();

    assert_eq!(codes(&report.airports), vec!["ORY", "CDG"]);
    assert_eq!(report.airports[0].city, "Orly");
    assert!(report.airports.iter().all(|a| a.source == Source::External));
}

#[tokio::test]
async fn accented_cities_sort_with_their_base_letters() {
    let local = MockConnector::builder()
        .name("local")
        .returns_airports(vec![
            place("ZRH", "Zürich", "Switzerland"),
            place("ZAG", "Zagreb", "Croatia"),
            place("ZTH", "Zakynthos", "Greece"),
            place("AAL", "Aalborg", "Denmark"),
        ])
        .build();

    let skylane = Skylane::builder().local(local).build().unwrap();
    let report = skylane
        .search_airports(&AirportQuery::new("z").unwrap())
        .await
        .unwrap();

    assert_eq!(codes(&report.airports), vec!["AAL", "ZAG", "ZTH", "ZRH"]);
}
