use std::time::Duration;

use skylane::{
    Decimal, FlightQuery, PriceAnalysis, PriceMetric, QuartileRanking, Skylane, SkylaneError,
};
use skylane_mock::{DynamicMockConnector, MockBehavior};

fn query() -> FlightQuery {
    FlightQuery::builder("ams", "lis")
        .depart_date_str("2025-10-02")
        .unwrap()
        .return_date_str("2025-10-09")
        .unwrap()
        .build()
        .unwrap()
}

fn analysis(currency: &str, medium: i64) -> PriceAnalysis {
    PriceAnalysis::new(
        currency,
        vec![PriceMetric {
            ranking: QuartileRanking::Medium,
            amount: Decimal::new(medium, 0),
        }],
    )
}

#[tokio::test]
async fn first_source_in_priority_order_wins() {
    let (local, local_ctl) = DynamicMockConnector::new_with_controller("local");
    let (external, external_ctl) = DynamicMockConnector::new_with_controller("external");
    local_ctl
        .set_price_analysis_behavior("AMS", "LIS", MockBehavior::Return(analysis("EUR", 120)))
        .await;
    external_ctl
        .set_price_analysis_behavior("AMS", "LIS", MockBehavior::Return(analysis("USD", 999)))
        .await;

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .build()
        .unwrap();
    let report = skylane.price_analysis(&query()).await.unwrap();

    let got = report.analysis.unwrap();
    assert_eq!(got.currency, "EUR");
    assert_eq!(got.metric(QuartileRanking::Medium), Some(Decimal::new(120, 0)));
    assert!(report.warnings.is_empty());
    assert_eq!(external_ctl.analysis_calls(), 0);
    // Only the outbound leg is analysed.
    assert_eq!(report.request.origin, "AMS");
    assert_eq!(report.request.destination, "LIS");
}

#[tokio::test]
async fn failing_source_falls_back_and_is_reported() {
    let (local, local_ctl) = DynamicMockConnector::new_with_controller("local");
    let (external, external_ctl) = DynamicMockConnector::new_with_controller("external");
    local_ctl
        .set_price_analysis_behavior(
            "AMS",
            "LIS",
            MockBehavior::Fail(SkylaneError::Other("backend down".into())),
        )
        .await;
    external_ctl
        .set_price_analysis_behavior("AMS", "LIS", MockBehavior::Return(analysis("USD", 210)))
        .await;

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .build()
        .unwrap();
    let report = skylane.price_analysis(&query()).await.unwrap();

    assert_eq!(report.analysis.unwrap().currency, "USD");
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        &report.warnings[0],
        SkylaneError::Connector { connector, .. } if connector == "local"
    ));
}

#[tokio::test(start_paused = true)]
async fn all_sources_failing_yields_no_analysis() {
    let (local, _local_ctl) = DynamicMockConnector::new_with_controller("local");
    let (external, external_ctl) = DynamicMockConnector::new_with_controller("external");
    external_ctl
        .set_price_analysis_behavior("AMS", "LIS", MockBehavior::Hang)
        .await;

    let skylane = Skylane::builder()
        .local(local)
        .external(external)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let report = skylane.price_analysis(&query()).await.unwrap();

    assert!(report.analysis.is_none());
    assert_eq!(report.warnings.len(), 2);
    assert!(matches!(report.warnings[0], SkylaneError::NotFound { .. }));
    assert!(matches!(
        report.warnings[1],
        SkylaneError::ProviderTimeout { .. }
    ));
}
