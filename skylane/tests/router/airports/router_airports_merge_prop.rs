use std::collections::HashSet;

use proptest::prelude::*;
use skylane::{AirportQuery, Skylane, Source};

use crate::helpers::{MockConnector, place};

fn places() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[A-D]{3}", "[A-Za-z]{1,8}"), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]
    #[test]
    fn merged_codes_are_unique_and_local_group_leads(local in places(), external in places()) {
        tokio_test::block_on(async move {
            let to_suggestions = |v: &[(String, String)]| {
                v.iter()
                    .map(|(code, city)| place(code, city, "X"))
                    .collect::<Vec<_>>()
            };
            let local_codes: HashSet<String> = local.iter().map(|(c, _)| c.clone()).collect();

            let skylane = Skylane::builder()
                .local(
                    MockConnector::builder()
                        .name("local")
                        .returns_airports(to_suggestions(&local))
                        .build(),
                )
                .external(
                    MockConnector::builder()
                        .name("external")
                        .returns_airports(to_suggestions(&external))
                        .build(),
                )
                .build()
                .unwrap();
            let report = skylane
                .search_airports(&AirportQuery::new("new").unwrap())
                .await
                .unwrap();

            let mut seen = HashSet::new();
            for a in &report.airports {
                assert!(seen.insert(a.code.clone()), "duplicate code {}", a.code);
            }
            let first_external = report
                .airports
                .iter()
                .position(|a| a.source == Source::External)
                .unwrap_or(report.airports.len());
            assert!(report.airports[first_external..].iter().all(|a| a.source == Source::External));
            for a in &report.airports {
                if local_codes.contains(&a.code) {
                    assert_eq!(a.source, Source::Local);
                }
            }
            assert_eq!(
                report.airports.iter().filter(|a| a.source == Source::Local).count(),
                local_codes.len()
            );
        });
    }
}
