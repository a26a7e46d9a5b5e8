//! Airport merge-and-rank.
//!
//! Combines the local and external airport suggestion lists into one
//! deduplicated list ordered for display: local records first, then
//! external, each group sorted by city.

use core::cmp::Ordering;
use std::collections::HashSet;

use feruca::{Collator, Tailoring};

use crate::{AirportRecord, Source};

/// Merge two airport lists in priority order (`local` wins).
///
/// - Records whose code is empty after trimming are dropped.
/// - Codes are compared case-insensitively and emitted uppercased.
/// - The first occurrence of a code wins; a code seen in `local`
///   suppresses every occurrence in `external`.
/// - Output groups records by their own source tag (`Local` before
///   `External`); each group is sorted by [`compare_city`]. The sort is
///   stable, so full ties keep first-seen order.
///
/// Inputs are only borrowed. Feeding the result back as `local` with an
/// empty `external` returns it unchanged.
#[must_use]
pub fn merge_airports(local: &[AirportRecord], external: &[AirportRecord]) -> Vec<AirportRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(local.len() + external.len());
    let mut merged: Vec<AirportRecord> = Vec::with_capacity(local.len() + external.len());

    for rec in local.iter().chain(external) {
        let Some(key) = rec.key() else {
            continue;
        };
        if !seen.insert(key.clone()) {
            continue;
        }
        merged.push(AirportRecord {
            code: key,
            city: rec.city.clone(),
            country: rec.country.clone(),
            source: rec.source,
        });
    }

    let mut collator = city_collator();
    merged.sort_by(|a, b| {
        group_rank(a.source)
            .cmp(&group_rank(b.source))
            .then_with(|| collator.collate(a.city.as_str(), b.city.as_str()))
    });
    merged
}

const fn group_rank(source: Source) -> u8 {
    match source {
        Source::Local => 0,
        Source::External => 1,
    }
}

/// Locale-aware city comparison.
///
/// Uses the root-locale Unicode Collation Algorithm: primary order ignores
/// accents and case ("Zürich" sorts with "Zurich", "Ørland" before
/// "Paris"), ties fall back to accents, then to case with lowercase first.
/// Spaces and punctuation are significant, so "New York" precedes "Newark".
#[must_use]
pub fn compare_city(a: &str, b: &str) -> Ordering {
    city_collator().collate(a, b)
}

fn city_collator() -> Collator {
    Collator::new(Tailoring::default(), false, true)
}
