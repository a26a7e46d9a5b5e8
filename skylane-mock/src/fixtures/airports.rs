use skylane_core::AirportSuggestion;

// (code, city, country)
const LOCAL: &[(&str, &str, &str)] = &[
    ("JFK", "New York", "United States"),
    ("LGA", "New York", "United States"),
    ("LHR", "London", "United Kingdom"),
    ("CDG", "Paris", "France"),
    ("IST", "Istanbul", "Türkiye"),
    ("DEL", "Delhi", "India"),
    ("BOM", "Mumbai", "India"),
];

// (code, city, name, country, type); the provider sometimes omits the city.
const EXTERNAL: &[(&str, Option<&str>, &str, &str, &str)] = &[
    ("jfk", Some("NEW YORK"), "John F Kennedy Intl", "United States", "AIRPORT"),
    ("EWR", None, "Newark Liberty Intl", "United States", "AIRPORT"),
    ("NYC", Some("NEW YORK"), "New York", "United States", "CITY"),
    ("LCY", Some("LONDON"), "London City", "United Kingdom", "AIRPORT"),
    ("ORY", Some("PARIS"), "Orly", "France", "AIRPORT"),
    ("SAW", Some("ISTANBUL"), "Sabiha Gökçen", "Türkiye", "AIRPORT"),
    ("ZRH", Some("ZÜRICH"), "Zürich Airport", "Switzerland", "AIRPORT"),
];

fn matches(q: &str, fields: &[&str]) -> bool {
    fields.iter().any(|f| f.to_lowercase().contains(q))
}

pub fn local(query: &str) -> Vec<AirportSuggestion> {
    let q = query.trim().to_lowercase();
    LOCAL
        .iter()
        .filter(|(code, city, _)| matches(&q, &[*code, *city]))
        .map(|(code, city, country)| AirportSuggestion {
            code: Some((*code).to_string()),
            city: Some((*city).to_string()),
            country: Some((*country).to_string()),
            ..AirportSuggestion::default()
        })
        .collect()
}

pub fn external(query: &str) -> Vec<AirportSuggestion> {
    let q = query.trim().to_lowercase();
    EXTERNAL
        .iter()
        .filter(|(code, city, name, _, _)| matches(&q, &[*code, city.unwrap_or_default(), *name]))
        .map(|(code, city, name, country, kind)| AirportSuggestion {
            code: Some((*code).to_string()),
            city: city.map(str::to_string),
            name: Some((*name).to_string()),
            country: Some((*country).to_string()),
            kind: Some((*kind).to_string()),
        })
        .collect()
}
