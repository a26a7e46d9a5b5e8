use rust_decimal::Decimal;
use skylane_core::{
    FlightRecord, LegRequest, PriceAnalysis, PriceMetric, QuartileRanking, SeatClass,
    airline_name, parse_hour,
};

const fn class_multiplier(seat: SeatClass) -> i64 {
    match seat {
        SeatClass::Economy => 1,
        SeatClass::Business => 3,
        SeatClass::First => 5,
    }
}

// (airline, number, depart "HH:MM", arrive "HH:MM", duration, base fare)
const LOCAL: &[(&str, &str, &str, &str, &str, i64)] = &[
    ("BA", "112", "06:15", "08:45", "02:30", 180),
    ("AF", "2031", "11:40", "14:10", "02:30", 320),
    ("LH", "407", "19:05", "21:20", "02:15", 540),
];

// (airline, number, depart clock, arrive clock, ISO duration, fare in cents, stops)
const EXTERNAL: &[(&str, &str, &str, &str, &str, i64, u8)] = &[
    ("TK", "1", "07:30:00", "10:00:00", "PT2H30M", 24_560, 0),
    ("EK", "203", "13:05:00", "17:50:00", "PT4H45M", 61_200, 1),
    ("QR", "701", "22:40:00", "01:10:00", "PT2H30M", 18_999, 0),
];

pub fn local(leg: &LegRequest) -> Vec<FlightRecord> {
    let mult = class_multiplier(leg.seat_class);
    LOCAL
        .iter()
        .map(|(airline, number, dep, arr, duration, fare)| FlightRecord {
            airline_code: Some((*airline).to_string()),
            airline: Some(airline_name(airline)),
            flight_number: Some((*number).to_string()),
            origin: leg.origin.clone(),
            destination: leg.destination.clone(),
            departure_time: Some((*dep).to_string()),
            arrival_time: Some((*arr).to_string()),
            departure_hour: parse_hour(dep),
            arrival_hour: parse_hour(arr),
            duration: Some((*duration).to_string()),
            price: Decimal::new(fare * mult, 0),
            currency: Some("USD".to_string()),
            ..FlightRecord::default()
        })
        .collect()
}

pub fn external(leg: &LegRequest) -> Vec<FlightRecord> {
    let mult = class_multiplier(leg.seat_class);
    let date = leg.date.format("%Y-%m-%d");
    EXTERNAL
        .iter()
        .enumerate()
        .map(|(i, (airline, number, dep, arr, duration, cents, stops))| {
            let departure = format!("{date}T{dep}");
            let arrival = format!("{date}T{arr}");
            FlightRecord {
                offer_id: Some((i + 1).to_string()),
                airline_code: Some((*airline).to_string()),
                airline: Some(airline_name(airline)),
                flight_number: Some((*number).to_string()),
                origin: leg.origin.clone(),
                destination: leg.destination.clone(),
                departure_hour: parse_hour(&departure),
                arrival_hour: parse_hour(&arrival),
                departure_time: Some(departure),
                arrival_time: Some(arrival),
                duration: Some((*duration).to_string()),
                stops: *stops,
                price: Decimal::new(cents * mult, 2),
                currency: Some("EUR".to_string()),
                available_seats: Some(9),
                ..FlightRecord::default()
            }
        })
        .collect()
}

// Economy fare distribution in cents, scaled by cabin like the offers.
const DISTRIBUTION: &[(QuartileRanking, i64)] = &[
    (QuartileRanking::Minimum, 15_000),
    (QuartileRanking::First, 21_050),
    (QuartileRanking::Medium, 30_000),
    (QuartileRanking::Third, 45_000),
    (QuartileRanking::Maximum, 72_000),
];

pub fn price_analysis(leg: &LegRequest) -> PriceAnalysis {
    let mult = class_multiplier(leg.seat_class);
    PriceAnalysis::new(
        "EUR",
        DISTRIBUTION
            .iter()
            .map(|(ranking, cents)| PriceMetric {
                ranking: *ranking,
                amount: Decimal::new(cents * mult, 2),
            })
            .collect(),
    )
}
