//! Deterministic stand-in content.
//!
//! When a remote feed is unavailable the site still shows plausible flights
//! and headlines. [`simulate`] is a pure function of its arguments: the same
//! kind, seed, count and anchor always yield the same items.

use aerolink_models::{
    Callsign, FeedItem, FeedKind, FlightRecord, FlightStatus, Kinematics, ModelError,
    NewsArticle, Position,
};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// ICAO prefix and display name.
const AIRLINES: &[(&str, &str)] = &[
    ("AFR", "Air France"),
    ("BAW", "British Airways"),
    ("DLH", "Lufthansa"),
    ("UAE", "Emirates"),
    ("SIA", "Singapore Airlines"),
    ("QFA", "Qantas"),
    ("ETH", "Ethiopian Airlines"),
    ("KQA", "Kenya Airways"),
];

/// IATA code, latitude, longitude.
const AIRPORTS: &[(&str, f64, f64)] = &[
    ("CDG", 49.0097, 2.5479),
    ("LHR", 51.4700, -0.4543),
    ("FRA", 50.0379, 8.5622),
    ("DXB", 25.2532, 55.3657),
    ("SIN", 1.3644, 103.9915),
    ("SYD", -33.9399, 151.1753),
    ("ADD", 8.9779, 38.7993),
    ("NBO", -1.3192, 36.9278),
    ("JFK", 40.6413, -73.7781),
    ("ACC", 5.6052, -0.1668),
];

const HEADLINES: &[(&str, &str)] = &[
    (
        "AI co-pilot completes first certified oceanic crossing",
        "Flight-deck assistant handled routine checklists and fuel planning end to end.",
    ),
    (
        "Hypersonic demonstrator reaches Mach 5 in sustained flight",
        "The scramjet test vehicle held cruise for over four minutes.",
    ),
    (
        "Predictive maintenance cuts unscheduled engine removals by a third",
        "Operators report fewer delays after adopting sensor-driven inspections.",
    ),
    (
        "Sustainable aviation fuel blending mandate takes effect",
        "Airlines must now uplift a minimum share of SAF at major hubs.",
    ),
    (
        "eVTOL air taxi network gains operating approval",
        "Initial routes will link city centres with nearby airports.",
    ),
    (
        "Quantum navigation trial flies without GPS",
        "An atomic sensor package kept position errors within a few hundred metres.",
    ),
    (
        "Digital towers expand to regional airports",
        "Remote controllers manage traffic from a centre hundreds of kilometres away.",
    ),
    (
        "Hydrogen-electric prototype completes cross-country flight",
        "The fuel-cell powertrain produced only water vapour.",
    ),
    (
        "Autonomous cargo drones begin scheduled deliveries",
        "The first corridor connects two logistics hubs over sparsely populated land.",
    ),
    (
        "Satellite ADS-B coverage closes polar tracking gap",
        "Controllers now see aircraft over the poles in near real time.",
    ),
];

const SOURCES: &[&str] = &[
    "Aviation Week",
    "Flight Global",
    "Simple Flying",
    "The Flying Engineer",
    "AeroTime",
];

/// Generate `count` synthetic items of `kind`, timestamped relative to
/// `anchor`.
///
/// # Examples
///
/// ```
/// use aerolink_models::FeedKind;
/// use aerolink_sdk::simulate;
/// use chrono::Utc;
///
/// let anchor = Utc::now();
/// let a = simulate(FeedKind::Flights, 73, 5, anchor);
/// let b = simulate(FeedKind::Flights, 73, 5, anchor);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 5);
/// ```
pub fn simulate(kind: FeedKind, seed: u64, count: usize, anchor: DateTime<Utc>) -> Vec<FeedItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut headline_order: Vec<usize> = (0..HEADLINES.len()).collect();
    headline_order.shuffle(&mut rng);

    let mut items = Vec::with_capacity(count);
    // Draws stay inside the model bounds; a rejected draw is simply redrawn.
    while items.len() < count {
        let drawn = match kind {
            FeedKind::Flights => simulated_flight(&mut rng, anchor).map(FeedItem::from),
            FeedKind::News => {
                let n = items.len();
                let headline = HEADLINES[headline_order[n % HEADLINES.len()]];
                simulated_article(&mut rng, anchor, headline, n / HEADLINES.len())
                    .map(FeedItem::from)
            }
        };
        match drawn {
            Ok(item) => items.push(item),
            Err(e) => tracing::debug!(error = %e, "simulator draw rejected"),
        }
    }
    items
}

fn simulated_flight(rng: &mut StdRng, anchor: DateTime<Utc>) -> Result<FlightRecord, ModelError> {
    let (prefix, airline) = AIRLINES[rng.gen_range(0..AIRLINES.len())];
    let from = rng.gen_range(0..AIRPORTS.len());
    // Offset by at least one so origin and destination differ.
    let to = (from + rng.gen_range(1..AIRPORTS.len())) % AIRPORTS.len();
    let (origin, olat, olon) = AIRPORTS[from];
    let (destination, dlat, dlon) = AIRPORTS[to];

    let progress: f64 = rng.gen_range(0.1..0.9);
    let position = Position::new(
        olat + (dlat - olat) * progress,
        olon + (dlon - olon) * progress,
    )?;
    let heading = ((dlon - olon).atan2(dlat - olat).to_degrees() + 360.0) % 360.0;
    let kinematics = Kinematics {
        altitude_m: rng.gen_range(9_000.0..12_500.0),
        speed_kmh: rng.gen_range(780.0..950.0),
        heading_deg: heading,
    };
    let callsign = Callsign::try_from(format!("{prefix}{}", rng.gen_range(10..9999)))?;
    let updated_at = anchor - Duration::seconds(rng.gen_range(0..300));

    Ok(FlightRecord::new(callsign, position, kinematics, updated_at)?
        .with_airline(airline)
        .with_route(origin, destination)
        .with_status(FlightStatus::Active))
}

fn simulated_article(
    rng: &mut StdRng,
    anchor: DateTime<Utc>,
    (headline, summary): (&str, &str),
    round: usize,
) -> Result<NewsArticle, ModelError> {
    let title = if round == 0 {
        headline.to_string()
    } else {
        format!("{headline} (update {round})")
    };
    let source = SOURCES[rng.gen_range(0..SOURCES.len())];
    let published_at = anchor - Duration::minutes(rng.gen_range(5..60 * 48));

    NewsArticle::new(&title, published_at)?
        .with_description(summary)
        .with_source(source)
        .with_credibility(rng.gen_range(60.0..=100.0_f64).round())
}
