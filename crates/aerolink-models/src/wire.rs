//! Remote payload formats.
//!
//! The flight endpoint follows the aviationstack `/v1/flights` layout and
//! the news endpoint follows NewsAPI `/v2/top-headlines`. Only the fields
//! the site displays are modelled; everything is optional on the wire and
//! validated on conversion into the model types.
//!
//! ```text
//! { "data":     [ WireFlight, ... ] }
//! { "articles": [ WireArticle, ... ] }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::article::NewsArticle;
use crate::error::ModelError;
use crate::flight::{Callsign, FlightRecord, FlightStatus, Kinematics, Position};

// ---------------------------------------------------------------------------
// Flights
// ---------------------------------------------------------------------------

/// One element of the flight endpoint's `data` array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WireFlight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_status: Option<String>,
    #[serde(default)]
    pub flight: WireFlightIdent,
    #[serde(default)]
    pub airline: WireNamed,
    #[serde(default)]
    pub departure: WireAirport,
    #[serde(default)]
    pub arrival: WireAirport,
    /// Last position report. Absent for flights that are not airborne.
    #[serde(default)]
    pub live: Option<WireLive>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WireFlightIdent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WireNamed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WireAirport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
}

/// Position report. Altitude in metres, speed in km/h.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WireLive {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub direction: f64,
    pub speed_horizontal: f64,
}

impl WireFlight {
    /// Validate and convert into a [`FlightRecord`].
    ///
    /// The ICAO callsign is preferred over the IATA flight number. When the
    /// report carries no timestamp, `received_at` is used.
    pub fn into_record(self, received_at: DateTime<Utc>) -> Result<FlightRecord, ModelError> {
        let ident = self
            .flight
            .icao
            .filter(|s| !s.trim().is_empty())
            .or(self.flight.iata)
            .unwrap_or_default();
        let callsign = Callsign::try_from(ident)?;
        let live = self.live.ok_or_else(|| ModelError::MissingField {
            field: "live".into(),
        })?;
        let position = Position::new(live.latitude, live.longitude)?;
        let kinematics = Kinematics {
            altitude_m: live.altitude,
            speed_kmh: live.speed_horizontal,
            heading_deg: live.direction,
        };

        let mut record =
            FlightRecord::new(callsign, position, kinematics, live.updated.unwrap_or(received_at))?
                .with_status(
                    self.flight_status
                        .as_deref()
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(FlightStatus::Unknown),
                );
        if let Some(name) = self.airline.name {
            record = record.with_airline(name);
        }
        if let (Some(origin), Some(destination)) = (self.departure.iata, self.arrival.iata) {
            record = record.with_route(origin, destination);
        }
        Ok(record)
    }
}

impl From<&FlightRecord> for WireFlight {
    fn from(f: &FlightRecord) -> Self {
        let position = f.position();
        Self {
            flight_status: Some(f.status().to_string()),
            flight: WireFlightIdent {
                icao: Some(f.callsign().to_string()),
                iata: None,
            },
            airline: WireNamed {
                name: f.airline().map(String::from),
            },
            departure: WireAirport {
                iata: f.origin().map(String::from),
            },
            arrival: WireAirport {
                iata: f.destination().map(String::from),
            },
            live: Some(WireLive {
                updated: Some(f.updated_at()),
                latitude: position.latitude,
                longitude: position.longitude,
                altitude: f.altitude_m(),
                direction: f.heading_deg(),
                speed_horizontal: f.speed_kmh(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

/// Title NewsAPI substitutes for articles withdrawn by the publisher.
pub const REMOVED_ARTICLE_TITLE: &str = "[Removed]";

/// One element of the news endpoint's `articles` array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireArticle {
    #[serde(default)]
    pub source: WireNamed,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    /// Not part of NewsAPI; filled in by aggregators that rate sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility: Option<f64>,
}

impl WireArticle {
    /// Validate and convert into a [`NewsArticle`].
    pub fn into_article(self, received_at: DateTime<Utc>) -> Result<NewsArticle, ModelError> {
        let title = self.title.unwrap_or_default();
        if title.trim() == REMOVED_ARTICLE_TITLE {
            return Err(ModelError::EmptyIdentifier { field: "title" });
        }
        let mut article = NewsArticle::new(&title, self.published_at.unwrap_or(received_at))?;
        if let Some(description) = self.description {
            article = article.with_description(description);
        }
        if let Some(source) = self.source.name {
            article = article.with_source(source);
        }
        if let Some(url) = self.url {
            article = article.with_url(url);
        }
        if let Some(score) = self.credibility {
            article = article.with_credibility(score)?;
        }
        Ok(article)
    }
}

impl From<&NewsArticle> for WireArticle {
    fn from(a: &NewsArticle) -> Self {
        Self {
            source: WireNamed {
                name: a.source().map(String::from),
            },
            title: Some(a.title().to_string()),
            description: a.description().map(String::from),
            url: a.url().map(String::from),
            published_at: Some(a.published_at()),
            credibility: a.credibility(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aviationstack_flight_converts() {
        let raw = json!({
            "flight_date": "2026-03-01",
            "flight_status": "active",
            "departure": { "airport": "Charles De Gaulle", "iata": "CDG" },
            "arrival": { "airport": "John F Kennedy", "iata": "JFK" },
            "airline": { "name": "Air France", "iata": "AF" },
            "flight": { "number": "6", "iata": "AF6", "icao": "AFR6" },
            "live": {
                "updated": "2026-03-01T10:00:00Z",
                "latitude": 50.1,
                "longitude": -20.3,
                "altitude": 11277.6,
                "direction": 281.0,
                "speed_horizontal": 905.0,
                "is_ground": false
            }
        });
        let wire: WireFlight = serde_json::from_value(raw).unwrap();
        let rec = wire.into_record(Utc::now()).unwrap();
        assert_eq!(rec.callsign().as_str(), "AFR6");
        assert_eq!(rec.airline(), Some("Air France"));
        assert_eq!(rec.origin(), Some("CDG"));
        assert_eq!(rec.status(), FlightStatus::Active);
        assert_eq!(rec.updated_at().to_rfc3339(), "2026-03-01T10:00:00+00:00");
    }

    #[test]
    fn flight_falls_back_to_iata_and_unknown_status() {
        let raw = json!({
            "flight_status": "incident",
            "flight": { "iata": "AF6" },
            "live": { "latitude": 0.0, "longitude": 0.0, "altitude": 0.0,
                      "direction": 0.0, "speed_horizontal": 0.0 }
        });
        let received = Utc::now();
        let rec = serde_json::from_value::<WireFlight>(raw)
            .unwrap()
            .into_record(received)
            .unwrap();
        assert_eq!(rec.callsign().as_str(), "AF6");
        assert_eq!(rec.status(), FlightStatus::Unknown);
        assert_eq!(rec.updated_at(), received);
    }

    #[test]
    fn flight_without_live_block_is_rejected() {
        let raw = json!({ "flight": { "icao": "AFR6" }, "live": null });
        let err = serde_json::from_value::<WireFlight>(raw)
            .unwrap()
            .into_record(Utc::now())
            .unwrap_err();
        assert_eq!(err, ModelError::MissingField { field: "live".into() });
    }

    #[test]
    fn newsapi_article_converts() {
        let raw = json!({
            "source": { "id": null, "name": "Aviation Week" },
            "author": "Staff",
            "title": "Sustainable fuel mandate takes effect",
            "description": "Blending targets start at 2%.",
            "url": "https://example.com/saf",
            "publishedAt": "2026-01-05T08:30:00Z",
            "content": "..."
        });
        let article = serde_json::from_value::<WireArticle>(raw)
            .unwrap()
            .into_article(Utc::now())
            .unwrap();
        assert_eq!(article.title(), "Sustainable fuel mandate takes effect");
        assert_eq!(article.source(), Some("Aviation Week"));
        assert_eq!(article.credibility(), None);
    }

    #[test]
    fn removed_article_is_rejected() {
        let wire = WireArticle {
            title: Some(REMOVED_ARTICLE_TITLE.into()),
            ..Default::default()
        };
        assert!(wire.into_article(Utc::now()).is_err());
    }

    #[test]
    fn wire_mirror_preserves_article() {
        let article = NewsArticle::new("eVTOL certification update", Utc::now())
            .unwrap()
            .with_source("FAA")
            .with_credibility(92.0)
            .unwrap();
        let back = WireArticle::from(&article)
            .into_article(Utc::now())
            .unwrap();
        assert_eq!(article, back);
    }
}
