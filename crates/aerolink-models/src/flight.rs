//! Flight tracker records.
//!
//! A [`FlightRecord`] is one aircraft as displayed on the tracker map:
//! identity, route, and the last reported position and velocity.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{check_range, ModelError};

/// Highest altitude the tracker accepts, in metres.
pub const MAX_ALTITUDE_M: f64 = 30_000.0;
/// Highest ground speed the tracker accepts, in km/h.
pub const MAX_SPEED_KMH: f64 = 7_000.0;

// ---------------------------------------------------------------------------
// Callsign
// ---------------------------------------------------------------------------

/// A validated, non-empty flight callsign (e.g. `"AFR1234"`).
///
/// Surrounding whitespace is trimmed during validated construction.
///
/// # Examples
///
/// ```
/// use aerolink_models::Callsign;
///
/// let cs: Callsign = " AFR1234 ".parse().unwrap();
/// assert_eq!(cs.as_str(), "AFR1234");
///
/// assert!("   ".parse::<Callsign>().is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Callsign(String);

impl Callsign {
    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Callsign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Callsign {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyIdentifier { field: "callsign" });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl TryFrom<String> for Callsign {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl FromStr for Callsign {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// ---------------------------------------------------------------------------
// FlightStatus
// ---------------------------------------------------------------------------

/// Operational status of a tracked flight.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FlightStatus {
    /// Filed but not yet airborne.
    Scheduled,
    /// Airborne.
    Active,
    /// Arrived at destination.
    Landed,
    /// Cancelled by the operator.
    Cancelled,
    /// Diverted to an alternate.
    Diverted,
    /// Status not reported.
    #[default]
    Unknown,
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A WGS-84 coordinate in decimal degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude, `-90.0..=90.0`.
    pub latitude: f64,
    /// Longitude, `-180.0..=180.0`.
    pub longitude: f64,
}

impl Position {
    /// Build a validated position.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ModelError> {
        Ok(Self {
            latitude: check_range("latitude", latitude, -90.0, 90.0)?,
            longitude: check_range("longitude", longitude, -180.0, 180.0)?,
        })
    }
}

// ---------------------------------------------------------------------------
// FlightRecord
// ---------------------------------------------------------------------------

/// One tracked flight.
///
/// Construct through [`FlightRecord::new`] and the `with_*` setters so the
/// numeric invariants are checked; fields are read-only afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlightRecord {
    callsign: Callsign,
    airline: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
    status: FlightStatus,
    position: Position,
    altitude_m: f64,
    speed_kmh: f64,
    heading_deg: f64,
    updated_at: DateTime<Utc>,
}

/// Kinematic state reported for a flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Altitude in metres.
    pub altitude_m: f64,
    /// Ground speed in km/h.
    pub speed_kmh: f64,
    /// True heading in degrees.
    pub heading_deg: f64,
}

impl FlightRecord {
    /// Build a validated record.
    ///
    /// Fails when altitude, speed or heading are non-finite or out of
    /// bounds.
    pub fn new(
        callsign: Callsign,
        position: Position,
        kinematics: Kinematics,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            callsign,
            airline: None,
            origin: None,
            destination: None,
            status: FlightStatus::default(),
            position,
            altitude_m: check_range("altitude_m", kinematics.altitude_m, 0.0, MAX_ALTITUDE_M)?,
            speed_kmh: check_range("speed_kmh", kinematics.speed_kmh, 0.0, MAX_SPEED_KMH)?,
            heading_deg: check_range("heading_deg", kinematics.heading_deg, 0.0, 360.0)?,
            updated_at,
        })
    }

    /// Set the operating airline name.
    #[must_use]
    pub fn with_airline(mut self, airline: impl Into<String>) -> Self {
        self.airline = Some(airline.into());
        self
    }

    /// Set the origin and destination airport codes.
    #[must_use]
    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self.destination = Some(destination.into());
        self
    }

    /// Set the operational status.
    #[must_use]
    pub fn with_status(mut self, status: FlightStatus) -> Self {
        self.status = status;
        self
    }

    /// The flight callsign.
    pub fn callsign(&self) -> &Callsign {
        &self.callsign
    }

    /// Operating airline, when reported.
    pub fn airline(&self) -> Option<&str> {
        self.airline.as_deref()
    }

    /// Origin airport code, when reported.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Destination airport code, when reported.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn status(&self) -> FlightStatus {
        self.status
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    /// Time of the last position report.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}→{} {} {:.0} m {:.0} km/h {:03.0}°",
            self.callsign,
            self.origin.as_deref().unwrap_or("----"),
            self.destination.as_deref().unwrap_or("----"),
            self.status,
            self.altitude_m,
            self.speed_kmh,
            self.heading_deg,
        )
    }
}
