use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Scoring of the circular area around a hexagon center.
///
/// Field names on the wire follow the backend, misspellings included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaScore {
    pub score: f64,
    #[serde(rename = "shopCount")]
    pub shop_count: f64,
    pub building: f64,
    pub parking: f64,
    #[serde(rename = "buissness")]
    pub business: f64,
    pub health: f64,
    pub education: f64,
    pub public_safety: f64,
    #[serde(rename = "goverment_institutions")]
    pub government_institutions: f64,
    pub catering: f64,
    pub tourism: f64,
    pub population: f64,
}

/// Qualitative band of an area score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    VeryGood,
    Good,
    Weak,
}

impl ScoreGrade {
    pub fn from_score(score: f64) -> Self {
        if score > 7.5 {
            ScoreGrade::VeryGood
        } else if score > 5.0 {
            ScoreGrade::Good
        } else {
            ScoreGrade::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::VeryGood => "Very good location",
            ScoreGrade::Good => "Good location",
            ScoreGrade::Weak => "Weak location",
        }
    }
}

impl AreaScore {
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score)
    }

    /// Score as shown in the details panel, two decimals
    pub fn score_text(&self) -> String {
        format!("{:.2}", self.score)
    }

    /// Labelled counters in panel order; population rounded to a whole number
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let count = |v: f64| format!("{v}");
        vec![
            ("Shops", count(self.shop_count)),
            ("Buildings", count(self.building)),
            ("Parking", count(self.parking)),
            ("Businesses", count(self.business)),
            ("Health facilities", count(self.health)),
            ("Education", count(self.education)),
            ("Public safety", count(self.public_safety)),
            ("Government institutions", count(self.government_institutions)),
            ("Catering", count(self.catering)),
            ("Tourism", count(self.tourism)),
            ("Population", format!("{}", self.population.round() as i64)),
        ]
    }
}

/// A parcel locker returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelLocker {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub location_type: String,
    #[serde(default)]
    pub opening_hours: String,
}

impl ParcelLocker {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

/// Query string of `/api/obszar`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaQuery {
    pub lat: f64,
    pub lon: f64,
    /// Meters
    pub radius: u32,
}

/// Query string of `/api/paczkomaty`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LockerQuery {
    pub lat: f64,
    pub lon: f64,
    /// Small unitless search radius, 1 to 3
    pub radius: u8,
}

impl LockerQuery {
    /// Query around `center`, with a radius that shrinks as the map zooms in
    pub fn around(center: LatLng, zoom: f64) -> Self {
        Self {
            lat: center.lat,
            lon: center.lng,
            radius: locker_radius_for_zoom(zoom),
        }
    }
}

pub fn locker_radius_for_zoom(zoom: f64) -> u8 {
    if zoom >= 17.0 {
        1
    } else if zoom >= 15.0 {
        2
    } else {
        3
    }
}
