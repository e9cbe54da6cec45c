// src/lib.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub mod aspects;
pub mod categories;
pub mod narrative;
pub mod overall;
pub mod pairing;
pub mod provider;
pub mod report;

pub use aspects::{angular_separation, find_aspects, Aspect, AspectInfo, RELATIONSHIP_PLANETS};
pub use categories::{calculate_category_scores, Category, CategoryScores};
pub use narrative::{generate_predictions, identify_challenges, identify_strengths, Predictions};
pub use overall::{calculate_overall_score, mean_aspect_score, round_to_tenth};
pub use pairing::{
    analyze_enneagram_pairing, analyze_mbti_pairing, calculate_element_compatibility,
    calculate_modality_compatibility, MbtiPairing, PairingScore,
};
pub use provider::{ChartProvider, JsonChartProvider};
pub use report::{render_chart_report, render_compatibility_report, ReportOptions};

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[serde(rename = "True_Node", alias = "True Node")]
    TrueNode,
    Chiron,
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
            CelestialBody::TrueNode => "True Node",
            CelestialBody::Chiron => "Chiron",
        };
        f.pad(name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum House {
    First = 1,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub fn from_index(index: usize) -> Option<House> {
        match index {
            1 => Some(House::First),
            2 => Some(House::Second),
            3 => Some(House::Third),
            4 => Some(House::Fourth),
            5 => Some(House::Fifth),
            6 => Some(House::Sixth),
            7 => Some(House::Seventh),
            8 => Some(House::Eighth),
            9 => Some(House::Ninth),
            10 => Some(House::Tenth),
            11 => Some(House::Eleventh),
            12 => Some(House::Twelfth),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Serde adapter for a house placement that may be a number, `null`, or the
/// literal `"Unknown"` emitted by chart generators without a birth time.
mod house_placement {
    use super::House;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Label(String),
    }

    pub fn serialize<S: Serializer>(house: &Option<House>, s: S) -> Result<S::Ok, S::Error> {
        match house {
            Some(house) => s.serialize_u8(house.number()),
            None => s.serialize_str("Unknown"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<House>, D::Error> {
        match Option::<Raw>::deserialize(d)? {
            None => Ok(None),
            Some(Raw::Number(n)) => House::from_index(n as usize)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("house {} outside 1..=12", n))),
            Some(Raw::Label(label)) if label.eq_ignore_ascii_case("unknown") => Ok(None),
            Some(Raw::Label(label)) => {
                Err(D::Error::custom(format!("unrecognised house `{}`", label)))
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized_longitude = longitude.rem_euclid(360.0);
        let sign_index = (normalized_longitude / 30.0).floor() as usize;
        match sign_index {
            0 => ZodiacSign::Aries,
            1 => ZodiacSign::Taurus,
            2 => ZodiacSign::Gemini,
            3 => ZodiacSign::Cancer,
            4 => ZodiacSign::Leo,
            5 => ZodiacSign::Virgo,
            6 => ZodiacSign::Libra,
            7 => ZodiacSign::Scorpio,
            8 => ZodiacSign::Sagittarius,
            9 => ZodiacSign::Capricorn,
            10 => ZodiacSign::Aquarius,
            _ => ZodiacSign::Pisces,
        }
    }

    pub fn element(self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    pub fn modality(self) -> Modality {
        match self {
            ZodiacSign::Aries | ZodiacSign::Cancer | ZodiacSign::Libra | ZodiacSign::Capricorn => {
                Modality::Cardinal
            }
            ZodiacSign::Taurus | ZodiacSign::Leo | ZodiacSign::Scorpio | ZodiacSign::Aquarius => {
                Modality::Fixed
            }
            ZodiacSign::Gemini
            | ZodiacSign::Virgo
            | ZodiacSign::Sagittarius
            | ZodiacSign::Pisces => Modality::Mutable,
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign_str = match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        };
        f.pad(sign_str)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    /// Fire and Air; the "yang" half of the zodiac.
    pub fn is_active(self) -> bool {
        matches!(self, Element::Fire | Element::Air)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        };
        f.pad(name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        };
        f.pad(name)
    }
}

// ---------------------------
// ## Structures
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub sign: ZodiacSign,
    /// Absolute ecliptic longitude in degrees, `[0, 360)`.
    pub degree: f64,
    #[serde(default, with = "house_placement")]
    pub house: Option<House>,
    #[serde(default)]
    pub retrograde: bool,
}

impl PlanetPosition {
    pub fn new(degree: f64) -> Self {
        PlanetPosition {
            sign: ZodiacSign::from_longitude(degree),
            degree,
            house: None,
            retrograde: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dominants {
    pub element: Element,
    pub modality: Modality,
    #[serde(default)]
    pub sign: Option<ZodiacSign>,
    #[serde(default)]
    pub planet: Option<CelestialBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StelliumKind {
    Sign,
    House,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stellium {
    #[serde(rename = "type")]
    pub kind: StelliumKind,
    pub location: String,
    pub planets: Vec<String>,
}

/// Four-letter MBTI-style code, one letter per axis: E/I, N/S, T/F, J/P.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MbtiType([char; 4]);

impl MbtiType {
    const AXES: [[char; 2]; 4] = [['E', 'I'], ['N', 'S'], ['T', 'F'], ['J', 'P']];

    /// Number of axes on which the two codes disagree.
    pub fn differences(&self, other: &MbtiType) -> usize {
        self.0.iter().zip(other.0.iter()).filter(|(a, b)| a != b).count()
    }
}

impl FromStr for MbtiType {
    type Err = AstrologyError;

    fn from_str(code: &str) -> Result<Self> {
        let letters: Vec<char> = code.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.len() != 4 {
            return Err(AstrologyError::InvalidChart(format!(
                "MBTI code `{}` must have exactly four letters",
                code
            )));
        }
        let mut out = ['E'; 4];
        for (i, (letter, axis)) in letters.iter().zip(Self::AXES.iter()).enumerate() {
            if !axis.contains(letter) {
                return Err(AstrologyError::InvalidChart(format!(
                    "MBTI code `{}` has `{}` at position {}, expected {} or {}",
                    code,
                    letter,
                    i + 1,
                    axis[0],
                    axis[1]
                )));
            }
            out[i] = *letter;
        }
        Ok(MbtiType(out))
    }
}

impl TryFrom<String> for MbtiType {
    type Error = AstrologyError;

    fn try_from(code: String) -> Result<Self> {
        code.parse()
    }
}

impl From<MbtiType> for String {
    fn from(mbti: MbtiType) -> String {
        mbti.to_string()
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Enneagram type number, always within `1..=9`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EnneagramType(u8);

impl EnneagramType {
    pub fn new(number: u8) -> Result<Self> {
        if (1..=9).contains(&number) {
            Ok(EnneagramType(number))
        } else {
            Err(AstrologyError::InvalidChart(format!(
                "Enneagram type {} outside 1..=9",
                number
            )))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for EnneagramType {
    type Error = AstrologyError;

    fn try_from(number: u8) -> Result<Self> {
        EnneagramType::new(number)
    }
}

impl From<EnneagramType> for u8 {
    fn from(kind: EnneagramType) -> u8 {
        kind.0
    }
}

impl fmt::Display for EnneagramType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnneagramProfile {
    #[serde(rename = "type")]
    pub kind: EnneagramType,
    /// Wing label such as `4w5`.
    pub wing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Place { city: String, nation: String },
    Coordinates { lat: f64, lng: f64 },
    /// Pre-formatted place, e.g. `"Porto, Portugal"` or `"41.15, -8.61"`.
    Label(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Location::Place { city, nation } => write!(f, "{}, {}", city, nation),
            Location::Coordinates { lat, lng } => write!(f, "{}, {}", lat, lng),
            Location::Label(label) => f.pad(label),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Birth data the chart was generated from, kept for provenance only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl BirthData {
    pub fn new(date: &str, time: &str, location: Option<Location>) -> Result<Self> {
        let birth = BirthData {
            date: date.to_string(),
            time: time.to_string(),
            location,
            timezone: default_timezone(),
        };
        birth.validate()?;
        Ok(birth)
    }

    pub fn parse_date(&self) -> Result<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| AstrologyError::InvalidDate(self.date.clone()))
    }

    pub fn parse_time(&self) -> Result<chrono::NaiveTime> {
        chrono::NaiveTime::parse_from_str(&self.time, "%H:%M")
            .map_err(|_| AstrologyError::InvalidTime(self.time.clone()))
    }

    pub fn validate(&self) -> Result<()> {
        self.parse_date()?;
        self.parse_time()?;
        match &self.location {
            Some(Location::Label(label)) if label.trim().is_empty() => {
                Err(AstrologyError::MissingLocation)
            }
            Some(_) => Ok(()),
            None => Err(AstrologyError::MissingLocation),
        }
    }
}

/// Ascendant: the sign rising on the eastern horizon at birth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub sign: ZodiacSign,
    pub degree: f64,
}

/// Only the ascendant is kept; Sun and Moon already live in `planets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BigThree {
    #[serde(default)]
    pub rising: Option<Ascendant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub name: String,
    #[serde(default)]
    pub birth_data: Option<BirthData>,
    #[serde(default)]
    pub big_three: Option<BigThree>,
    pub planets: BTreeMap<CelestialBody, PlanetPosition>,
    pub element_distribution: BTreeMap<Element, f64>,
    #[serde(default)]
    pub modality_distribution: BTreeMap<Modality, f64>,
    #[serde(default)]
    pub stelliums: Vec<Stellium>,
    pub dominants: Dominants,
    pub mbti: MbtiType,
    pub enneagram: EnneagramProfile,
}

impl Chart {
    pub fn planet(&self, body: CelestialBody) -> Option<&PlanetPosition> {
        self.planets.get(&body)
    }

    pub fn rising(&self) -> Option<&Ascendant> {
        self.big_three.as_ref()?.rising.as_ref()
    }
}

/// `"Alice's Venus"`, the form used in aspect narratives.
pub(crate) fn possessive(name: &str, body: CelestialBody) -> String {
    format!("{}'s {}", name, body)
}

// ---------------------------
// ## Compatibility Result
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub name1: String,
    pub name2: String,
    /// Weighted overall score in `[0, 100]`, one decimal.
    pub overall_score: f64,
    pub aspects: Vec<AspectInfo>,
    pub element_compatibility: PairingScore,
    pub modality_compatibility: PairingScore,
    pub mbti_compatibility: MbtiPairing,
    pub enneagram_compatibility: PairingScore,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub predictions: Predictions,
}

impl CompatibilityResult {
    pub fn calculate(chart1: &Chart, chart2: &Chart) -> Self {
        let aspects = find_aspects(chart1, chart2);
        debug!(
            person1 = %chart1.name,
            person2 = %chart2.name,
            aspects = aspects.len(),
            "synastry aspects detected"
        );

        let element_compatibility = calculate_element_compatibility(
            chart1.dominants.element,
            chart2.dominants.element,
        );
        let modality_compatibility = calculate_modality_compatibility(
            chart1.dominants.modality,
            chart2.dominants.modality,
        );
        let mbti_compatibility = analyze_mbti_pairing(&chart1.mbti, &chart2.mbti);
        let enneagram_compatibility =
            analyze_enneagram_pairing(&chart1.enneagram, &chart2.enneagram);

        let category_scores = calculate_category_scores(&aspects, &modality_compatibility);
        debug!(?category_scores, "category scores calculated");

        let raw_score = calculate_overall_score(
            &aspects,
            &element_compatibility,
            &modality_compatibility,
            &mbti_compatibility,
            &enneagram_compatibility,
            &category_scores,
        );
        let overall_score = round_to_tenth(raw_score);

        let strengths = identify_strengths(&chart1.name, &chart2.name, &aspects, &category_scores);
        let challenges =
            identify_challenges(&chart1.name, &chart2.name, &aspects, &category_scores);
        // Outlook buckets see the unrounded score.
        let predictions = generate_predictions(raw_score);
        debug!(raw_score, overall_score, "compatibility analysis complete");

        CompatibilityResult {
            name1: chart1.name.clone(),
            name2: chart2.name.clone(),
            overall_score,
            aspects,
            element_compatibility,
            modality_compatibility,
            mbti_compatibility,
            enneagram_compatibility,
            category_scores,
            strengths,
            challenges,
            predictions,
        }
    }
}

pub fn analyze_compatibility(chart1: &Chart, chart2: &Chart) -> CompatibilityResult {
    CompatibilityResult::calculate(chart1, chart2)
}

// ---------------------------
// ## Error Handling
// ---------------------------

#[derive(Debug, thiserror::Error)]
pub enum AstrologyError {
    #[error("Invalid date format: {0}. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time format: {0}. Use HH:MM (24-hour)")]
    InvalidTime(String),

    #[error("Must provide either (city, nation) or (lat, lng)")]
    MissingLocation,

    #[error("Invalid chart: {0}")]
    InvalidChart(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed chart JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AstrologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zodiac_sign_from_longitude_wraps() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(359.99), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(365.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-15.0), ZodiacSign::Pisces);
    }

    #[test]
    fn signs_map_to_elements_and_modalities() {
        assert_eq!(ZodiacSign::Leo.element(), Element::Fire);
        assert_eq!(ZodiacSign::Leo.modality(), Modality::Fixed);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
        assert_eq!(ZodiacSign::Pisces.modality(), Modality::Mutable);
        assert_eq!(ZodiacSign::Capricorn.modality(), Modality::Cardinal);
    }

    #[test]
    fn mbti_parses_and_counts_differences() {
        let a: MbtiType = "INTJ".parse().unwrap();
        let b: MbtiType = "enfp".parse().unwrap();
        assert_eq!(b.to_string(), "ENFP");
        assert_eq!(a.differences(&b), 3);
        assert_eq!(a.differences(&a), 0);
    }

    #[test]
    fn mbti_rejects_wrong_alphabet_or_length() {
        assert!("XNTJ".parse::<MbtiType>().is_err());
        assert!("INJT".parse::<MbtiType>().is_err());
        assert!("INT".parse::<MbtiType>().is_err());
    }

    #[test]
    fn enneagram_type_range() {
        assert!(EnneagramType::new(0).is_err());
        assert!(EnneagramType::new(10).is_err());
        assert_eq!(EnneagramType::new(9).unwrap().number(), 9);
    }

    #[test]
    fn house_placement_accepts_number_null_and_unknown() {
        let numbered: PlanetPosition =
            serde_json::from_str(r#"{"sign":"Leo","degree":130.5,"house":5}"#).unwrap();
        assert_eq!(numbered.house, Some(House::Fifth));

        let unknown: PlanetPosition =
            serde_json::from_str(r#"{"sign":"Leo","degree":130.5,"house":"Unknown"}"#).unwrap();
        assert_eq!(unknown.house, None);

        let missing: PlanetPosition =
            serde_json::from_str(r#"{"sign":"Leo","degree":130.5}"#).unwrap();
        assert_eq!(missing.house, None);
        assert!(!missing.retrograde);

        let bad = serde_json::from_str::<PlanetPosition>(
            r#"{"sign":"Leo","degree":130.5,"house":13}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn true_node_uses_generator_key() {
        let json = serde_json::to_string(&CelestialBody::TrueNode).unwrap();
        assert_eq!(json, "\"True_Node\"");
        assert_eq!(CelestialBody::TrueNode.to_string(), "True Node");
    }

    #[test]
    fn birth_data_validation() {
        let place = Some(Location::Place {
            city: "Porto".to_string(),
            nation: "Portugal".to_string(),
        });
        assert!(BirthData::new("1982-07-29", "14:00", place.clone()).is_ok());
        assert!(matches!(
            BirthData::new("29/07/1982", "14:00", place.clone()),
            Err(AstrologyError::InvalidDate(_))
        ));
        assert!(matches!(
            BirthData::new("1982-07-29", "2pm", place),
            Err(AstrologyError::InvalidTime(_))
        ));
        assert!(matches!(
            BirthData::new("1982-07-29", "14:00", None),
            Err(AstrologyError::MissingLocation)
        ));
        assert!(matches!(
            BirthData::new("1982-07-29", "14:00", Some(Location::Label("  ".to_string()))),
            Err(AstrologyError::MissingLocation)
        ));
    }

    #[test]
    fn location_accepts_objects_and_plain_labels() {
        let label: Location = serde_json::from_str(r#""Porto, Portugal""#).unwrap();
        assert_eq!(label, Location::Label("Porto, Portugal".to_string()));
        assert_eq!(label.to_string(), "Porto, Portugal");

        let place: Location =
            serde_json::from_str(r#"{"city":"Porto","nation":"Portugal"}"#).unwrap();
        assert_eq!(place.to_string(), "Porto, Portugal");

        let point: Location = serde_json::from_str(r#"{"lat":41.15,"lng":-8.61}"#).unwrap();
        assert_eq!(point, Location::Coordinates { lat: 41.15, lng: -8.61 });
    }
}
