use serde::{Deserialize, Serialize};
use std::fmt;

use super::*;

/// Bodies that take part in synastry aspect detection, on both sides.
pub const RELATIONSHIP_PLANETS: [CelestialBody; 5] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Venus,
    CelestialBody::Mars,
    CelestialBody::Mercury,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl Aspect {
    pub const ALL: [Aspect; 5] = [
        Aspect::Conjunction,
        Aspect::Sextile,
        Aspect::Square,
        Aspect::Trine,
        Aspect::Opposition,
    ];

    /// Exact separation in degrees.
    pub const fn ideal_angle(self) -> f64 {
        match self {
            Aspect::Conjunction => 0.0,
            Aspect::Sextile => 60.0,
            Aspect::Square => 90.0,
            Aspect::Trine => 120.0,
            Aspect::Opposition => 180.0,
        }
    }

    /// Maximum allowed deviation from the ideal angle.
    pub const fn orb(self) -> f64 {
        match self {
            Aspect::Conjunction => 8.0,
            Aspect::Sextile => 4.0,
            Aspect::Square => 6.0,
            Aspect::Trine => 6.0,
            Aspect::Opposition => 8.0,
        }
    }

    /// Positive is harmonious, negative is challenging.
    pub const fn score(self) -> i32 {
        match self {
            Aspect::Conjunction => 5,
            Aspect::Sextile => 6,
            Aspect::Square => -6,
            Aspect::Trine => 8,
            Aspect::Opposition => -4,
        }
    }

    /// Deviation from the ideal angle when `separation` falls within orb.
    pub fn deviation(self, separation: f64) -> Option<f64> {
        let deviation = (separation - self.ideal_angle()).abs();
        (deviation <= self.orb()).then_some(deviation)
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Aspect::Conjunction => "conjunction",
            Aspect::Sextile => "sextile",
            Aspect::Square => "square",
            Aspect::Trine => "trine",
            Aspect::Opposition => "opposition",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectInfo {
    pub aspect: Aspect,
    /// Body from the first chart.
    pub planet1: CelestialBody,
    /// Body from the second chart.
    pub planet2: CelestialBody,
    pub orb: f64,
    pub score: i32,
    pub sign1: ZodiacSign,
    pub sign2: ZodiacSign,
}

impl AspectInfo {
    /// True when the two bodies are `a` and `b`, whichever chart each is in.
    pub fn pairs(&self, a: CelestialBody, b: CelestialBody) -> bool {
        (self.planet1 == a && self.planet2 == b) || (self.planet1 == b && self.planet2 == a)
    }

    pub fn involves(&self, body: CelestialBody) -> bool {
        self.planet1 == body || self.planet2 == body
    }
}

/// Shortest arc between two ecliptic longitudes, in `[0, 180]`.
pub fn angular_separation(deg1: f64, deg2: f64) -> f64 {
    let diff = (deg1 - deg2).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

fn relationship_planets(chart: &Chart) -> Vec<(CelestialBody, &PlanetPosition)> {
    chart
        .planets
        .iter()
        .filter(|(body, _)| RELATIONSHIP_PLANETS.contains(*body))
        .map(|(body, position)| (*body, position))
        .collect()
}

/// All synastry aspects between the relationship planets of both charts,
/// strongest valence first. Ties keep detection order.
pub fn find_aspects(chart1: &Chart, chart2: &Chart) -> Vec<AspectInfo> {
    let planets1 = relationship_planets(chart1);
    let planets2 = relationship_planets(chart2);

    let mut aspects = Vec::new();
    for &(planet1, position1) in &planets1 {
        for &(planet2, position2) in &planets2 {
            let separation = angular_separation(position1.degree, position2.degree);
            for aspect in Aspect::ALL {
                if let Some(orb) = aspect.deviation(separation) {
                    aspects.push(AspectInfo {
                        aspect,
                        planet1,
                        planet2,
                        orb,
                        score: aspect.score(),
                        sign1: position1.sign,
                        sign2: position2.sign,
                    });
                }
            }
        }
    }

    aspects.sort_by(|a, b| b.score.abs().cmp(&a.score.abs()));
    aspects
}
