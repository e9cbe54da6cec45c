use serde::{Deserialize, Serialize};
use std::fmt;

use super::*;

pub const BASELINE: f64 = 50.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Romance,
    Friendship,
    Business,
    Communication,
    ConflictResolution,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Romance,
        Category::Friendship,
        Category::Business,
        Category::Communication,
        Category::ConflictResolution,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Romance => "Romance",
            Category::Friendship => "Friendship",
            Category::Business => "Business",
            Category::Communication => "Communication",
            Category::ConflictResolution => "Conflict Resolution",
        };
        f.pad(name)
    }
}

/// Relationship-area scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub romance: f64,
    pub friendship: f64,
    pub business: f64,
    pub communication: f64,
    pub conflict_resolution: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Romance => self.romance,
            Category::Friendship => self.friendship,
            Category::Business => self.business,
            Category::Communication => self.communication,
            Category::ConflictResolution => self.conflict_resolution,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn mean(&self) -> f64 {
        self.iter().map(|(_, score)| score).sum::<f64>() / Category::ALL.len() as f64
    }
}

fn normalize(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

fn weighted_sum<'a>(aspects: impl Iterator<Item = &'a AspectInfo>, weight: f64) -> f64 {
    aspects.map(|a| a.score as f64 * weight).sum()
}

/// Scores the five relationship areas from the aspect sequence. Business
/// leans on the modality pairing instead of any aspect filter.
pub fn calculate_category_scores(
    aspects: &[AspectInfo],
    modality: &PairingScore,
) -> CategoryScores {
    let avg = mean_aspect_score(aspects);

    let sun_moon = || {
        aspects
            .iter()
            .filter(|a| a.pairs(CelestialBody::Sun, CelestialBody::Moon))
    };
    let venus_mars = || {
        aspects
            .iter()
            .filter(|a| a.pairs(CelestialBody::Venus, CelestialBody::Mars))
    };
    let mercury = || aspects.iter().filter(|a| a.involves(CelestialBody::Mercury));

    let romance = BASELINE
        + avg * 3.0
        + weighted_sum(sun_moon(), 2.0)
        + weighted_sum(venus_mars(), 3.0);
    let friendship = BASELINE + avg * 3.0 + weighted_sum(mercury(), 2.0);
    let business = BASELINE + avg * 2.0 + modality.score as f64 * 2.0;
    let communication = BASELINE + avg * 2.0 + weighted_sum(mercury(), 3.0);
    // Asymmetric: a negative mean lifts the score too.
    let conflict_resolution = if avg < 0.0 {
        BASELINE - avg * 2.0
    } else {
        BASELINE + avg * 2.0
    };

    CategoryScores {
        romance: normalize(romance),
        friendship: normalize(friendship),
        business: normalize(business),
        communication: normalize(communication),
        conflict_resolution: normalize(conflict_resolution),
    }
}
