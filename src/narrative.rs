use serde::{Deserialize, Serialize};

use super::*;

/// Cap on both the strength and challenge lists.
const MAX_NOTES: usize = 5;
/// Aspects per side that get a line of their own.
const HIGHLIGHTED_ASPECTS: usize = 3;
/// Positive aspects needed before the generic harmony line is added.
const HARMONY_THRESHOLD: usize = 5;

const STRONG_CATEGORY: f64 = 70.0;
const WEAK_CATEGORY: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predictions {
    pub best_case: String,
    pub worst_case: String,
}

fn aspect_line(
    name1: &str,
    name2: &str,
    aspect: &AspectInfo,
    verb: &str,
    reading: &str,
) -> String {
    format!(
        "{} {} {} - {}",
        possessive(name1, aspect.planet1),
        verb,
        possessive(name2, aspect.planet2),
        reading
    )
}

pub fn identify_strengths(
    name1: &str,
    name2: &str,
    aspects: &[AspectInfo],
    categories: &CategoryScores,
) -> Vec<String> {
    let positive: Vec<&AspectInfo> = aspects.iter().filter(|a| a.score > 0).collect();
    let mut strengths = Vec::new();

    if positive.len() >= HARMONY_THRESHOLD {
        strengths.push("Multiple harmonious planetary connections".to_string());
    }

    // Conjunctions count as positive but carry no line of their own.
    for aspect in positive.iter().take(HIGHLIGHTED_ASPECTS) {
        match aspect.aspect {
            Aspect::Trine => {
                strengths.push(aspect_line(name1, name2, aspect, "trine", "Natural flow and ease"))
            }
            Aspect::Sextile => strengths.push(aspect_line(
                name1,
                name2,
                aspect,
                "sextile",
                "Opportunities for growth",
            )),
            _ => {}
        }
    }

    if categories.romance >= STRONG_CATEGORY {
        strengths.push("Strong romantic chemistry and attraction".to_string());
    }
    if categories.communication >= STRONG_CATEGORY {
        strengths.push("Excellent communication and understanding".to_string());
    }
    if categories.friendship >= STRONG_CATEGORY {
        strengths.push("Solid foundation of friendship and mutual respect".to_string());
    }

    strengths.truncate(MAX_NOTES);
    strengths
}

pub fn identify_challenges(
    name1: &str,
    name2: &str,
    aspects: &[AspectInfo],
    categories: &CategoryScores,
) -> Vec<String> {
    let mut challenges = Vec::new();

    for aspect in aspects.iter().filter(|a| a.score < 0).take(HIGHLIGHTED_ASPECTS) {
        match aspect.aspect {
            Aspect::Square => challenges.push(aspect_line(
                name1,
                name2,
                aspect,
                "square",
                "Requires conscious effort to harmonize",
            )),
            Aspect::Opposition => challenges.push(aspect_line(
                name1,
                name2,
                aspect,
                "opposite",
                "Need to balance opposing needs",
            )),
            _ => {}
        }
    }

    if categories.communication < WEAK_CATEGORY {
        challenges.push("Communication styles may differ significantly".to_string());
    }
    if categories.conflict_resolution < WEAK_CATEGORY {
        challenges.push("Conflict resolution requires patience and effort".to_string());
    }

    if challenges.is_empty() {
        challenges
            .push("No major astrological challenges - focus on personal growth areas".to_string());
    }

    challenges.truncate(MAX_NOTES);
    challenges
}

/// Best/worst-case outlook for an overall score. Bucket lower bounds are inclusive.
pub fn generate_predictions(overall: f64) -> Predictions {
    let (best_case, worst_case) = if overall >= 75.0 {
        (
            "Deeply fulfilling partnership with natural harmony, mutual growth, and lasting connection",
            "Risk of complacency or taking the relationship for granted",
        )
    } else if overall >= 60.0 {
        (
            "Strong partnership with good potential for long-term success through mutual effort",
            "Occasional friction that requires active communication and compromise",
        )
    } else if overall >= 45.0 {
        (
            "Relationship can work with significant conscious effort and commitment from both parties",
            "Recurring challenges may lead to frustration without strong foundation",
        )
    } else {
        (
            "Opportunity for significant personal growth through navigating differences",
            "Fundamental differences may create persistent tension and difficulty",
        )
    };

    Predictions {
        best_case: best_case.to_string(),
        worst_case: worst_case.to_string(),
    }
}
