//! Categorical compatibility: dominant element, dominant modality, MBTI and
//! Enneagram pairings. Every scorer is a fixed table lookup on a 0–10 scale.

use serde::{Deserialize, Serialize};

use super::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingScore {
    /// Headline such as `"Fire + Air"`.
    pub label: String,
    pub score: u8,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MbtiPairing {
    #[serde(flatten)]
    pub pairing: PairingScore,
    /// Axes on which the two codes disagree, 0–4.
    pub differences: u8,
}

// ---------------------------
// ## Element
// ---------------------------

/// Score used when an element pair is missing from the table.
pub const NEUTRAL_ELEMENT_SCORE: u8 = 5;

/// Keyed by the canonical (sorted) pair.
const ELEMENT_COMPATIBILITY: [((Element, Element), u8); 10] = [
    ((Element::Fire, Element::Fire), 7),
    ((Element::Fire, Element::Earth), 3),
    ((Element::Fire, Element::Air), 8),
    ((Element::Fire, Element::Water), 4),
    ((Element::Earth, Element::Earth), 7),
    ((Element::Earth, Element::Air), 3),
    ((Element::Earth, Element::Water), 8),
    ((Element::Air, Element::Air), 7),
    ((Element::Air, Element::Water), 4),
    ((Element::Water, Element::Water), 7),
];

fn canonical<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn element_score(element1: Element, element2: Element) -> u8 {
    let pair = canonical(element1, element2);
    ELEMENT_COMPATIBILITY
        .iter()
        .find(|(key, _)| *key == pair)
        .map(|(_, score)| *score)
        .unwrap_or(NEUTRAL_ELEMENT_SCORE)
}

fn interpret_element_pairing(element1: Element, element2: Element) -> String {
    use Element::*;

    if element1 == element2 {
        return format!("Both {} - Similar energy and approach to life", element1);
    }
    let text = if element1.is_active() && element2.is_active() {
        "Yang elements - Active, outgoing, mentally/spiritually focused"
    } else if !element1.is_active() && !element2.is_active() {
        "Yin elements - Receptive, grounded, physically/emotionally focused"
    } else {
        // Fire+Air and Earth+Water are already claimed by the yang/yin rules.
        match canonical(element1, element2) {
            (Fire, Air) => "Fire + Air - Highly compatible, stimulating and energizing",
            (Earth, Water) => "Earth + Water - Highly compatible, nurturing and stable",
            _ => "Complementary elements - Different approaches that can balance or clash",
        }
    };
    text.to_string()
}

pub fn calculate_element_compatibility(element1: Element, element2: Element) -> PairingScore {
    PairingScore {
        label: format!("{} + {}", element1, element2),
        score: element_score(element1, element2),
        interpretation: interpret_element_pairing(element1, element2),
    }
}

// ---------------------------
// ## Modality
// ---------------------------

pub fn calculate_modality_compatibility(modality1: Modality, modality2: Modality) -> PairingScore {
    use Modality::*;

    let (score, interpretation) = if modality1 == modality2 {
        (6, format!("Both {} - Similar pace and approach to change", modality1))
    } else {
        match canonical(modality1, modality2) {
            (Cardinal, Mutable) => (
                7,
                "Cardinal + Mutable - Initiative meets adaptability".to_string(),
            ),
            (Fixed, Mutable) => (6, "Fixed + Mutable - Stability meets flexibility".to_string()),
            _ => (5, "Cardinal + Fixed - Action meets resistance".to_string()),
        }
    };

    PairingScore {
        label: format!("{} + {}", modality1, modality2),
        score,
        interpretation,
    }
}

// ---------------------------
// ## MBTI
// ---------------------------

/// Score and reading by number of differing axes; four or more share the last row.
const MBTI_BY_DIFFERENCES: [(u8, &str); 5] = [
    (6, "Identical types - Deep understanding but may lack growth tension"),
    (7, "Very similar - Easy understanding with slight differences"),
    (8, "Complementary - Balanced similarities and differences"),
    (5, "Contrasting - Requires effort but can be rewarding"),
    (4, "Opposite types - Challenging but potentially transformative"),
];

pub fn analyze_mbti_pairing(mbti1: &MbtiType, mbti2: &MbtiType) -> MbtiPairing {
    let differences = mbti1.differences(mbti2);
    let row = differences.min(MBTI_BY_DIFFERENCES.len() - 1);
    let (score, interpretation) = MBTI_BY_DIFFERENCES[row];

    MbtiPairing {
        pairing: PairingScore {
            label: format!("{} + {}", mbti1, mbti2),
            score,
            interpretation: interpretation.to_string(),
        },
        differences: differences as u8,
    }
}

// ---------------------------
// ## Enneagram
// ---------------------------

/// Unordered type pairs that work well together, stored canonically.
const HARMONIOUS_ENNEAGRAM_PAIRS: [(u8, u8); 11] = [
    (1, 2),
    (1, 7),
    (2, 4),
    (2, 8),
    (3, 7),
    (3, 9),
    (4, 5),
    (4, 9),
    (5, 8),
    (6, 9),
    (7, 8),
];

pub fn is_harmonious_enneagram_pair(type1: EnneagramType, type2: EnneagramType) -> bool {
    let pair = canonical(type1.number(), type2.number());
    HARMONIOUS_ENNEAGRAM_PAIRS.contains(&pair)
}

pub fn analyze_enneagram_pairing(
    profile1: &EnneagramProfile,
    profile2: &EnneagramProfile,
) -> PairingScore {
    let (type1, type2) = (profile1.kind, profile2.kind);

    let (score, interpretation) = if type1 == type2 {
        (6, format!("Both Type {} - Deep understanding but may amplify weaknesses", type1))
    } else if is_harmonious_enneagram_pair(type1, type2) {
        (8, format!("Type {} + Type {} - Naturally complementary pairing", type1, type2))
    } else {
        (5, format!("Type {} + Type {} - Requires conscious effort", type1, type2))
    };

    PairingScore {
        label: format!("{} + {}", profile1.wing, profile2.wing),
        score,
        interpretation,
    }
}
