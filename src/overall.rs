use super::*;

// Weights of the overall score; they sum to 1.0.
pub const ASPECT_WEIGHT: f64 = 0.30;
pub const ELEMENT_WEIGHT: f64 = 0.15;
pub const MODALITY_WEIGHT: f64 = 0.10;
pub const MBTI_WEIGHT: f64 = 0.15;
pub const ENNEAGRAM_WEIGHT: f64 = 0.10;
pub const CATEGORY_WEIGHT: f64 = 0.20;

/// Pairing scores live on 0–10, everything else on 0–100.
const PAIRING_SCALE: f64 = 10.0;

/// Lowest valence an aspect can carry (square).
const ASPECT_SCORE_FLOOR: f64 = 6.0;
const ASPECT_SCORE_SPAN: f64 = 12.0;

/// Mean valence over the aspect sequence, 0 when there are none.
pub fn mean_aspect_score(aspects: &[AspectInfo]) -> f64 {
    if aspects.is_empty() {
        return 0.0;
    }
    aspects.iter().map(|a| a.score as f64).sum::<f64>() / aspects.len() as f64
}

/// Mean valence shifted and scaled onto 0–100. A mean above +6 lands above
/// 100; the final clamp takes care of it.
pub fn normalized_aspect_score(aspects: &[AspectInfo]) -> f64 {
    (mean_aspect_score(aspects) + ASPECT_SCORE_FLOOR) / ASPECT_SCORE_SPAN * 100.0
}

/// Rounds to one decimal from the exact binary value rather than from `value * 10`.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Weighted overall score clamped to `[0, 100]`, not yet rounded.
pub fn calculate_overall_score(
    aspects: &[AspectInfo],
    element: &PairingScore,
    modality: &PairingScore,
    mbti: &MbtiPairing,
    enneagram: &PairingScore,
    categories: &CategoryScores,
) -> f64 {
    let overall = normalized_aspect_score(aspects) * ASPECT_WEIGHT
        + element.score as f64 * PAIRING_SCALE * ELEMENT_WEIGHT
        + modality.score as f64 * PAIRING_SCALE * MODALITY_WEIGHT
        + mbti.pairing.score as f64 * PAIRING_SCALE * MBTI_WEIGHT
        + enneagram.score as f64 * PAIRING_SCALE * ENNEAGRAM_WEIGHT
        + categories.mean() * CATEGORY_WEIGHT;

    overall.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pairing(score: u8) -> PairingScore {
        PairingScore {
            label: String::new(),
            score,
            interpretation: String::new(),
        }
    }

    fn mbti(score: u8) -> MbtiPairing {
        MbtiPairing {
            pairing: pairing(score),
            differences: 0,
        }
    }

    fn trine() -> AspectInfo {
        AspectInfo {
            aspect: Aspect::Trine,
            planet1: CelestialBody::Sun,
            planet2: CelestialBody::Moon,
            orb: 0.0,
            score: 8,
            sign1: ZodiacSign::Aries,
            sign2: ZodiacSign::Leo,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total = ASPECT_WEIGHT
            + ELEMENT_WEIGHT
            + MODALITY_WEIGHT
            + MBTI_WEIGHT
            + ENNEAGRAM_WEIGHT
            + CATEGORY_WEIGHT;
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_aspects_use_mid_point() {
        assert_relative_eq!(mean_aspect_score(&[]), 0.0);
        assert_relative_eq!(normalized_aspect_score(&[]), 50.0);
    }

    #[test]
    fn non_aspect_terms_only() {
        let categories = CategoryScores {
            romance: 50.0,
            friendship: 50.0,
            business: 62.0,
            communication: 50.0,
            conflict_resolution: 50.0,
        };
        // 15 + 10.5 + 6 + 9 + 6 + 10.48
        let score = calculate_overall_score(
            &[],
            &pairing(7),
            &pairing(6),
            &mbti(6),
            &pairing(6),
            &categories,
        );
        assert_relative_eq!(score, 56.98, epsilon = 1e-9);
        assert_relative_eq!(round_to_tenth(score), 57.0);
    }

    #[test]
    fn all_trines_overshoot_then_clamp() {
        let aspects = vec![trine(); 3];
        assert_relative_eq!(normalized_aspect_score(&aspects), 1400.0 / 12.0, epsilon = 1e-9);
        let categories = CategoryScores {
            romance: 100.0,
            friendship: 100.0,
            business: 100.0,
            communication: 100.0,
            conflict_resolution: 100.0,
        };
        let score = calculate_overall_score(
            &aspects,
            &pairing(10),
            &pairing(10),
            &mbti(10),
            &pairing(10),
            &categories,
        );
        assert_relative_eq!(score, 100.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_relative_eq!(round_to_tenth(57.04), 57.0);
        assert_relative_eq!(round_to_tenth(57.06), 57.1);
        assert_relative_eq!(round_to_tenth(74.98), 75.0);
    }

    #[test]
    fn rounding_follows_the_stored_binary_value() {
        // 61.65 is stored just below the tie; scaling by ten first rounds up.
        assert!((61.65_f64 * 10.0).round() / 10.0 > 61.65);
        assert_eq!(round_to_tenth(61.65), 61.6);
    }
}
