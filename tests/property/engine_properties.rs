use aztro_synastry::{
    analyze_compatibility, angular_separation, find_aspects, Chart, Dominants, Element,
    EnneagramProfile, EnneagramType, Modality, PlanetPosition, RELATIONSHIP_PLANETS,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

const MBTI_CODES: [&str; 6] = ["INTJ", "ENFP", "ISTP", "ESFJ", "INFJ", "ESTP"];

fn arb_chart() -> impl Strategy<Value = Chart> {
    (
        proptest::collection::vec(proptest::option::of(0.0f64..360.0), 5),
        0usize..4,
        0usize..3,
        0usize..MBTI_CODES.len(),
        1u8..=9,
    )
        .prop_map(|(degrees, element, modality, mbti, enneagram)| {
            let planets: BTreeMap<_, _> = RELATIONSHIP_PLANETS
                .iter()
                .zip(degrees)
                .filter_map(|(body, degree)| degree.map(|d| (*body, PlanetPosition::new(d))))
                .collect();
            Chart {
                name: "Prop".to_string(),
                birth_data: None,
                big_three: None,
                planets,
                element_distribution: BTreeMap::new(),
                modality_distribution: BTreeMap::new(),
                stelliums: Vec::new(),
                dominants: Dominants {
                    element: Element::ALL[element],
                    modality: Modality::ALL[modality],
                    sign: None,
                    planet: None,
                },
                mbti: MBTI_CODES[mbti].parse().unwrap(),
                enneagram: EnneagramProfile {
                    kind: EnneagramType::new(enneagram).unwrap(),
                    wing: format!("{}w{}", enneagram, enneagram % 9 + 1),
                },
            }
        })
}

proptest! {
    #[test]
    fn separation_is_symmetric_and_bounded(a in 0.0f64..360.0, b in 0.0f64..360.0) {
        let ab = angular_separation(a, b);
        prop_assert_eq!(ab, angular_separation(b, a));
        prop_assert!((0.0..=180.0).contains(&ab), "separation {} out of range", ab);
    }

    #[test]
    fn aspects_within_orb_and_sorted(chart1 in arb_chart(), chart2 in arb_chart()) {
        let aspects = find_aspects(&chart1, &chart2);
        for aspect in &aspects {
            prop_assert!(aspect.orb >= 0.0);
            prop_assert!(aspect.orb <= aspect.aspect.orb());
            prop_assert_eq!(aspect.score, aspect.aspect.score());
            prop_assert!(RELATIONSHIP_PLANETS.contains(&aspect.planet1));
            prop_assert!(RELATIONSHIP_PLANETS.contains(&aspect.planet2));
        }
        for pair in aspects.windows(2) {
            prop_assert!(pair[0].score.abs() >= pair[1].score.abs());
        }
    }

    #[test]
    fn scores_stay_in_range(chart1 in arb_chart(), chart2 in arb_chart()) {
        let result = analyze_compatibility(&chart1, &chart2);
        prop_assert!((0.0..=100.0).contains(&result.overall_score));
        prop_assert_eq!(result.overall_score, (result.overall_score * 10.0).round() / 10.0);
        for (category, score) in result.category_scores.iter() {
            prop_assert!((0.0..=100.0).contains(&score), "{} = {}", category, score);
        }
        prop_assert!(result.strengths.len() <= 5);
        prop_assert!((1..=5).contains(&result.challenges.len()));
    }

    #[test]
    fn analysis_is_deterministic(chart1 in arb_chart(), chart2 in arb_chart()) {
        let first = analyze_compatibility(&chart1, &chart2);
        let second = analyze_compatibility(&chart1, &chart2);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }
}
