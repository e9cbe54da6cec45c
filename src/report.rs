//! Plain-text projections of a compatibility result and of a single chart.

use super::*;

const WIDTH: usize = 80;
const BLOCK: &str = "█";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Most significant aspects listed in the synastry section.
    pub aspect_limit: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions { aspect_limit: 10 }
    }
}

/// Headline rating for an overall score, same buckets as the outlook.
pub fn rating(overall: f64) -> &'static str {
    if overall >= 75.0 {
        "EXCELLENT - Highly Compatible"
    } else if overall >= 60.0 {
        "GOOD - Strong Potential"
    } else if overall >= 45.0 {
        "MODERATE - Requires Effort"
    } else {
        "CHALLENGING - Significant Work Needed"
    }
}

fn bar(value: f64, per_block: f64) -> String {
    BLOCK.repeat((value / per_block).max(0.0) as usize)
}

struct Lines(Vec<String>);

impl Lines {
    fn new() -> Self {
        Lines(Vec::new())
    }

    fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    fn banner(&mut self) {
        self.push("=".repeat(WIDTH));
    }

    fn section(&mut self, title: &str) {
        self.push(String::new());
        self.push("-".repeat(WIDTH));
        self.push(title);
        self.push("-".repeat(WIDTH));
    }

    fn pairing(&mut self, heading: &str, pairing: &PairingScore) {
        self.push(String::new());
        self.push(format!("{}: {}", heading, pairing.label));
        self.push(format!("Score: {}/10", pairing.score));
        self.push(pairing.interpretation.as_str());
    }

    fn numbered(&mut self, items: &[String]) {
        for (i, item) in items.iter().enumerate() {
            self.push(format!("{}. {}", i + 1, item));
        }
    }

    fn finish(self) -> String {
        self.0.join("\n")
    }
}

pub fn render_compatibility_report(
    result: &CompatibilityResult,
    options: &ReportOptions,
) -> String {
    let mut out = Lines::new();

    out.banner();
    out.push("RELATIONSHIP COMPATIBILITY ANALYSIS");
    out.push(format!(
        "{} & {}",
        result.name1.to_uppercase(),
        result.name2.to_uppercase()
    ));
    out.banner();

    out.push(String::new());
    out.push(format!("OVERALL COMPATIBILITY SCORE: {:.1}/100", result.overall_score));
    out.push(format!("Rating: {}", rating(result.overall_score)));

    out.section("COMPATIBILITY BY CATEGORY");
    for (category, score) in result.category_scores.iter() {
        out.push(format!("{:20} | {:5.1}/100 {}", category, score, bar(score, 5.0)));
    }

    out.section("ELEMENT & MODALITY COMPATIBILITY");
    out.pairing("Elements", &result.element_compatibility);
    out.pairing("Modalities", &result.modality_compatibility);

    out.section("PERSONALITY TYPE COMPATIBILITY");
    out.pairing("MBTI", &result.mbti_compatibility.pairing);
    out.pairing("Enneagram", &result.enneagram_compatibility);

    out.section("KEY SYNASTRY ASPECTS");
    if result.aspects.is_empty() {
        out.push("No major aspects found within standard orbs");
    }
    for aspect in result.aspects.iter().take(options.aspect_limit) {
        out.push(format!(
            "{:25} {:12} {:25} [{:+}]",
            possessive(&result.name1, aspect.planet1),
            aspect.aspect.to_string().to_uppercase(),
            possessive(&result.name2, aspect.planet2),
            aspect.score
        ));
    }

    out.section("RELATIONSHIP STRENGTHS");
    out.numbered(&result.strengths);

    out.section("RELATIONSHIP CHALLENGES");
    out.numbered(&result.challenges);

    out.section("RELATIONSHIP OUTLOOK");
    out.push(String::new());
    out.push("Best Case Scenario:");
    out.push(format!("  {}", result.predictions.best_case));
    out.push(String::new());
    out.push("Worst Case Scenario:");
    out.push(format!("  {}", result.predictions.worst_case));

    out.push(String::new());
    out.banner();
    out.finish()
}

fn house_label(house: Option<House>) -> String {
    house.map_or_else(|| "Unknown".to_string(), |h| h.to_string())
}

/// Degree inside the sign, as charts are usually read.
fn sign_degree(longitude: f64) -> f64 {
    longitude.rem_euclid(30.0)
}

fn distribution<K: Copy + Ord + fmt::Display>(
    out: &mut Lines,
    heading: &str,
    keys: &[K],
    weights: &BTreeMap<K, f64>,
) {
    out.push(String::new());
    out.push(heading);
    for key in keys {
        let weight = weights.get(key).copied().unwrap_or(0.0);
        out.push(format!("  {:8} | {:5.1} {}", key, weight, bar(weight, 2.0)));
    }
}

fn optional<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "Unknown".to_string(), |v| v.to_string())
}

pub fn render_chart_report(chart: &Chart) -> String {
    let mut out = Lines::new();

    out.banner();
    out.push(format!("NATAL CHART ANALYSIS: {}", chart.name.to_uppercase()));
    out.banner();

    if let Some(birth) = &chart.birth_data {
        out.push(String::new());
        out.push(format!("Birth Date: {} at {}", birth.date, birth.time));
        if let Some(location) = &birth.location {
            out.push(format!("Location: {}", location));
        }
        out.push(format!("Timezone: {}", birth.timezone));
    }

    out.section("THE BIG THREE");
    for body in [CelestialBody::Sun, CelestialBody::Moon] {
        match chart.planet(body) {
            Some(position) => out.push(format!(
                "{}: {} {:.2}° (House {})",
                body,
                position.sign,
                sign_degree(position.degree),
                house_label(position.house)
            )),
            None => out.push(format!("{}: not in chart", body)),
        }
    }
    match chart.rising() {
        Some(rising) => out.push(format!(
            "Rising (Ascendant): {} {:.2}°",
            rising.sign,
            sign_degree(rising.degree)
        )),
        None => out.push("Rising (Ascendant): Unknown"),
    }

    out.section("PLANETARY POSITIONS");
    for (body, position) in &chart.planets {
        let retro = if position.retrograde { " ℞" } else { "" };
        out.push(format!(
            "{:12} | {:12} {:6.2}° | House {}{}",
            body,
            position.sign,
            sign_degree(position.degree),
            house_label(position.house),
            retro
        ));
    }

    out.section("ELEMENT & MODALITY DISTRIBUTION");
    distribution(&mut out, "Elements:", &Element::ALL, &chart.element_distribution);
    distribution(&mut out, "Modalities:", &Modality::ALL, &chart.modality_distribution);

    out.section("CHART DOMINANTS");
    out.push(format!("Dominant Element: {}", chart.dominants.element));
    out.push(format!("Dominant Modality: {}", chart.dominants.modality));
    out.push(format!("Dominant Sign: {}", optional(&chart.dominants.sign)));
    out.push(format!("Dominant Planet: {}", optional(&chart.dominants.planet)));

    if !chart.stelliums.is_empty() {
        out.section("STELLIUMS (3+ planets)");
        for stellium in &chart.stelliums {
            out.push(format!(
                "{} ({} planets): {}",
                stellium.location,
                stellium.planets.len(),
                stellium.planets.join(", ")
            ));
        }
    }

    out.section("PERSONALITY TYPE INFERENCES");
    out.push(format!("MBTI (inferred): {}", chart.mbti));
    out.push(format!(
        "Enneagram (inferred): Type {} (likely {})",
        chart.enneagram.kind, chart.enneagram.wing
    ));

    out.push(String::new());
    out.banner();
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(name: &str, planets: &[(CelestialBody, f64)]) -> Chart {
        Chart {
            name: name.to_string(),
            birth_data: None,
            big_three: None,
            planets: planets
                .iter()
                .map(|(body, degree)| (*body, PlanetPosition::new(*degree)))
                .collect(),
            element_distribution: BTreeMap::new(),
            modality_distribution: BTreeMap::new(),
            stelliums: Vec::new(),
            dominants: Dominants {
                element: Element::Air,
                modality: Modality::Mutable,
                sign: None,
                planet: None,
            },
            mbti: "ENFP".parse().unwrap(),
            enneagram: EnneagramProfile {
                kind: EnneagramType::new(7).unwrap(),
                wing: "7w6".to_string(),
            },
        }
    }

    fn aspect_lines(report: &str) -> Vec<&str> {
        report
            .lines()
            .skip_while(|line| *line != "KEY SYNASTRY ASPECTS")
            .skip(2)
            .take_while(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn rating_buckets() {
        assert_eq!(rating(75.0), "EXCELLENT - Highly Compatible");
        assert_eq!(rating(60.0), "GOOD - Strong Potential");
        assert_eq!(rating(45.0), "MODERATE - Requires Effort");
        assert_eq!(rating(44.9), "CHALLENGING - Significant Work Needed");
    }

    #[test]
    fn aspect_section_respects_limit() {
        use CelestialBody::*;
        let bodies = [Sun, Moon, Mercury, Venus, Mars];
        let a = chart("Ana", &bodies.map(|b| (b, 10.0)));
        let b = chart("Rui", &bodies.map(|b| (b, 130.0)));
        let result = analyze_compatibility(&a, &b);
        assert_eq!(result.aspects.len(), 25);

        let report = render_compatibility_report(&result, &ReportOptions::default());
        let lines = aspect_lines(&report);
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("Ana's Sun"));
        assert!(lines[0].contains("TRINE"));
        assert!(lines[0].ends_with("[+8]"));

        let short = render_compatibility_report(&result, &ReportOptions { aspect_limit: 3 });
        assert_eq!(aspect_lines(&short).len(), 3);
    }

    #[test]
    fn no_aspects_line() {
        let a = chart("Ana", &[(CelestialBody::Jupiter, 10.0)]);
        let b = chart("Rui", &[(CelestialBody::Saturn, 10.0)]);
        let result = analyze_compatibility(&a, &b);
        let report = render_compatibility_report(&result, &ReportOptions::default());
        assert_eq!(aspect_lines(&report), vec!["No major aspects found within standard orbs"]);
        assert!(report.contains("ANA & RUI"));
        assert!(report.contains("Business             |  62.0/100"));
    }

    #[test]
    fn chart_report_marks_retrograde() {
        let mut natal = chart("Ana", &[(CelestialBody::Sun, 45.5), (CelestialBody::Mercury, 50.0)]);
        if let Some(mercury) = natal.planets.get_mut(&CelestialBody::Mercury) {
            mercury.retrograde = true;
            mercury.house = House::from_index(3);
        }
        let report = render_chart_report(&natal);
        assert!(report.contains("NATAL CHART ANALYSIS: ANA"));
        assert!(report.contains("Sun: Taurus 15.50° (House Unknown)"));
        assert!(report.contains("Mercury      | Taurus        20.00° | House 3 ℞"));
        assert!(report.contains("Moon: not in chart"));
        assert!(report.contains("Rising (Ascendant): Unknown"));

        natal.big_three = Some(BigThree {
            rising: Some(Ascendant {
                sign: ZodiacSign::Scorpio,
                degree: 224.73,
            }),
        });
        let report = render_chart_report(&natal);
        assert!(report.contains("Rising (Ascendant): Scorpio 14.73°"));
        assert!(report.contains("Enneagram (inferred): Type 7 (likely 7w6)"));
        assert!(!report.contains("STELLIUMS"));
    }
}
