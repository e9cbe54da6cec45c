//! Boundary with whatever produces natal charts. The scoring engine trusts
//! its input; providers are where charts get checked.

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use super::*;

/// Source of already-generated natal charts.
pub trait ChartProvider: Send + Sync {
    fn chart(&self, source: &Path) -> Result<Chart>;
}

/// Loads charts from JSON documents as written by the chart generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonChartProvider;

impl JsonChartProvider {
    pub fn new() -> Self {
        JsonChartProvider
    }

    /// Parse and check a chart held in memory.
    pub fn parse(&self, json: &str) -> Result<Chart> {
        let chart: Chart = serde_json::from_str(json)?;
        validate_chart(&chart)?;
        Ok(chart)
    }
}

impl ChartProvider for JsonChartProvider {
    fn chart(&self, source: &Path) -> Result<Chart> {
        let json = fs::read_to_string(source).map_err(|source_err| AstrologyError::Io {
            path: source.display().to_string(),
            source: source_err,
        })?;
        let chart = self.parse(&json)?;
        info!(
            path = %source.display(),
            name = %chart.name,
            planets = chart.planets.len(),
            "chart loaded"
        );
        Ok(chart)
    }
}

fn check_weights<K: fmt::Display>(
    name: &str,
    kind: &str,
    weights: &BTreeMap<K, f64>,
) -> Result<()> {
    for (key, weight) in weights {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(AstrologyError::InvalidChart(format!(
                "{}: {} weight for {} is {}, expected a non-negative number",
                name, kind, key, weight
            )));
        }
    }
    if !weights.is_empty() && weights.values().all(|w| *w == 0.0) {
        warn!(chart = %name, kind, "all distribution weights are zero");
    }
    Ok(())
}

/// Checks the parts of the chart contract serde cannot express on its own.
/// House range, MBTI letters and Enneagram range are enforced while decoding.
pub fn validate_chart(chart: &Chart) -> Result<()> {
    if chart.name.trim().is_empty() {
        return Err(AstrologyError::InvalidChart("chart has no name".to_string()));
    }

    for (body, position) in &chart.planets {
        if !(0.0..360.0).contains(&position.degree) {
            return Err(AstrologyError::InvalidChart(format!(
                "{}: {} at {} lies outside [0, 360)",
                chart.name, body, position.degree
            )));
        }
        let derived = ZodiacSign::from_longitude(position.degree);
        if derived != position.sign {
            warn!(
                chart = %chart.name,
                %body,
                degree = position.degree,
                sign = %position.sign,
                expected = %derived,
                "sign does not match longitude"
            );
        }
    }

    if let Some(rising) = chart.rising() {
        if !(0.0..360.0).contains(&rising.degree) {
            return Err(AstrologyError::InvalidChart(format!(
                "{}: ascendant at {} lies outside [0, 360)",
                chart.name, rising.degree
            )));
        }
    }

    check_weights(&chart.name, "element", &chart.element_distribution)?;
    check_weights(&chart.name, "modality", &chart.modality_distribution)?;

    if let Some(birth) = &chart.birth_data {
        birth.validate()?;
    } else {
        debug!(chart = %chart.name, "chart carries no birth data");
    }

    Ok(())
}
