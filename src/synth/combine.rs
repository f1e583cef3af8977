//! Fixed-order combination of the variation models.

use crate::error::Error;
use crate::series::SampleSeries;
use crate::synth::{
    apply_depth_variation, apply_duration_variation, apply_timing_variation, DepthVariation,
    DurationVariation, TimingVariation,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Variation kinds in the order [`combine`] applies them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationKind {
    Timing,
    Duration,
    Depth,
}

/// Optional variation stack for one generated curve.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CombineSpec {
    #[serde(default)]
    pub timing: Option<TimingVariation>,
    #[serde(default)]
    pub duration: Option<DurationVariation>,
    #[serde(default)]
    pub depth: Option<DepthVariation>,
}

impl CombineSpec {
    /// True when no variation is configured.
    pub fn is_empty(&self) -> bool {
        self.timing.is_none() && self.duration.is_none() && self.depth.is_none()
    }
}

/// Apply the configured variations in the fixed order timing → duration →
/// depth, returning the final series and the kinds actually applied.
///
/// An empty spec returns the input unchanged with an empty applied list.
pub fn combine(
    series: &SampleSeries,
    spec: &CombineSpec,
) -> Result<(SampleSeries, Vec<VariationKind>), Error> {
    let mut current = series.clone();
    let mut applied = Vec::new();

    if let Some(timing) = &spec.timing {
        current = apply_timing_variation(&current, timing)?;
        applied.push(VariationKind::Timing);
    }
    if let Some(duration) = &spec.duration {
        current = apply_duration_variation(&current, duration)?;
        applied.push(VariationKind::Duration);
    }
    if let Some(depth) = &spec.depth {
        current = apply_depth_variation(&current, depth)?;
        applied.push(VariationKind::Depth);
    }
    debug!("combine: applied {:?}", applied);

    Ok((current, applied))
}
