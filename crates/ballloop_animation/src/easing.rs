//! Easing functions for ball motion

/// Sampled "ease-out-in" curve as `(threshold, value)` pairs.
///
/// Fast start, nearly flat middle, fast end. The samples were fitted by hand
/// against the intended motion and have no closed form; keep them verbatim.
const EASE_OUT_IN_SAMPLES: [(f32, f32); 35] = [
    (0.0, 0.0),
    (0.01, 0.06),
    (0.02, 0.09),
    (0.03, 0.14),
    (0.05, 0.20),
    (0.07, 0.25),
    (0.1, 0.31),
    (0.15, 0.39),
    (0.2, 0.43),
    (0.25, 0.47),
    (0.3, 0.48),
    (0.32, 0.486),
    (0.35, 0.492),
    (0.38, 0.496),
    (0.40, 0.4975),
    (0.45, 0.50),
    (0.50, 0.50),
    (0.55, 0.50),
    (0.60, 0.51),
    (0.65, 0.51),
    (0.70, 0.52),
    (0.75, 0.55),
    (0.80, 0.572),
    (0.83, 0.599),
    (0.85, 0.63),
    (0.88, 0.6625),
    (0.90, 0.7),
    (0.93, 0.77),
    (0.94, 0.79),
    (0.95, 0.81),
    (0.96, 0.841),
    (0.97, 0.875),
    (0.98, 0.911),
    (0.99, 0.953),
    (1.0, 1.0),
];

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Sampled ease-out, pause, ease-in curve used for track traversal
    EaseOutIn,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOutIn => ease_out_in(t),
        }
    }
}

/// Step lookup into the sampled ease-out-in curve.
///
/// Returns the value of the first sample whose threshold is strictly greater
/// than `progress`, or 1.0 past the last sample. Input is clamped to [0, 1]
/// and `0.0` maps to exactly `0.0`.
pub fn ease_out_in(progress: f32) -> f32 {
    if progress.is_nan() || progress <= 0.0 {
        return 0.0;
    }
    let progress = progress.min(1.0);

    EASE_OUT_IN_SAMPLES
        .iter()
        .find(|(threshold, _)| progress < *threshold)
        .map(|(_, value)| *value)
        .unwrap_or(1.0)
}
