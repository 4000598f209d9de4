//! Bounded, step-quantized generation parameters.
//!
//! The [`ParameterStore`] owns the three tunable values sent with every
//! generation request. It is the only place where values are clamped and
//! snapped to their step grid; slider controls forward whatever the user
//! proposes and rely on [`ParameterStore::set`] to correct it.

use super::GenerationRequest;

/// Identifies one of the tunable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamId {
    /// Sampling temperature.
    #[default]
    Temperature,
    /// Number of highest-probability tokens considered at each step.
    TopK,
    /// Upper bound on generated tokens.
    MaxTokens,
}

impl ParamId {
    /// Returns all parameters in display order.
    #[must_use]
    pub const fn all() -> &'static [ParamId] {
        &[ParamId::Temperature, ParamId::TopK, ParamId::MaxTokens]
    }

    /// Position of this parameter in [`ParamId::all`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Temperature => 0,
            Self::TopK => 1,
            Self::MaxTokens => 2,
        }
    }

    /// Returns the next parameter, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Temperature => Self::TopK,
            Self::TopK => Self::MaxTokens,
            Self::MaxTokens => Self::Temperature,
        }
    }

    /// Returns the previous parameter, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Temperature => Self::MaxTokens,
            Self::TopK => Self::Temperature,
            Self::MaxTokens => Self::TopK,
        }
    }

    /// Returns the hard-coded bounds and default for this parameter.
    #[must_use]
    pub const fn spec(self) -> ParamSpec {
        match self {
            Self::Temperature => ParamSpec {
                label: "Temperature",
                description: "Higher values produce more surprising text",
                min: 0.1,
                max: 2.0,
                step: 0.1,
                precision: 1,
                default: 1.0,
            },
            Self::TopK => ParamSpec {
                label: "Top-k",
                description: "Sample only from the k most likely characters",
                min: 1.0,
                max: 100.0,
                step: 1.0,
                precision: 0,
                default: 40.0,
            },
            Self::MaxTokens => ParamSpec {
                label: "Max tokens",
                description: "Length of the generated text",
                min: 10.0,
                max: 500.0,
                step: 10.0,
                precision: 0,
                default: 200.0,
            },
        }
    }
}

/// Static bounds of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub label: &'static str,
    pub description: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Number of decimal places shown and kept after snapping.
    pub precision: u32,
    pub default: f64,
}

impl ParamSpec {
    /// Clamps `raw` into `[min, max]` and snaps it to the step grid anchored at `min`.
    ///
    /// Returns `None` for NaN, which has no meaningful position on the grid.
    #[must_use]
    pub fn correct(&self, raw: f64) -> Option<f64> {
        if raw.is_nan() {
            return None;
        }
        let clamped = raw.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let mut snapped = self.round(self.min + steps * self.step);
        // A max that is off-grid can be overshot by rounding up.
        if snapped > self.max {
            snapped = self.round(snapped - self.step);
        }
        Some(snapped)
    }

    /// Rounds to `precision` decimal places to drop floating-point noise.
    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(i32::try_from(self.precision).unwrap_or(0));
        (value * scale).round() / scale
    }

    /// Formats a value with this parameter's precision.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.precision as usize)
    }
}

/// A single bounded parameter and its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub id: ParamId,
    spec: ParamSpec,
    value: f64,
}

impl Parameter {
    /// Creates a parameter holding its default value.
    #[must_use]
    pub const fn new(id: ParamId) -> Self {
        let spec = id.spec();
        Self {
            id,
            spec,
            value: spec.default,
        }
    }

    /// Returns the parameter bounds.
    #[must_use]
    pub const fn spec(&self) -> &ParamSpec {
        &self.spec
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Stores `raw` after clamping and snapping. Returns the stored value.
    pub fn set(&mut self, raw: f64) -> f64 {
        if let Some(value) = self.spec.correct(raw) {
            self.value = value;
        }
        self.value
    }
}

/// The three generation parameters, alive for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    params: [Parameter; 3],
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self {
            params: [
                Parameter::new(ParamId::Temperature),
                Parameter::new(ParamId::TopK),
                Parameter::new(ParamId::MaxTokens),
            ],
        }
    }
}

impl ParameterStore {
    /// Creates a store with every parameter at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `id`.
    #[must_use]
    pub fn get(&self, id: ParamId) -> f64 {
        self.params[id.index()].value()
    }

    /// Clamps and snaps `raw`, then stores it under `id`. Returns the stored value.
    pub fn set(&mut self, id: ParamId, raw: f64) -> f64 {
        self.params[id.index()].set(raw)
    }

    /// Returns the parameter record for `id`.
    #[must_use]
    pub fn param(&self, id: ParamId) -> &Parameter {
        &self.params[id.index()]
    }

    /// Iterates over the parameters in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    /// Builds the immutable request snapshot from the current values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Values are clamped to small positive ranges.
    pub fn snapshot(&self) -> GenerationRequest {
        GenerationRequest {
            temperature: self.get(ParamId::Temperature),
            top_k: self.get(ParamId::TopK).round() as u32,
            max_tokens: self.get(ParamId::MaxTokens).round() as u32,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn on_grid(id: ParamId, value: f64) -> bool {
        let spec = id.spec();
        let steps = (value - spec.min) / spec.step;
        (steps - steps.round()).abs() < 1e-9
    }

    #[test]
    fn defaults_match_hard_coded_values() {
        let store = ParameterStore::new();
        assert!((store.get(ParamId::Temperature) - 1.0).abs() < f64::EPSILON);
        assert!((store.get(ParamId::TopK) - 40.0).abs() < f64::EPSILON);
        assert!((store.get(ParamId::MaxTokens) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn below_min_clamps_to_min() {
        let mut store = ParameterStore::new();
        for &id in ParamId::all() {
            let min = id.spec().min;
            assert_eq!(store.set(id, min - 1000.0), min, "{id:?}");
            assert_eq!(store.get(id), min, "{id:?}");
        }
    }

    #[test]
    fn above_max_clamps_to_max() {
        let mut store = ParameterStore::new();
        for &id in ParamId::all() {
            let max = id.spec().max;
            assert_eq!(store.set(id, max + 1000.0), max, "{id:?}");
            assert_eq!(store.set(id, f64::INFINITY), max, "{id:?}");
        }
    }

    #[test]
    fn stored_values_lie_on_step_grid() {
        let mut store = ParameterStore::new();
        for &id in ParamId::all() {
            let spec = id.spec();
            let span = spec.max - spec.min;
            for i in 0..=200 {
                let raw = spec.min + span * f64::from(i) / 173.0;
                let value = store.set(id, raw);
                assert!(on_grid(id, value), "{id:?}: {raw} stored as {value}");
                assert!(value >= spec.min && value <= spec.max);
            }
        }
    }

    #[test]
    fn snapping_picks_nearest_step() {
        let mut store = ParameterStore::new();
        assert_eq!(store.set(ParamId::MaxTokens, 214.0), 210.0);
        assert_eq!(store.set(ParamId::MaxTokens, 216.0), 220.0);
        assert_eq!(store.set(ParamId::TopK, 7.4), 7.0);
        assert_eq!(store.set(ParamId::Temperature, 0.74), 0.7);
    }

    #[test]
    fn temperature_has_no_float_noise() {
        let mut store = ParameterStore::new();
        // 0.1 + 9 * 0.1 is 1.0000000000000002 without rounding.
        assert_eq!(store.set(ParamId::Temperature, 1.0), 1.0);
        assert_eq!(store.set(ParamId::Temperature, 0.30000000000000004), 0.3);
    }

    #[test]
    fn nan_leaves_value_unchanged() {
        let mut store = ParameterStore::new();
        store.set(ParamId::TopK, 12.0);
        assert_eq!(store.set(ParamId::TopK, f64::NAN), 12.0);
    }

    #[test]
    fn snapshot_reflects_current_values() {
        let mut store = ParameterStore::new();
        store.set(ParamId::Temperature, 0.5);
        store.set(ParamId::TopK, 3.0);
        store.set(ParamId::MaxTokens, 30.0);
        let request = store.snapshot();
        assert_eq!(request.temperature, 0.5);
        assert_eq!(request.top_k, 3);
        assert_eq!(request.max_tokens, 30);
    }

    #[test]
    fn off_grid_max_is_not_exceeded() {
        let spec = ParamSpec {
            label: "x",
            description: "",
            min: 0.0,
            max: 25.0,
            step: 10.0,
            precision: 0,
            default: 0.0,
        };
        assert_eq!(spec.correct(25.0), Some(20.0));
    }

    #[test]
    fn focus_cycles_through_all_params() {
        assert_eq!(ParamId::Temperature.next(), ParamId::TopK);
        assert_eq!(ParamId::MaxTokens.next(), ParamId::Temperature);
        assert_eq!(ParamId::Temperature.prev(), ParamId::MaxTokens);
    }

    #[test]
    fn format_uses_precision() {
        assert_eq!(ParamId::Temperature.spec().format(1.0), "1.0");
        assert_eq!(ParamId::TopK.spec().format(40.0), "40");
    }
}
