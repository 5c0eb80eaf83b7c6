//! Scene configuration.
//!
//! A scene is the label vocabulary, the motion constants shared by every
//! symbol, and the window it is shown in. Scenes serialize to JSON:
//!
//! ```json
//! {
//!   "labels": ["{}", "[]", "JS", "Git"],
//!   "seed": 7,
//!   "motion": { "speed": 80.0, "symbol_size": 36.0 },
//!   "window": { "title": "backdrop", "width": 1280, "height": 720 }
//! }
//! ```
//!
//! Every field is optional; missing ones take the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Upper bound on symbols in one scene. Collision resolution is O(n²).
pub const MAX_LABELS: usize = 64;

/// Largest accepted `max_jitter`, half a turn per tick.
pub const MAX_JITTER: f64 = std::f64::consts::PI;

/// Labels shown when a scene does not name its own.
pub const DEFAULT_LABELS: &[&str] = &[
    "{}", "[]", "JS", "Git", "AWS", "GO", "API", "fn", "ret", "try", "null", "<>", "===", "&&",
];

/// Motion constants shared by every symbol in a scene.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Magnitude of every symbol's velocity, in pixels per second of step time.
    pub speed: f64,
    /// Diameter of a symbol in pixels. Half of it is the collision radius.
    pub symbol_size: f64,
    /// Mass of every symbol. Uniform, so collisions reduce to reflections.
    pub mass: f64,
    /// Fixed integration step in seconds.
    pub time_step: f64,
    /// Multiplier applied on top of `time_step`.
    pub frame_scale: f64,
    /// Largest direction perturbation per tick, in radians. Zero disables jitter.
    pub max_jitter: f64,
    /// Rotation (radians) rendered per unit of x velocity.
    pub rotation_factor: f64,
    /// Minimum wall-clock gap between two applied ticks, in seconds.
    pub min_frame_interval: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 60.0,
            symbol_size: 40.0,
            mass: 1.0,
            time_step: 1.0 / 60.0,
            frame_scale: 1.0,
            max_jitter: 0.02,
            rotation_factor: 0.01,
            min_frame_interval: 1.0 / 60.0,
        }
    }
}

impl MotionConfig {
    /// Distance a symbol travels in one tick.
    #[inline]
    pub fn step_distance(&self) -> f64 {
        self.speed * self.time_step * self.frame_scale
    }

    /// Set the shared speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the symbol diameter.
    pub fn with_symbol_size(mut self, size: f64) -> Self {
        self.symbol_size = size;
        self
    }

    /// Set the per-tick jitter bound. Pass `0.0` for straight-line motion.
    pub fn with_jitter(mut self, max_jitter: f64) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    /// Set the fixed step and its multiplier.
    pub fn with_time_step(mut self, time_step: f64, frame_scale: f64) -> Self {
        self.time_step = time_step;
        self.frame_scale = frame_scale;
        self
    }

    /// Reject values the simulator cannot honour.
    pub fn validate(&self) -> ConfigResult<()> {
        positive("speed", self.speed)?;
        positive("symbol_size", self.symbol_size)?;
        positive("mass", self.mass)?;
        positive("time_step", self.time_step)?;
        positive("frame_scale", self.frame_scale)?;
        non_negative("max_jitter", self.max_jitter)?;
        if self.max_jitter > MAX_JITTER {
            return Err(ConfigError::Invalid(format!(
                "max_jitter must be <= {MAX_JITTER}, got {}",
                self.max_jitter
            )));
        }
        non_negative("min_frame_interval", self.min_frame_interval)?;
        if !self.rotation_factor.is_finite() {
            return Err(ConfigError::Invalid("rotation_factor must be finite".into()));
        }
        Ok(())
    }
}

/// Window the backdrop is shown in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glyphfloat".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Complete scene configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// One symbol is created per label, in this order.
    pub labels: Vec<String>,
    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
    pub motion: MotionConfig,
    pub window: WindowConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            seed: None,
            motion: MotionConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a scene from JSON and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a scene from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Save the scene as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Replace the label vocabulary.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Fix the RNG seed for reproducible layouts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the motion constants.
    pub fn with_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.labels.is_empty() {
            return Err(ConfigError::Invalid("labels must not be empty".into()));
        }
        if self.labels.len() > MAX_LABELS {
            return Err(ConfigError::Invalid(format!(
                "at most {} labels are supported, got {}",
                MAX_LABELS,
                self.labels.len()
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window dimensions must be > 0".into()));
        }
        self.motion.validate()
    }
}

fn positive(name: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite and > 0, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite and >= 0, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SceneConfig::default();
        config.validate().expect("default scene should validate");
        assert_eq!(config.labels.len(), DEFAULT_LABELS.len());
        assert_eq!(config.labels[0], "{}");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SceneConfig::from_json_str(
            r#"{ "labels": ["JS", "GO"], "motion": { "speed": 90.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.labels, vec!["JS", "GO"]);
        assert_eq!(config.motion.speed, 90.0);
        assert_eq!(config.motion.symbol_size, MotionConfig::default().symbol_size);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_zero_speed() {
        let json = r#"{ "motion": { "speed": 0.0 } }"#;
        let err = SceneConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("speed")));
    }

    #[test]
    fn rejects_negative_jitter() {
        let motion = MotionConfig::default().with_jitter(-0.1);
        assert!(motion.validate().is_err());
    }

    #[test]
    fn rejects_jitter_beyond_half_a_turn() {
        let json = r#"{ "motion": { "max_jitter": 1e308 } }"#;
        let err = SceneConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref m) if m.contains("max_jitter")));

        let motion = MotionConfig::default().with_jitter(MAX_JITTER);
        assert!(motion.validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_oversized_label_lists() {
        let empty = SceneConfig::default().with_labels(Vec::<String>::new());
        assert!(empty.validate().is_err());

        let labels = (0..MAX_LABELS + 1).map(|i| i.to_string());
        let many = SceneConfig::default().with_labels(labels);
        assert!(many.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SceneConfig::from_json_str("{ labels: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn save_then_load_preserves_scene() {
        let name = format!("glyphfloat-scene-{}.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let scene = SceneConfig::default()
            .with_labels(["AWS", "API"])
            .with_seed(99)
            .with_motion(MotionConfig::default().with_speed(42.0));
        scene.save(&path).unwrap();
        let loaded = SceneConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, scene);
    }

    #[test]
    fn step_distance_combines_speed_and_step() {
        let motion = MotionConfig::default().with_speed(120.0).with_time_step(0.5, 2.0);
        assert_eq!(motion.step_distance(), 120.0);
    }
}
