//! Configuration for the word-space engine.
//!
//! All tunables live here: selection bounds, normalization scale, and the
//! LOD distance thresholds consumed by the flight layer. Configuration is
//! loaded in order: `config/default.toml`, `config/{WORD_SPACE_ENV}.toml`,
//! then environment variables with the `WORD_SPACE` prefix.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub normalization: NormalizationConfig,
    #[serde(default)]
    pub lod: LodConfig,
}

impl EngineConfig {
    /// Load configuration from files and environment.
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("WORD_SPACE_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("WORD_SPACE").separator("__"));

        let config: EngineConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: EngineConfig = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        if self.selection.top_k == 0 {
            return Err(CoreError::ConfigError(
                "selection.top_k must be greater than 0".into(),
            ));
        }

        if self.selection.min_word_len == 0
            || self.selection.min_word_len > self.selection.max_word_len
        {
            return Err(CoreError::ConfigError(format!(
                "selection word length bounds invalid: min {} max {}",
                self.selection.min_word_len, self.selection.max_word_len
            )));
        }

        if !(self.normalization.scale_factor.is_finite())
            || self.normalization.scale_factor <= 0.0
        {
            return Err(CoreError::ConfigError(format!(
                "normalization.scale_factor must be a positive finite number, got {}",
                self.normalization.scale_factor
            )));
        }

        self.lod.validate()?;

        Ok(())
    }
}

/// Relevance-selector tunables.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// Maximum size of the selected working set.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Minimum eligible word length, in ASCII letters.
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,

    /// Maximum eligible word length, in ASCII letters.
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_word_len: default_min_word_len(),
            max_word_len: default_max_word_len(),
        }
    }
}

/// Space-normalizer tunables.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NormalizationConfig {
    /// World-scale multiplier applied after per-axis spread normalization.
    ///
    /// Word magnitudes are measured before this factor, so changing it moves
    /// the cloud without disturbing LOD or visual-emphasis decisions.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f32,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
        }
    }
}

/// Distance thresholds and opacity ceiling for visibility banding.
///
/// Bands in ascending distance: too-close fade below `inner_fade`, fade-in
/// up to `near`, full visibility through `far`, fade-out through `cull`,
/// culled beyond. Thresholds must be strictly increasing.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LodConfig {
    #[serde(default = "default_inner_fade")]
    pub inner_fade: f32,

    #[serde(default = "default_near_distance")]
    pub near_distance: f32,

    #[serde(default = "default_far_distance")]
    pub far_distance: f32,

    #[serde(default = "default_cull_distance")]
    pub cull_distance: f32,

    /// Opacity multiplier for a fully visible word.
    #[serde(default = "default_base_opacity")]
    pub base_opacity: f32,

    /// Result size for nearest-word lookups.
    #[serde(default = "default_nearest_k")]
    pub nearest_k: usize,
}

impl LodConfig {
    /// Check threshold ordering and opacity range.
    pub fn validate(&self) -> CoreResult<()> {
        let ordered = 0.0 < self.inner_fade
            && self.inner_fade < self.near_distance
            && self.near_distance < self.far_distance
            && self.far_distance < self.cull_distance;
        if !ordered {
            return Err(CoreError::ConfigError(format!(
                "lod thresholds must satisfy 0 < inner_fade < near < far < cull, got {} / {} / {} / {}",
                self.inner_fade, self.near_distance, self.far_distance, self.cull_distance
            )));
        }

        if !(self.base_opacity.is_finite()) || self.base_opacity <= 0.0 || self.base_opacity > 1.0 {
            return Err(CoreError::ConfigError(format!(
                "lod.base_opacity must be in (0, 1], got {}",
                self.base_opacity
            )));
        }

        if self.nearest_k == 0 {
            return Err(CoreError::ConfigError(
                "lod.nearest_k must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            inner_fade: default_inner_fade(),
            near_distance: default_near_distance(),
            far_distance: default_far_distance(),
            cull_distance: default_cull_distance(),
            base_opacity: default_base_opacity(),
            nearest_k: default_nearest_k(),
        }
    }
}

// ============================================================================
// Serde default functions
// ============================================================================

fn default_top_k() -> usize {
    7000
}

fn default_min_word_len() -> usize {
    3
}

fn default_max_word_len() -> usize {
    15
}

fn default_scale_factor() -> f32 {
    40.0
}

fn default_inner_fade() -> f32 {
    5.0
}

fn default_near_distance() -> f32 {
    15.0
}

fn default_far_distance() -> f32 {
    150.0
}

fn default_cull_distance() -> f32 {
    250.0
}

fn default_base_opacity() -> f32 {
    1.0
}

fn default_nearest_k() -> usize {
    5
}
