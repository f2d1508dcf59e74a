//! Configuration for viewport limits and transition behavior
//!
//! Every field has a default, so a partial JSON document only overrides the
//! values it names.

use crate::animation::easing::EasingType;
use crate::core::constants::{
    DEFAULT_ANIMATE_MAX_SCREENS, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM,
};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What part of the viewport is kept inside the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsMode {
    /// The viewport edges never scroll past the world edges
    #[default]
    Edge,
    /// Only the center is limited, to the absolute Mercator envelope
    Center,
}

impl BoundsMode {
    pub fn limits_to_center(self) -> bool {
        matches!(self, BoundsMode::Center)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub duration_ms: f64,
    /// Jump instead of animating when the target is farther than this many screens
    pub animate_max_screens: f64,
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            animate_max_screens: DEFAULT_ANIMATE_MAX_SCREENS,
            easing: EasingType::EaseOutQuad,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub bounds_mode: BoundsMode,
    pub animation: AnimationConfig,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            bounds_mode: BoundsMode::Edge,
            animation: AnimationConfig::default(),
        }
    }
}

impl ViewportConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ViewportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading viewport config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_zoom.is_finite() || !self.max_zoom.is_finite() {
            return Err(MapError::InvalidConfig("zoom limits must be finite".into()));
        }
        if self.min_zoom < 0.0 {
            return Err(MapError::InvalidConfig(format!(
                "min_zoom {} is negative",
                self.min_zoom
            )));
        }
        if self.min_zoom > self.max_zoom {
            return Err(MapError::InvalidConfig(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        let animation = &self.animation;
        if !(animation.duration_ms.is_finite() && animation.duration_ms > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "animation duration {} ms must be positive",
                animation.duration_ms
            )));
        }
        if !(animation.animate_max_screens.is_finite() && animation.animate_max_screens >= 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "animate_max_screens {} must be a non-negative number",
                animation.animate_max_screens
            )));
        }
        Ok(())
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }
}
