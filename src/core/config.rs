//! Configuration snapshot for a map view's chrome and gestures
//!
//! `MapOptions` is read once when the map view is created. It can be built in
//! code, resolved from a `ChromePreset`, or loaded from JSON where every
//! missing field falls back to its default.

use crate::{
    core::{
        constants::{
            DEFAULT_ATTRIBUTION_GRAVITY, DEFAULT_ATTRIBUTION_TINT, DEFAULT_COMPASS_GRAVITY,
            DEFAULT_LOGO_GRAVITY, DEFAULT_PIXEL_RATIO,
        },
        geo::{Insets, Point},
    },
    ui::gravity::Gravity,
    MapError, Result,
};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum ChromePreset {
    /// Every gesture allowed, compass, logo and attribution shown
    Standard,
    /// Gestures allowed, no compass and no zoom buttons
    Minimal,
    /// Static map: all gestures locked off, zoom buttons shown
    Locked,
    Custom(MapOptions),
}

impl ChromePreset {
    pub fn resolve(&self) -> MapOptions {
        match self {
            Self::Standard => MapOptions::default(),
            Self::Minimal => MapOptions {
                compass_enabled: false,
                zoom_controls_enabled: false,
                ..MapOptions::default()
            },
            Self::Locked => MapOptions {
                zoom_gestures_enabled: false,
                scroll_gestures_enabled: false,
                rotate_gestures_enabled: false,
                tilt_gestures_enabled: false,
                zoom_controls_enabled: true,
                ..MapOptions::default()
            },
            Self::Custom(options) => options.clone(),
        }
    }
}

impl Default for ChromePreset {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Device pixels per density-independent unit
    pub pixel_ratio: f32,
    /// Initial size of the map view in pixels
    pub size: Point,

    pub compass_enabled: bool,
    pub compass_gravity: Gravity,
    /// Explicit compass margins in pixels; `None` uses the 10dp default
    pub compass_margins: Option<Insets>,
    pub compass_fade_facing_north: bool,

    pub logo_enabled: bool,
    pub logo_gravity: Gravity,
    /// Explicit logo margins in pixels; `None` uses the 16dp default
    pub logo_margins: Option<Insets>,

    pub attribution_enabled: bool,
    pub attribution_gravity: Gravity,
    /// Explicit attribution margins in pixels; `None` uses (76, 7, 7, 7)dp
    pub attribution_margins: Option<Insets>,
    /// Attribution tint; `None` uses `primary_color`
    pub attribution_tint_color: Option<Color32>,
    /// Theme color of the host application
    pub primary_color: Color32,

    pub zoom_gestures_enabled: bool,
    pub scroll_gestures_enabled: bool,
    pub rotate_gestures_enabled: bool,
    pub tilt_gestures_enabled: bool,
    pub zoom_controls_enabled: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: DEFAULT_PIXEL_RATIO,
            size: Point::new(800.0, 600.0),
            compass_enabled: true,
            compass_gravity: DEFAULT_COMPASS_GRAVITY,
            compass_margins: None,
            compass_fade_facing_north: true,
            logo_enabled: true,
            logo_gravity: DEFAULT_LOGO_GRAVITY,
            logo_margins: None,
            attribution_enabled: true,
            attribution_gravity: DEFAULT_ATTRIBUTION_GRAVITY,
            attribution_margins: None,
            attribution_tint_color: None,
            primary_color: DEFAULT_ATTRIBUTION_TINT,
            zoom_gestures_enabled: true,
            scroll_gestures_enabled: true,
            rotate_gestures_enabled: true,
            tilt_gestures_enabled: true,
            zoom_controls_enabled: false,
        }
    }
}

impl MapOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: MapOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading map options from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(MapError::InvalidOptions(format!(
                "pixel_ratio must be a positive number, got {}",
                self.pixel_ratio
            )));
        }

        let size_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !size_ok(self.size.x) || !size_ok(self.size.y) {
            return Err(MapError::InvalidOptions(format!(
                "size must be non-negative, got {}x{}",
                self.size.x, self.size.y
            )));
        }

        Ok(())
    }

    /// Tint the attribution badge starts with
    pub fn resolved_attribution_tint(&self) -> Color32 {
        self.attribution_tint_color.unwrap_or(self.primary_color)
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Point::new(width, height);
        self
    }
}
