use crate::{
    core::geo::Insets,
    ui::{
        gravity::Gravity,
        traits::{ChromeView, CompassWidget, Tintable},
    },
};
use egui::Color32;

/// Bearings within this many degrees of north count as facing north.
const NORTH_TOLERANCE_DEGREES: f64 = 0.5;

/// Placement of a chrome widget inside its parent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutParams {
    pub gravity: Gravity,
    pub margins: Insets,
}

impl LayoutParams {
    pub fn new(gravity: Gravity) -> Self {
        Self {
            gravity,
            margins: Insets::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    /// Hidden and removed from layout
    Gone,
}

/// The compass shown by a map view.
///
/// Disabling the compass hides it for good. While enabled it is shown unless
/// fading is on and the map currently faces north.
#[derive(Debug, Clone)]
pub struct CompassView {
    layout: LayoutParams,
    visibility: Visibility,
    enabled: bool,
    fade_facing_north: bool,
    bearing: f64,
}

impl CompassView {
    pub fn new() -> Self {
        let mut compass = Self {
            layout: LayoutParams::new(Gravity::TOP_RIGHT),
            visibility: Visibility::Gone,
            enabled: true,
            fade_facing_north: true,
            bearing: 0.0,
        };
        compass.refresh_visibility();
        compass
    }

    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    /// Called by the map view whenever the camera rotates
    pub fn update_bearing(&mut self, bearing: f64) {
        self.bearing = bearing.rem_euclid(360.0);
        self.refresh_visibility();
    }

    pub fn is_facing_north(&self) -> bool {
        self.bearing < NORTH_TOLERANCE_DEGREES
            || self.bearing > 360.0 - NORTH_TOLERANCE_DEGREES
    }

    fn refresh_visibility(&mut self) {
        let hidden = !self.enabled || (self.fade_facing_north && self.is_facing_north());
        self.visibility = if hidden {
            Visibility::Gone
        } else {
            Visibility::Visible
        };
    }
}

impl Default for CompassView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeView for CompassView {
    fn layout_params(&self) -> LayoutParams {
        self.layout
    }

    fn set_layout_params(&mut self, params: LayoutParams) {
        self.layout = params;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

impl CompassWidget for CompassView {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.refresh_visibility();
    }

    fn is_fade_facing_north(&self) -> bool {
        self.fade_facing_north
    }

    fn set_fade_facing_north(&mut self, fade: bool) {
        self.fade_facing_north = fade;
        self.refresh_visibility();
    }
}

/// Image badge used for the logo and the attribution button
#[derive(Debug, Clone)]
pub struct BadgeView {
    layout: LayoutParams,
    visibility: Visibility,
    tint: Option<Color32>,
}

impl BadgeView {
    pub fn new(gravity: Gravity) -> Self {
        Self {
            layout: LayoutParams::new(gravity),
            visibility: Visibility::Visible,
            tint: None,
        }
    }
}

impl ChromeView for BadgeView {
    fn layout_params(&self) -> LayoutParams {
        self.layout
    }

    fn set_layout_params(&mut self, params: LayoutParams) {
        self.layout = params;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }
}

impl Tintable for BadgeView {
    fn tint(&self) -> Option<Color32> {
        self.tint
    }

    fn set_tint(&mut self, color: Color32) {
        self.tint = Some(color);
    }
}
