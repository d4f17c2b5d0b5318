use crate::{
    core::geo::Point,
    input::gestures::GestureType,
    ui::settings::UiSettings,
};

/// What the map view should do with a recognized gesture
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    /// The gesture's setting is off; drop it
    Rejected,
    /// Apply the gesture around `pivot`
    Admitted { pivot: Point },
    /// A single tap; `deselect_markers` tells whether selected markers
    /// should be cleared
    Tap { position: Point, deselect_markers: bool },
}

/// Checks recognized gestures against the current UI settings before they
/// reach the camera.
#[derive(Debug, Default, Clone, Copy)]
pub struct GestureGate;

impl GestureGate {
    pub fn new() -> Self {
        Self
    }

    pub fn admit(&self, settings: &UiSettings, gesture: &GestureType) -> GateDecision {
        if let GestureType::Tap { position } = gesture {
            return GateDecision::Tap {
                position: *position,
                deselect_markers: settings.is_deselect_markers_on_tap(),
            };
        }

        if let Some(kind) = gesture.kind() {
            if !settings.is_gestures_enabled(kind) {
                log::trace!("Dropping {} gesture, disabled in UI settings", kind);
                return GateDecision::Rejected;
            }
        }

        // Scroll follows the finger; zoom, rotate and tilt pivot on the
        // configured focal point when there is one.
        let pivot = match gesture {
            GestureType::Drag { .. } | GestureType::Fling { .. } => gesture.center(),
            _ => settings.focal_point().unwrap_or_else(|| gesture.center()),
        };
        GateDecision::Admitted { pivot }
    }

    /// Keeps only the gestures the settings admit, paired with their decision
    pub fn filter<'a>(
        &self,
        settings: &UiSettings,
        gestures: impl IntoIterator<Item = &'a GestureType>,
    ) -> Vec<(&'a GestureType, GateDecision)> {
        gestures
            .into_iter()
            .map(|gesture| (gesture, self.admit(settings, gesture)))
            .filter(|(_, decision)| *decision != GateDecision::Rejected)
            .collect()
    }
}
