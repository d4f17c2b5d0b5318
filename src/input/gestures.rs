use crate::core::geo::Point;
use std::fmt;

/// The user gestures a map view can lock or unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Rotate,
    Tilt,
    Zoom,
    Scroll,
}

impl GestureKind {
    pub const ALL: [GestureKind; 4] = [
        GestureKind::Scroll,
        GestureKind::Rotate,
        GestureKind::Tilt,
        GestureKind::Zoom,
    ];
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GestureKind::Rotate => "rotate",
            GestureKind::Tilt => "tilt",
            GestureKind::Zoom => "zoom",
            GestureKind::Scroll => "scroll",
        };
        f.write_str(name)
    }
}

/// Whether a gesture is enabled and whether that may currently be changed.
///
/// While `change_allowed` is false, requests to change `enabled` are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GesturePermission {
    enabled: bool,
    change_allowed: bool,
}

impl GesturePermission {
    pub const fn new(enabled: bool, change_allowed: bool) -> Self {
        Self {
            enabled,
            change_allowed,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_change_allowed(&self) -> bool {
        self.change_allowed
    }

    /// Returns whether the request was applied
    pub fn request_enabled(&mut self, enabled: bool) -> bool {
        if self.change_allowed {
            self.enabled = enabled;
        }
        self.change_allowed
    }

    pub fn set_change_allowed(&mut self, allowed: bool) {
        self.change_allowed = allowed;
    }
}

impl Default for GesturePermission {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Permissions for all four gestures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureSettings {
    pub rotate: GesturePermission,
    pub tilt: GesturePermission,
    pub zoom: GesturePermission,
    pub scroll: GesturePermission,
}

impl GestureSettings {
    pub fn get(&self, kind: GestureKind) -> &GesturePermission {
        match kind {
            GestureKind::Rotate => &self.rotate,
            GestureKind::Tilt => &self.tilt,
            GestureKind::Zoom => &self.zoom,
            GestureKind::Scroll => &self.scroll,
        }
    }

    pub fn get_mut(&mut self, kind: GestureKind) -> &mut GesturePermission {
        match kind {
            GestureKind::Rotate => &mut self.rotate,
            GestureKind::Tilt => &mut self.tilt,
            GestureKind::Zoom => &mut self.zoom,
            GestureKind::Scroll => &mut self.scroll,
        }
    }

    pub fn is_enabled(&self, kind: GestureKind) -> bool {
        self.get(kind).is_enabled()
    }
}

/// A gesture recognized from pointer or touch input
#[derive(Debug, Clone, PartialEq)]
pub enum GestureType {
    /// Single finger drag/pan
    Drag {
        start_position: Point,
        current_position: Point,
        delta: Point,
    },
    /// Pan released with velocity
    Fling { position: Point, velocity: Point },
    /// Pinch to zoom with two fingers
    Pinch { center: Point, scale: f64 },
    /// Two-finger rotation
    Rotation { center: Point, angle: f64 },
    /// Two fingers dragged vertically together
    Shove { center: Point, delta_y: f64 },
    Tap { position: Point },
    DoubleTap { position: Point },
}

impl GestureType {
    /// The setting that governs this gesture; taps are never gated
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            GestureType::Drag { .. } | GestureType::Fling { .. } => Some(GestureKind::Scroll),
            GestureType::Pinch { .. } | GestureType::DoubleTap { .. } => Some(GestureKind::Zoom),
            GestureType::Rotation { .. } => Some(GestureKind::Rotate),
            GestureType::Shove { .. } => Some(GestureKind::Tilt),
            GestureType::Tap { .. } => None,
        }
    }

    /// Screen point the gesture acts around when no focal point is configured
    pub fn center(&self) -> Point {
        match self {
            GestureType::Drag {
                current_position, ..
            } => *current_position,
            GestureType::Fling { position, .. }
            | GestureType::Tap { position }
            | GestureType::DoubleTap { position } => *position,
            GestureType::Pinch { center, .. }
            | GestureType::Rotation { center, .. }
            | GestureType::Shove { center, .. } => *center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_defaults_to_enabled_and_unlocked() {
        let permission = GesturePermission::default();
        assert!(permission.is_enabled());
        assert!(permission.is_change_allowed());
    }

    #[test]
    fn test_locked_permission_ignores_requests() {
        let mut permission = GesturePermission::default();
        permission.set_change_allowed(false);

        assert!(!permission.request_enabled(false));
        assert!(permission.is_enabled());

        permission.set_change_allowed(true);
        assert!(permission.request_enabled(false));
        assert!(!permission.is_enabled());
    }

    #[test]
    fn test_settings_lookup_by_kind() {
        let mut settings = GestureSettings::default();
        settings.get_mut(GestureKind::Tilt).request_enabled(false);

        assert!(!settings.is_enabled(GestureKind::Tilt));
        assert!(!settings.tilt.is_enabled());
        assert!(settings.is_enabled(GestureKind::Rotate));
    }

    #[test]
    fn test_gesture_kind_mapping() {
        let p = Point::new(5.0, 5.0);
        assert_eq!(
            GestureType::Pinch {
                center: p,
                scale: 2.0
            }
            .kind(),
            Some(GestureKind::Zoom)
        );
        assert_eq!(GestureType::DoubleTap { position: p }.kind(), Some(GestureKind::Zoom));
        assert_eq!(
            GestureType::Shove {
                center: p,
                delta_y: 3.0
            }
            .kind(),
            Some(GestureKind::Tilt)
        );
        assert_eq!(GestureType::Tap { position: p }.kind(), None);
        assert_eq!(GestureKind::Scroll.to_string(), "scroll");
    }
}
