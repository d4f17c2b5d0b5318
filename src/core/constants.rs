//! Chrome defaults shared by the options snapshot and the settings facade.
//! Margins are density-independent and converted with the view's pixel ratio.

use crate::core::geo::Insets;
use crate::ui::gravity::Gravity;
use egui::Color32;

/// Compass margin when none is configured (10dp on every side).
pub const DEFAULT_COMPASS_MARGINS_DP: Insets = Insets::uniform(10);

/// Logo margin when none is configured (16dp on every side).
pub const DEFAULT_LOGO_MARGINS_DP: Insets = Insets::uniform(16);

/// Attribution margin when none is configured; the wide left side keeps the
/// badge clear of the logo.
pub const DEFAULT_ATTRIBUTION_MARGINS_DP: Insets = Insets::new(76, 7, 7, 7);

/// Tint applied to the attribution badge when the requested one is fully transparent.
pub const DEFAULT_ATTRIBUTION_TINT: Color32 = Color32::from_rgb(0x38, 0x87, 0xBE);

pub const DEFAULT_COMPASS_GRAVITY: Gravity = Gravity::TOP_RIGHT;

pub const DEFAULT_LOGO_GRAVITY: Gravity = Gravity::BOTTOM_LEFT;

pub const DEFAULT_ATTRIBUTION_GRAVITY: Gravity = Gravity::BOTTOM_LEFT;

/// Device density used when the host does not report one.
pub const DEFAULT_PIXEL_RATIO: f32 = 1.0;
