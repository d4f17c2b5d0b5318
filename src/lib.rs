//! # maplet-chrome
//!
//! On-screen chrome and gesture settings for maplet map views.
//!
//! A map view owns a compass, a logo badge and an attribution badge, and
//! exposes [`UiSettings`] as the one place to show, hide, anchor, offset and
//! tint them, and to enable or lock the user's rotate, tilt, zoom and scroll
//! gestures.

pub mod core;
pub mod input;
pub mod prelude;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::{ChromePreset, MapOptions},
    geo::{Insets, Point},
    map::MapView,
    projection::{Projection, ViewportProjection},
};

pub use input::{
    gate::{GateDecision, GestureGate},
    gestures::{GestureKind, GesturePermission, GestureSettings, GestureType},
};

pub use ui::{
    gravity::Gravity,
    settings::{FocalPointChangeListener, UiSettings},
    widgets::{BadgeView, CompassView, LayoutParams, Visibility},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Routes `log` output to stderr, filtered by `RUST_LOG`. If the host already
/// installed a logger, that one is kept.
#[cfg(feature = "debug")]
pub fn init_debug_logging() {
    if let Err(e) =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init()
    {
        log::debug!("Keeping existing logger: {}", e);
    }
}
