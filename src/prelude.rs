//! Prelude module for common maplet-chrome types and traits
//!
//! This module re-exports the most commonly used types and traits for easy
//! importing with `use maplet_chrome::prelude::*;`

pub use crate::core::{
    config::{ChromePreset, MapOptions},
    geo::{Insets, Point},
    map::MapView,
    projection::{Projection, ViewportProjection},
};

pub use crate::input::{
    gate::{GateDecision, GestureGate},
    gestures::{GestureKind, GestureType},
};

pub use crate::ui::{
    gravity::Gravity,
    settings::{FocalPointChangeListener, UiSettings},
    traits::{ChromeView, CompassWidget, Tintable},
    widgets::{LayoutParams, Visibility},
};

pub use crate::{MapError, Result};
