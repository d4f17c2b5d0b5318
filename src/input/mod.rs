pub mod gate;
pub mod gestures;

// Re-export the essential types
pub use gate::{GateDecision, GestureGate};
pub use gestures::{GestureKind, GesturePermission, GestureSettings, GestureType};
