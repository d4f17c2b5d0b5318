use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Anchor of a chrome widget inside the map view.
///
/// Gravity is a set of edge flags that compose with `|`, so
/// `Gravity::TOP | Gravity::RIGHT` is the top-right corner. The empty set
/// leaves the widget at the top-left origin.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gravity(u8);

impl Gravity {
    pub const NONE: Gravity = Gravity(0);
    pub const LEFT: Gravity = Gravity(1 << 0);
    pub const RIGHT: Gravity = Gravity(1 << 1);
    pub const TOP: Gravity = Gravity(1 << 2);
    pub const BOTTOM: Gravity = Gravity(1 << 3);
    pub const CENTER_HORIZONTAL: Gravity = Gravity(1 << 4);
    pub const CENTER_VERTICAL: Gravity = Gravity(1 << 5);

    pub const CENTER: Gravity = Gravity(Self::CENTER_HORIZONTAL.0 | Self::CENTER_VERTICAL.0);
    pub const TOP_LEFT: Gravity = Gravity(Self::TOP.0 | Self::LEFT.0);
    pub const TOP_RIGHT: Gravity = Gravity(Self::TOP.0 | Self::RIGHT.0);
    pub const BOTTOM_LEFT: Gravity = Gravity(Self::BOTTOM.0 | Self::LEFT.0);
    pub const BOTTOM_RIGHT: Gravity = Gravity(Self::BOTTOM.0 | Self::RIGHT.0);

    const NAMED: [(Gravity, &'static str); 6] = [
        (Self::LEFT, "LEFT"),
        (Self::RIGHT, "RIGHT"),
        (Self::TOP, "TOP"),
        (Self::BOTTOM, "BOTTOM"),
        (Self::CENTER_HORIZONTAL, "CENTER_HORIZONTAL"),
        (Self::CENTER_VERTICAL, "CENTER_VERTICAL"),
    ];

    pub const fn from_bits(bits: u8) -> Self {
        Gravity(bits)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: Gravity) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Gravity {
    type Output = Gravity;

    fn bitor(self, rhs: Gravity) -> Gravity {
        Gravity(self.0 | rhs.0)
    }
}

impl BitOrAssign for Gravity {
    fn bitor_assign(&mut self, rhs: Gravity) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Gravity(NONE)");
        }

        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Gravity({})", names.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_compose_from_edges() {
        assert_eq!(Gravity::TOP | Gravity::RIGHT, Gravity::TOP_RIGHT);
        assert!(Gravity::BOTTOM_LEFT.contains(Gravity::BOTTOM));
        assert!(!Gravity::BOTTOM_LEFT.contains(Gravity::RIGHT));

        let mut gravity = Gravity::NONE;
        gravity |= Gravity::CENTER_VERTICAL;
        gravity |= Gravity::LEFT;
        assert_eq!(gravity.bits(), Gravity::CENTER_VERTICAL.bits() | Gravity::LEFT.bits());
    }

    #[test]
    fn test_debug_lists_flags() {
        assert_eq!(format!("{:?}", Gravity::TOP_RIGHT), "Gravity(RIGHT | TOP)");
        assert_eq!(format!("{:?}", Gravity::NONE), "Gravity(NONE)");
    }

    #[test]
    fn test_serializes_as_bits() {
        let json = serde_json::to_string(&Gravity::BOTTOM_RIGHT).unwrap();
        assert_eq!(json, Gravity::BOTTOM_RIGHT.bits().to_string());

        let parsed: Gravity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Gravity::BOTTOM_RIGHT);
    }
}
