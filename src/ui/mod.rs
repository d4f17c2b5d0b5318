pub mod gravity;
pub mod settings;
pub mod traits;
pub mod widgets;

pub use traits::{ChromeView, CompassHandle, CompassWidget, Tintable, TintableHandle, ViewHandle};

pub use gravity::Gravity;

pub use settings::{FocalPointChangeListener, UiSettings};

pub use widgets::{BadgeView, CompassView, LayoutParams, Visibility};
