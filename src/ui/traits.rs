use crate::ui::widgets::{LayoutParams, Visibility};
use egui::Color32;
use std::cell::RefCell;
use std::rc::Rc;

/// A chrome element placed on top of the map: anchored by gravity, offset by
/// margins, shown or hidden by visibility.
pub trait ChromeView {
    fn layout_params(&self) -> LayoutParams;
    fn set_layout_params(&mut self, params: LayoutParams);

    fn visibility(&self) -> Visibility;
    fn set_visibility(&mut self, visibility: Visibility);
}

/// The compass indicator. Its own enabled state and north-facing fade decide
/// when it is actually shown.
pub trait CompassWidget: ChromeView {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);

    fn is_fade_facing_north(&self) -> bool;
    fn set_fade_facing_north(&mut self, fade: bool);
}

/// A chrome element drawn with a tint color.
pub trait Tintable: ChromeView {
    fn tint(&self) -> Option<Color32>;
    fn set_tint(&mut self, color: Color32);
}

/// Shared handles to widgets owned by the map view. All chrome lives on the
/// UI thread, so plain `Rc<RefCell<_>>` is enough.
pub type CompassHandle = Rc<RefCell<dyn CompassWidget>>;
pub type ViewHandle = Rc<RefCell<dyn ChromeView>>;
pub type TintableHandle = Rc<RefCell<dyn Tintable>>;
