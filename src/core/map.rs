use crate::{
    core::{
        config::MapOptions,
        geo::{Insets, Point},
        projection::{Projection, ViewportProjection},
    },
    input::{
        gate::{GateDecision, GestureGate},
        gestures::{GestureKind, GestureType},
    },
    ui::{
        gravity::Gravity,
        settings::UiSettings,
        widgets::{BadgeView, CompassView},
    },
    Result,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// The map view that owns the chrome widgets and hands them to `UiSettings`.
///
/// Widgets and projection are shared with the settings facade for the
/// lifetime of the view; the facade only ever mutates them.
pub struct MapView {
    projection: Rc<RefCell<ViewportProjection>>,
    compass: Rc<RefCell<CompassView>>,
    logo: Rc<RefCell<BadgeView>>,
    attribution: Rc<RefCell<BadgeView>>,
    gesture_focal_point: Rc<Cell<Option<Point>>>,
    gate: GestureGate,
    ui_settings: UiSettings,
}

impl MapView {
    pub fn new(options: MapOptions) -> Result<Self> {
        options.validate()?;

        let projection = Rc::new(RefCell::new(ViewportProjection::new(options.size)));
        let compass = Rc::new(RefCell::new(CompassView::new()));
        let logo = Rc::new(RefCell::new(BadgeView::new(Gravity::BOTTOM_LEFT)));
        let attribution = Rc::new(RefCell::new(BadgeView::new(Gravity::BOTTOM_LEFT)));

        // The gesture detector reads the pivot from here.
        let gesture_focal_point = Rc::new(Cell::new(None));
        let listener_target = Rc::clone(&gesture_focal_point);

        let mut ui_settings = UiSettings::new(
            projection.clone(),
            Box::new(move |focal_point: Option<Point>| listener_target.set(focal_point)),
            compass.clone(),
            attribution.clone(),
            logo.clone(),
            options.pixel_ratio,
        );
        ui_settings.initialise(&options);

        log::debug!(
            "Map view created ({}x{} px, pixel ratio {})",
            options.size.x,
            options.size.y,
            options.pixel_ratio
        );

        Ok(Self {
            projection,
            compass,
            logo,
            attribution,
            gesture_focal_point,
            gate: GestureGate::new(),
            ui_settings,
        })
    }

    pub fn ui_settings(&self) -> &UiSettings {
        &self.ui_settings
    }

    pub fn ui_settings_mut(&mut self) -> &mut UiSettings {
        &mut self.ui_settings
    }

    pub fn compass(&self) -> &Rc<RefCell<CompassView>> {
        &self.compass
    }

    pub fn logo(&self) -> &Rc<RefCell<BadgeView>> {
        &self.logo
    }

    pub fn attribution(&self) -> &Rc<RefCell<BadgeView>> {
        &self.attribution
    }

    pub fn content_padding(&self) -> Insets {
        self.projection.borrow().content_padding()
    }

    /// Changes the padding reserved around the map content and re-places the
    /// chrome against it
    pub fn set_content_padding(&mut self, padding: Insets) {
        log::debug!("Content padding changed to {:?}", padding);
        self.projection.borrow_mut().set_content_padding(padding);
        self.ui_settings.invalidate();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.projection
            .borrow_mut()
            .set_size(Point::new(width, height));
    }

    /// Camera bearing changed; the compass decides whether to show itself
    pub fn set_bearing(&mut self, bearing: f64) {
        self.compass.borrow_mut().update_bearing(bearing);
    }

    /// Locks or unlocks user changes to a gesture, e.g. when the loaded
    /// style does not support rotation
    pub fn lock_gesture(&mut self, kind: GestureKind, locked: bool) {
        let allowed = !locked;
        match kind {
            GestureKind::Rotate => self.ui_settings.set_rotate_gesture_change_allowed(allowed),
            GestureKind::Tilt => self.ui_settings.set_tilt_gesture_change_allowed(allowed),
            GestureKind::Zoom => self.ui_settings.set_zoom_gesture_change_allowed(allowed),
            GestureKind::Scroll => self.ui_settings.set_scroll_gesture_change_allowed(allowed),
        }
    }

    pub fn is_gesture_locked(&self, kind: GestureKind) -> bool {
        let allowed = match kind {
            GestureKind::Rotate => self.ui_settings.is_rotate_gesture_change_allowed(),
            GestureKind::Tilt => self.ui_settings.is_tilt_gesture_change_allowed(),
            GestureKind::Zoom => self.ui_settings.is_zoom_gesture_change_allowed(),
            GestureKind::Scroll => self.ui_settings.is_scroll_gesture_change_allowed(),
        };
        !allowed
    }

    /// Last focal point pushed to the gesture detector
    pub fn gesture_focal_point(&self) -> Option<Point> {
        self.gesture_focal_point.get()
    }

    /// Converts density-independent units to pixels for this view
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.ui_settings.pixel_ratio()
    }

    pub fn handle_gesture(&self, gesture: &GestureType) -> GateDecision {
        self.gate.admit(&self.ui_settings, gesture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::traits::{ChromeView, Tintable};
    use crate::ui::widgets::Visibility;

    #[test]
    fn test_new_initialises_widgets_from_options() {
        let view = MapView::new(MapOptions {
            pixel_ratio: 2.0,
            logo_enabled: false,
            ..MapOptions::default()
        })
        .unwrap();

        assert_eq!(view.logo().borrow().visibility(), Visibility::Gone);
        assert_eq!(
            view.compass().borrow().layout_params().margins,
            Insets::uniform(20)
        );
        assert!(view.attribution().borrow().tint().is_some());
        assert_eq!(view.dp_to_px(8.0), 16.0);
    }

    #[test]
    fn test_rejects_invalid_options() {
        let result = MapView::new(MapOptions {
            pixel_ratio: -1.0,
            ..MapOptions::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_content_padding_moves_chrome() {
        let mut view = MapView::new(MapOptions::default()).unwrap();
        view.set_content_padding(Insets::new(0, 40, 0, 0));

        assert_eq!(view.content_padding(), Insets::new(0, 40, 0, 0));
        assert_eq!(view.ui_settings().compass_margin_top(), 50);
        assert_eq!(view.ui_settings().logo_margin_top(), 56);
        assert_eq!(view.ui_settings().attribution_margin_top(), 47);
        assert_eq!(view.ui_settings().attribution_margin_left(), 76);
    }

    #[test]
    fn test_lock_gesture() {
        let mut view = MapView::new(MapOptions::default()).unwrap();
        view.lock_gesture(GestureKind::Rotate, true);
        assert!(view.is_gesture_locked(GestureKind::Rotate));

        view.ui_settings_mut().set_rotate_gestures_enabled(false);
        assert!(view.ui_settings().is_rotate_gestures_enabled());

        view.lock_gesture(GestureKind::Rotate, false);
        view.ui_settings_mut().set_rotate_gestures_enabled(false);
        assert!(!view.ui_settings().is_rotate_gestures_enabled());
        assert!(!view.is_gesture_locked(GestureKind::Tilt));
    }

    #[test]
    fn test_focal_point_reaches_gesture_detector() {
        let mut view = MapView::new(MapOptions::default()).unwrap();
        assert_eq!(view.gesture_focal_point(), None);

        view.ui_settings_mut()
            .set_focal_point(Some(Point::new(12.0, 34.0)));
        assert_eq!(view.gesture_focal_point(), Some(Point::new(12.0, 34.0)));

        view.ui_settings_mut().set_focal_point(None);
        assert_eq!(view.gesture_focal_point(), None);
    }

    #[test]
    fn test_resize_and_bearing() {
        let mut view = MapView::new(MapOptions::default()).unwrap();
        view.resize(1024.0, 768.0);
        assert_eq!(view.ui_settings().width(), 1024.0);
        assert_eq!(view.ui_settings().height(), 768.0);

        view.set_bearing(90.0);
        assert_eq!(view.compass().borrow().visibility(), Visibility::Visible);
        view.set_bearing(0.0);
        assert_eq!(view.compass().borrow().visibility(), Visibility::Gone);
    }
}
