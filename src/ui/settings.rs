//! Settings for the on-screen chrome and user gestures of a map view.
//!
//! `UiSettings` never owns the widgets it configures: the map view creates
//! the compass, logo and attribution badge and hands shared handles over.
//! Every setter is total. Gesture changes requested while a gesture is locked
//! are dropped silently, and a fully transparent attribution tint is replaced
//! by the default one.

use crate::{
    core::{
        config::MapOptions,
        constants::{
            DEFAULT_ATTRIBUTION_MARGINS_DP, DEFAULT_ATTRIBUTION_TINT, DEFAULT_COMPASS_MARGINS_DP,
            DEFAULT_LOGO_MARGINS_DP,
        },
        geo::{Insets, Point},
        projection::Projection,
    },
    input::gestures::{GestureKind, GestureSettings},
    ui::{
        gravity::Gravity,
        traits::{ChromeView, CompassHandle, TintableHandle, ViewHandle},
        widgets::Visibility,
    },
};
use egui::Color32;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives the focal point every time it is set, including when it is cleared
pub trait FocalPointChangeListener {
    fn on_focal_point_changed(&mut self, focal_point: Option<Point>);
}

impl<F> FocalPointChangeListener for F
where
    F: FnMut(Option<Point>),
{
    fn on_focal_point_changed(&mut self, focal_point: Option<Point>) {
        self(focal_point)
    }
}

/// Visibility, placement and tint of a map view's chrome, plus the user
/// gesture switches and focal point.
pub struct UiSettings {
    projection: Rc<RefCell<dyn Projection>>,
    focal_point_listener: Box<dyn FocalPointChangeListener>,
    compass: CompassHandle,
    attribution: TintableHandle,
    logo: ViewHandle,
    pixel_ratio: f32,

    gestures: GestureSettings,
    zoom_controls_enabled: bool,
    deselect_markers_on_tap: bool,
    focal_point: Option<Point>,
}

impl UiSettings {
    pub fn new(
        projection: Rc<RefCell<dyn Projection>>,
        focal_point_listener: Box<dyn FocalPointChangeListener>,
        compass: CompassHandle,
        attribution: TintableHandle,
        logo: ViewHandle,
        pixel_ratio: f32,
    ) -> Self {
        Self {
            projection,
            focal_point_listener,
            compass,
            attribution,
            logo,
            pixel_ratio,
            gestures: GestureSettings::default(),
            zoom_controls_enabled: false,
            deselect_markers_on_tap: true,
            focal_point: None,
        }
    }

    /// Seeds every setting from the options snapshot. Called once, right
    /// after construction.
    pub fn initialise(&mut self, options: &MapOptions) {
        log::debug!("Initialising UI settings (pixel ratio {})", self.pixel_ratio);
        self.initialise_gestures(options);
        self.initialise_compass(options);
        self.initialise_logo(options);
        self.initialise_attribution(options);
    }

    fn initialise_gestures(&mut self, options: &MapOptions) {
        let seeds = [
            (GestureKind::Zoom, options.zoom_gestures_enabled),
            (GestureKind::Scroll, options.scroll_gestures_enabled),
            (GestureKind::Rotate, options.rotate_gestures_enabled),
            (GestureKind::Tilt, options.tilt_gestures_enabled),
        ];
        // One option drives both flags; a gesture configured off is also locked.
        for (kind, enabled) in seeds {
            self.set_gestures_enabled(kind, enabled);
            self.set_gesture_change_allowed(kind, enabled);
        }
        self.set_zoom_controls_enabled(options.zoom_controls_enabled);
    }

    fn initialise_compass(&mut self, options: &MapOptions) {
        self.set_compass_enabled(options.compass_enabled);
        self.set_compass_gravity(options.compass_gravity);
        let margins = options
            .compass_margins
            .unwrap_or_else(|| DEFAULT_COMPASS_MARGINS_DP.scaled(self.pixel_ratio));
        self.set_compass_margins(margins.left, margins.top, margins.right, margins.bottom);
        self.set_compass_fade_facing_north(options.compass_fade_facing_north);
    }

    fn initialise_logo(&mut self, options: &MapOptions) {
        self.set_logo_enabled(options.logo_enabled);
        self.set_logo_gravity(options.logo_gravity);
        let margins = options
            .logo_margins
            .unwrap_or_else(|| DEFAULT_LOGO_MARGINS_DP.scaled(self.pixel_ratio));
        self.set_logo_margins(margins.left, margins.top, margins.right, margins.bottom);
    }

    fn initialise_attribution(&mut self, options: &MapOptions) {
        self.set_attribution_enabled(options.attribution_enabled);
        self.set_attribution_gravity(options.attribution_gravity);
        let margins = options
            .attribution_margins
            .unwrap_or_else(|| DEFAULT_ATTRIBUTION_MARGINS_DP.scaled(self.pixel_ratio));
        self.set_attribution_margins(margins.left, margins.top, margins.right, margins.bottom);
        self.set_attribution_tint_color(options.resolved_attribution_tint());
    }

    // Compass

    /// Enables or disables the compass. A disabled compass is never shown;
    /// an enabled one is shown whenever the map does not face north (or
    /// always, if fading is off).
    pub fn set_compass_enabled(&mut self, enabled: bool) {
        self.compass.borrow_mut().set_enabled(enabled);
    }

    pub fn is_compass_enabled(&self) -> bool {
        self.compass.borrow().is_enabled()
    }

    /// Corner of the map view the compass is anchored to. Top right by default.
    pub fn set_compass_gravity(&mut self, gravity: Gravity) {
        set_widget_gravity(&mut *self.compass.borrow_mut(), gravity);
    }

    pub fn compass_gravity(&self) -> Gravity {
        self.compass.borrow().layout_params().gravity
    }

    /// Distance of the compass from the map view edges, in pixels. The
    /// current content padding is added on every side.
    pub fn set_compass_margins(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        let padding = self.projection.borrow().content_padding();
        set_widget_margins(
            &mut *self.compass.borrow_mut(),
            Insets::new(left, top, right, bottom),
            padding,
        );
    }

    pub fn compass_margin_left(&self) -> i32 {
        self.compass_margins().left
    }

    pub fn compass_margin_top(&self) -> i32 {
        self.compass_margins().top
    }

    pub fn compass_margin_right(&self) -> i32 {
        self.compass_margins().right
    }

    pub fn compass_margin_bottom(&self) -> i32 {
        self.compass_margins().bottom
    }

    fn compass_margins(&self) -> Insets {
        self.compass.borrow().layout_params().margins
    }

    /// Whether the compass fades out while the map faces north. On by default.
    pub fn set_compass_fade_facing_north(&mut self, fade: bool) {
        self.compass.borrow_mut().set_fade_facing_north(fade);
    }

    pub fn is_compass_fade_when_facing_north(&self) -> bool {
        self.compass.borrow().is_fade_facing_north()
    }

    // Logo

    pub fn set_logo_enabled(&mut self, enabled: bool) {
        self.logo.borrow_mut().set_visibility(visibility_for(enabled));
    }

    pub fn is_logo_enabled(&self) -> bool {
        self.logo.borrow().visibility() == Visibility::Visible
    }

    /// Corner of the map view the logo is anchored to. Bottom left by default.
    pub fn set_logo_gravity(&mut self, gravity: Gravity) {
        set_widget_gravity(&mut *self.logo.borrow_mut(), gravity);
    }

    pub fn logo_gravity(&self) -> Gravity {
        self.logo.borrow().layout_params().gravity
    }

    pub fn set_logo_margins(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        let padding = self.projection.borrow().content_padding();
        set_widget_margins(
            &mut *self.logo.borrow_mut(),
            Insets::new(left, top, right, bottom),
            padding,
        );
    }

    pub fn logo_margin_left(&self) -> i32 {
        self.logo_margins().left
    }

    pub fn logo_margin_top(&self) -> i32 {
        self.logo_margins().top
    }

    pub fn logo_margin_right(&self) -> i32 {
        self.logo_margins().right
    }

    pub fn logo_margin_bottom(&self) -> i32 {
        self.logo_margins().bottom
    }

    fn logo_margins(&self) -> Insets {
        self.logo.borrow().layout_params().margins
    }

    // Attribution

    pub fn set_attribution_enabled(&mut self, enabled: bool) {
        self.attribution
            .borrow_mut()
            .set_visibility(visibility_for(enabled));
    }

    pub fn is_attribution_enabled(&self) -> bool {
        self.attribution.borrow().visibility() == Visibility::Visible
    }

    /// Bottom left, next to the logo, by default.
    pub fn set_attribution_gravity(&mut self, gravity: Gravity) {
        set_widget_gravity(&mut *self.attribution.borrow_mut(), gravity);
    }

    pub fn attribution_gravity(&self) -> Gravity {
        self.attribution.borrow().layout_params().gravity
    }

    pub fn set_attribution_margins(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        let padding = self.projection.borrow().content_padding();
        set_widget_margins(
            &mut *self.attribution.borrow_mut(),
            Insets::new(left, top, right, bottom),
            padding,
        );
    }

    pub fn attribution_margin_left(&self) -> i32 {
        self.attribution_margins().left
    }

    pub fn attribution_margin_top(&self) -> i32 {
        self.attribution_margins().top
    }

    pub fn attribution_margin_right(&self) -> i32 {
        self.attribution_margins().right
    }

    pub fn attribution_margin_bottom(&self) -> i32 {
        self.attribution_margins().bottom
    }

    fn attribution_margins(&self) -> Insets {
        self.attribution.borrow().layout_params().margins
    }

    /// Tints the attribution badge. A fully transparent color would hide the
    /// badge, so `DEFAULT_ATTRIBUTION_TINT` is used instead.
    pub fn set_attribution_tint_color(&mut self, color: Color32) {
        let tint = if color.a() == 0 {
            log::debug!("Transparent attribution tint requested, using default tint");
            DEFAULT_ATTRIBUTION_TINT
        } else {
            color
        };
        self.attribution.borrow_mut().set_tint(tint);
    }

    pub fn attribution_tint_color(&self) -> Option<Color32> {
        self.attribution.borrow().tint()
    }

    // Gestures

    /// Whether the user may rotate the map. Only affects user interaction;
    /// the camera can still be rotated programmatically.
    pub fn set_rotate_gestures_enabled(&mut self, enabled: bool) {
        self.set_gestures_enabled(GestureKind::Rotate, enabled);
    }

    pub fn is_rotate_gestures_enabled(&self) -> bool {
        self.gestures.rotate.is_enabled()
    }

    pub(crate) fn set_rotate_gesture_change_allowed(&mut self, allowed: bool) {
        self.set_gesture_change_allowed(GestureKind::Rotate, allowed);
    }

    pub(crate) fn is_rotate_gesture_change_allowed(&self) -> bool {
        self.gestures.rotate.is_change_allowed()
    }

    /// Whether the user may tilt the map.
    pub fn set_tilt_gestures_enabled(&mut self, enabled: bool) {
        self.set_gestures_enabled(GestureKind::Tilt, enabled);
    }

    pub fn is_tilt_gestures_enabled(&self) -> bool {
        self.gestures.tilt.is_enabled()
    }

    pub(crate) fn set_tilt_gesture_change_allowed(&mut self, allowed: bool) {
        self.set_gesture_change_allowed(GestureKind::Tilt, allowed);
    }

    pub(crate) fn is_tilt_gesture_change_allowed(&self) -> bool {
        self.gestures.tilt.is_change_allowed()
    }

    /// Whether the user may zoom the map.
    pub fn set_zoom_gestures_enabled(&mut self, enabled: bool) {
        self.set_gestures_enabled(GestureKind::Zoom, enabled);
    }

    pub fn is_zoom_gestures_enabled(&self) -> bool {
        self.gestures.zoom.is_enabled()
    }

    pub(crate) fn set_zoom_gesture_change_allowed(&mut self, allowed: bool) {
        self.set_gesture_change_allowed(GestureKind::Zoom, allowed);
    }

    pub(crate) fn is_zoom_gesture_change_allowed(&self) -> bool {
        self.gestures.zoom.is_change_allowed()
    }

    /// Whether the user may scroll around the map.
    pub fn set_scroll_gestures_enabled(&mut self, enabled: bool) {
        self.set_gestures_enabled(GestureKind::Scroll, enabled);
    }

    pub fn is_scroll_gestures_enabled(&self) -> bool {
        self.gestures.scroll.is_enabled()
    }

    pub(crate) fn set_scroll_gesture_change_allowed(&mut self, allowed: bool) {
        self.set_gesture_change_allowed(GestureKind::Scroll, allowed);
    }

    pub(crate) fn is_scroll_gesture_change_allowed(&self) -> bool {
        self.gestures.scroll.is_change_allowed()
    }

    /// Sets every gesture at once. Locked gestures keep their current state.
    pub fn set_all_gestures_enabled(&mut self, enabled: bool) {
        self.set_scroll_gestures_enabled(enabled);
        self.set_rotate_gestures_enabled(enabled);
        self.set_tilt_gestures_enabled(enabled);
        self.set_zoom_gestures_enabled(enabled);
    }

    pub fn set_gestures_enabled(&mut self, kind: GestureKind, enabled: bool) {
        if !self.gestures.get_mut(kind).request_enabled(enabled) {
            log::trace!("Ignoring {} gesture change, gesture is locked", kind);
        }
    }

    pub fn is_gestures_enabled(&self, kind: GestureKind) -> bool {
        self.gestures.is_enabled(kind)
    }

    pub(crate) fn set_gesture_change_allowed(&mut self, kind: GestureKind, allowed: bool) {
        self.gestures.get_mut(kind).set_change_allowed(allowed);
    }

    pub fn gestures(&self) -> &GestureSettings {
        &self.gestures
    }

    // Plain flags

    /// Whether the +/- zoom buttons are shown. Off by default.
    pub fn set_zoom_controls_enabled(&mut self, enabled: bool) {
        self.zoom_controls_enabled = enabled;
    }

    pub fn is_zoom_controls_enabled(&self) -> bool {
        self.zoom_controls_enabled
    }

    /// Whether a tap on the map deselects markers and closes their info
    /// windows. On by default.
    pub fn set_deselect_markers_on_tap(&mut self, deselect: bool) {
        self.deselect_markers_on_tap = deselect;
    }

    pub fn is_deselect_markers_on_tap(&self) -> bool {
        self.deselect_markers_on_tap
    }

    /// Sets the point gestures pivot around, or clears it. The listener is
    /// notified before this returns.
    pub fn set_focal_point(&mut self, focal_point: Option<Point>) {
        self.focal_point = focal_point;
        self.focal_point_listener.on_focal_point_changed(focal_point);
    }

    pub fn focal_point(&self) -> Option<Point> {
        self.focal_point
    }

    // Projection

    /// Measured height of the map view in pixels
    pub fn height(&self) -> f32 {
        self.projection.borrow().height()
    }

    /// Measured width of the map view in pixels
    pub fn width(&self) -> f32 {
        self.projection.borrow().width()
    }

    pub(crate) fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Re-applies the logo, compass and attribution margins against the
    /// current content padding.
    ///
    /// The stored margins already contain the padding applied last time and
    /// are passed back in as requested margins, so every call adds the
    /// current padding once more. With zero padding this is a no-op.
    pub fn invalidate(&mut self) {
        let logo = self.logo_margins();
        self.set_logo_margins(logo.left, logo.top, logo.right, logo.bottom);

        let compass = self.compass_margins();
        self.set_compass_margins(compass.left, compass.top, compass.right, compass.bottom);

        let attribution = self.attribution_margins();
        self.set_attribution_margins(
            attribution.left,
            attribution.top,
            attribution.right,
            attribution.bottom,
        );
    }
}

fn visibility_for(enabled: bool) -> Visibility {
    if enabled {
        Visibility::Visible
    } else {
        Visibility::Gone
    }
}

fn set_widget_gravity<V: ChromeView + ?Sized>(view: &mut V, gravity: Gravity) {
    let mut params = view.layout_params();
    params.gravity = gravity;
    view.set_layout_params(params);
}

fn set_widget_margins<V: ChromeView + ?Sized>(view: &mut V, margins: Insets, padding: Insets) {
    let mut params = view.layout_params();
    params.margins = margins.offset_by(&padding);
    view.set_layout_params(params);
}
