use maplet_chrome::prelude::*;
use maplet_chrome::constants::DEFAULT_ATTRIBUTION_TINT;
use egui::Color32;

/// Integration tests for how a host application drives the chrome settings
/// through a map view
#[cfg(test)]
mod ui_settings_tests {
    use super::*;

    fn view_with_density(pixel_ratio: f32) -> MapView {
        MapView::new(MapOptions::default().with_pixel_ratio(pixel_ratio))
            .expect("default options are valid")
    }

    fn margins_of(settings: &UiSettings) -> [[i32; 4]; 3] {
        [
            [
                settings.compass_margin_left(),
                settings.compass_margin_top(),
                settings.compass_margin_right(),
                settings.compass_margin_bottom(),
            ],
            [
                settings.logo_margin_left(),
                settings.logo_margin_top(),
                settings.logo_margin_right(),
                settings.logo_margin_bottom(),
            ],
            [
                settings.attribution_margin_left(),
                settings.attribution_margin_top(),
                settings.attribution_margin_right(),
                settings.attribution_margin_bottom(),
            ],
        ]
    }

    #[test]
    fn test_locked_gestures_ignore_every_request() {
        for kind in GestureKind::ALL {
            let mut view = view_with_density(1.0);
            view.lock_gesture(kind, true);

            for value in [false, true, false] {
                view.ui_settings_mut().set_gestures_enabled(kind, value);
                assert!(view.ui_settings().is_gestures_enabled(kind), "{kind} changed while locked");
            }
        }
    }

    #[test]
    fn test_unlocked_gestures_follow_setter() {
        let mut view = view_with_density(1.0);
        for kind in GestureKind::ALL {
            for value in [false, true] {
                view.ui_settings_mut().set_gestures_enabled(kind, value);
                assert_eq!(view.ui_settings().is_gestures_enabled(kind), value);
            }
        }
    }

    #[test]
    fn test_locked_options_survive_set_all() {
        let mut view = MapView::new(ChromePreset::Locked.resolve()).unwrap();
        view.ui_settings_mut().set_all_gestures_enabled(true);

        let settings = view.ui_settings();
        assert!(!settings.is_scroll_gestures_enabled());
        assert!(!settings.is_zoom_gestures_enabled());
        assert!(!settings.is_rotate_gestures_enabled());
        assert!(!settings.is_tilt_gestures_enabled());
        assert!(settings.is_zoom_controls_enabled());
    }

    #[test]
    fn test_attribution_tint() {
        let mut view = view_with_density(1.0);

        view.ui_settings_mut()
            .set_attribution_tint_color(Color32::from_rgba_premultiplied(0, 0, 0, 0));
        assert_eq!(
            view.ui_settings().attribution_tint_color(),
            Some(DEFAULT_ATTRIBUTION_TINT)
        );

        let orange = Color32::from_rgb(255, 140, 0);
        view.ui_settings_mut().set_attribution_tint_color(orange);
        assert_eq!(view.ui_settings().attribution_tint_color(), Some(orange));
    }

    #[test]
    fn test_margins_are_padding_inclusive() {
        let mut view = view_with_density(1.0);
        view.set_content_padding(Insets::new(4, 3, 2, 1));

        view.ui_settings_mut().set_compass_margins(10, 10, 10, 10);
        view.ui_settings_mut().set_logo_margins(0, 0, 0, 0);
        view.ui_settings_mut().set_attribution_margins(1, 1, 1, 1);

        assert_eq!(
            margins_of(view.ui_settings()),
            [[14, 13, 12, 11], [4, 3, 2, 1], [5, 4, 3, 2]]
        );
    }

    #[test]
    fn test_invalidate_is_idempotent_without_padding() {
        let mut view = view_with_density(1.5);
        let before = margins_of(view.ui_settings());

        view.ui_settings_mut().invalidate();
        let once = margins_of(view.ui_settings());
        view.ui_settings_mut().invalidate();

        assert_eq!(before, once);
        assert_eq!(once, margins_of(view.ui_settings()));
    }

    #[test]
    fn test_invalidate_under_padding_accumulates() {
        let mut view = view_with_density(1.0);
        view.set_content_padding(Insets::new(0, 0, 0, 20));
        let after_padding = view.ui_settings().logo_margin_bottom();
        assert_eq!(after_padding, 36);

        view.ui_settings_mut().invalidate();
        assert_eq!(view.ui_settings().logo_margin_bottom(), 56);
    }

    #[test]
    fn test_default_margins_scale_with_density() {
        for (ratio, compass, logo, attribution) in [
            (1.0, 10, 16, [76, 7, 7, 7]),
            (2.0, 20, 32, [152, 14, 14, 14]),
            (3.0, 30, 48, [228, 21, 21, 21]),
        ] {
            let view = view_with_density(ratio);
            assert_eq!(
                margins_of(view.ui_settings()),
                [[compass; 4], [logo; 4], attribution]
            );
        }
    }

    #[test]
    fn test_focal_point_round_trip() {
        let mut view = view_with_density(1.0);
        let point = Point::new(200.0, 150.0);

        view.ui_settings_mut().set_focal_point(Some(point));
        assert_eq!(view.ui_settings().focal_point(), Some(point));
        assert_eq!(view.gesture_focal_point(), Some(point));

        let decision = view.handle_gesture(&GestureType::Rotation {
            center: Point::new(10.0, 10.0),
            angle: 0.5,
        });
        assert_eq!(decision, GateDecision::Admitted { pivot: point });

        view.ui_settings_mut().set_focal_point(None);
        assert_eq!(view.gesture_focal_point(), None);
    }

    #[test]
    fn test_options_from_json() {
        let options = MapOptions::from_json_str(
            r#"{
                "pixel_ratio": 2.0,
                "compass_enabled": false,
                "logo_margins": { "left": 5, "top": 5, "right": 5, "bottom": 5 },
                "tilt_gestures_enabled": false
            }"#,
        )
        .unwrap();
        let mut view = MapView::new(options).unwrap();

        assert!(!view.ui_settings().is_compass_enabled());
        assert_eq!(view.ui_settings().logo_margin_left(), 5);
        assert_eq!(view.ui_settings().attribution_margin_left(), 152);

        view.ui_settings_mut().set_tilt_gestures_enabled(true);
        assert!(!view.ui_settings().is_tilt_gestures_enabled());
        assert!(view.is_gesture_locked(GestureKind::Tilt));
    }

    #[test]
    fn test_chrome_anchors() {
        let mut view = view_with_density(1.0);
        assert_eq!(view.ui_settings().compass_gravity(), Gravity::TOP_RIGHT);
        assert_eq!(view.ui_settings().logo_gravity(), Gravity::BOTTOM_LEFT);

        view.ui_settings_mut()
            .set_attribution_gravity(Gravity::BOTTOM | Gravity::CENTER_HORIZONTAL);
        assert!(view
            .ui_settings()
            .attribution_gravity()
            .contains(Gravity::CENTER_HORIZONTAL));

        view.ui_settings_mut().set_logo_enabled(false);
        assert!(!view.ui_settings().is_logo_enabled());
        assert_eq!(view.logo().borrow().visibility(), Visibility::Gone);
    }
}
