use anyhow::Context;
use maplet_chrome::prelude::*;

/// Prints where the chrome of a map view ends up for a given options file.
///
/// Usage: `maplet-chrome-app [options.json] [padding-top]`
fn main() -> anyhow::Result<()> {
    maplet_chrome::init_debug_logging();

    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => MapOptions::from_json_file(&path)
            .with_context(|| format!("failed to load map options from {path}"))?,
        None => ChromePreset::Standard.resolve(),
    };
    let padding_top: i32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("padding-top must be an integer, got {raw}"))?,
        None => 0,
    };

    let mut view = MapView::new(options)?;
    if padding_top != 0 {
        view.set_content_padding(Insets::new(0, padding_top, 0, 0));
    }

    report(view.ui_settings());
    Ok(())
}

fn report(settings: &UiSettings) {
    log::info!("map view {}x{} px", settings.width(), settings.height());
    log::info!(
        "compass: enabled={} gravity={:?} margins=({}, {}, {}, {}) fade_north={}",
        settings.is_compass_enabled(),
        settings.compass_gravity(),
        settings.compass_margin_left(),
        settings.compass_margin_top(),
        settings.compass_margin_right(),
        settings.compass_margin_bottom(),
        settings.is_compass_fade_when_facing_north()
    );
    log::info!(
        "logo: enabled={} gravity={:?} margins=({}, {}, {}, {})",
        settings.is_logo_enabled(),
        settings.logo_gravity(),
        settings.logo_margin_left(),
        settings.logo_margin_top(),
        settings.logo_margin_right(),
        settings.logo_margin_bottom()
    );
    log::info!(
        "attribution: enabled={} gravity={:?} margins=({}, {}, {}, {}) tint={:?}",
        settings.is_attribution_enabled(),
        settings.attribution_gravity(),
        settings.attribution_margin_left(),
        settings.attribution_margin_top(),
        settings.attribution_margin_right(),
        settings.attribution_margin_bottom(),
        settings.attribution_tint_color()
    );

    for kind in GestureKind::ALL {
        log::info!(
            "{} gestures: {}",
            kind,
            if settings.is_gestures_enabled(kind) {
                "enabled"
            } else {
                "disabled"
            }
        );
    }
    log::info!(
        "zoom controls: {}, deselect markers on tap: {}",
        settings.is_zoom_controls_enabled(),
        settings.is_deselect_markers_on_tap()
    );
}
