use gpui::*;
use gpui_component::Root;

use folio::app::{PortfolioShell, Quit};
use folio::settings::ThemeSettingsStore;

/// Application entry point.
///
/// Bootstraps the GPUI application with:
/// 1. Asset loading via gpui-component-assets
/// 2. gpui-component initialization (required for Root and the theme system)
/// 3. The persisted theme preference
/// 4. Global action handlers and keybindings
/// 5. Window creation with Root wrapper for gpui-component composition
fn main() {
    // Initialize tracing for development debugging
    tracing_subscriber::fmt::init();

    // Create application with bundled assets
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(|cx| {
        // Initialize gpui-component - REQUIRED before any Root usage
        gpui_component::init(cx);

        // Apply the last chosen theme mode before the first frame.
        let settings_store = ThemeSettingsStore::load();
        settings_store.settings().apply(cx);

        // Quit action: cleanly shut down the application
        cx.on_action(|_: &Quit, cx| {
            cx.quit();
        });

        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        // Spawn async window creation to ensure all initialization is complete
        cx.spawn(async move |cx| {
            cx.update(|cx| {
                let options = WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                        None,
                        size(px(1200.), px(800.)),
                        cx,
                    ))),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        // Align traffic lights with Zed-style top titlebar inset.
                        traffic_light_position: Some(point(px(9.), px(9.))),
                        ..Default::default()
                    }),
                    // Match Zed-style client decorations on Linux/FreeBSD so the
                    // app draws its own title area instead of a system titlebar.
                    #[cfg(any(target_os = "linux", target_os = "freebsd"))]
                    window_decorations: Some(WindowDecorations::Client),
                    #[cfg(not(any(target_os = "linux", target_os = "freebsd")))]
                    window_decorations: None,
                    ..Default::default()
                };

                // Open the main window with Root wrapper
                // Root is REQUIRED by gpui-component for notifications/dialogs
                cx.open_window(options, |window, cx| {
                    let shell = cx.new(|cx| PortfolioShell::new(settings_store, window, cx));

                    cx.new(|cx| Root::new(shell, window, cx))
                })
                .expect("failed to open main window");

                // Activate the application
                cx.activate(true);
            })
        })
        .detach();
    });
}
