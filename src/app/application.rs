//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;
use crate::utils::config_store;

actions!(vigia, [Quit]);

/// Run the Vigía dashboard application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx);
        cx.set_global(entities.clone());

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();

        // Initialize service hub
        let service_hub = ServiceHub::new(event_tx.clone());

        // Endpoints come from local storage; defaults are written on first run
        let config = match config_store::load_config::<AppConfig>("config.json") {
            Ok(config) => {
                if let Err(err) = config_store::save_config("config.json", &config) {
                    service_hub.log(AppEvent::warn(format!("Failed to save config: {err}")));
                }
                config
            }
            Err(err) => {
                service_hub.log(AppEvent::warn(format!("Failed to load config: {err}")));
                AppConfig::default()
            }
        };

        // Start the polling loops immediately
        service_hub.start(config);
        cx.set_global(service_hub);

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1280.0), px(860.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Vigía")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), event_rx, cx))
        })
        .expect("Failed to open main window");

        cx.activate(true);
    });
}
