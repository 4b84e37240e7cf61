//! Heartword crossword application using egui/eframe.
//!
//! This is the main entry point for the native and web builds.

use heartword_app::HeartwordApp;

#[cfg(not(target_arch = "wasm32"))]
const WINDOW_TITLE: &str = "Heartword";

/// Window sized for the 11×11 board beside the clue columns.
#[cfg(not(target_arch = "wasm32"))]
fn native_options() -> eframe::NativeOptions {
    let viewport = eframe::egui::ViewportBuilder::default()
        .with_app_id("io.github.heartword")
        .with_title(WINDOW_TITLE)
        .with_inner_size((960.0, 720.0))
        .with_min_inner_size((560.0, 480.0))
        .with_icon(heartword_app::app_icon::heart_icon(64));
    eframe::NativeOptions {
        viewport,
        centered: true,
        persist_window: true,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Heartword, version={}",
        heartword_app::version::build_version()
    );

    eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(|cc| Ok(Box::new(HeartwordApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn install_panic_alert_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);

        let message = panic_info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "Heartword has crashed.\n\n{message}\n\nReloading the page may fix the issue.\n\nSee the developer console for details."
            ));
        }
    }));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    install_panic_alert_hook();

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    log::info!(
        "Starting Heartword WASM application, version={}",
        heartword_app::version::build_version()
    );

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(HeartwordApp::new(cc)))),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(()) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
