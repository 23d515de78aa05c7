#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use similarity_business::SimilarityConfig;
use similarity_ui::state::State;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    // A missing .env file is fine; the process environment still applies.
    dotenvy::dotenv().ok();

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Product Similarity",
        native_options,
        Box::new(|_cc| {
            let state = State::new(SimilarityConfig::from_env());
            let app = similarity_ui::SimilarityApp::new(state);
            Ok(Box::new(app))
        }),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("No document to mount the app in");
            return;
        };

        let canvas = match document
            .get_element_by_id("egui_canvas")
            .map(|element| element.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            Some(Err(_)) => {
                log::error!("egui_canvas was not a HtmlCanvasElement");
                return;
            }
            None => {
                log::error!("Failed to find egui_canvas");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let state = State::new(SimilarityConfig::default());
                    let app = similarity_ui::SimilarityApp::new(state);
                    Ok(Box::new(app))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    log::error!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}
