//! Page Motion entry point
//!
//! Waits for the document to be parsed, then installs every effect once.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AddEventListenerOptions, Document};

    use page_motion::{Settings, effects};

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Page Motion starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        ready(&document).await;

        let settings = Settings::load();
        if settings.reduced_motion {
            log::info!("Reduced motion requested, animations minimized");
        }

        effects::install_all(&document, &settings);

        log::info!("Page Motion running!");
    }

    /// Resolve once the DOM is parsed; immediately if that already happened
    async fn ready(document: &Document) {
        if document.ready_state() != "loading" {
            return;
        }
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let options = AddEventListenerOptions::new();
            options.set_once(true);
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                &resolve,
                &options,
            );
        });
        let _ = JsFuture::from(promise).await;
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Page Motion (native) starting...");
    log::info!("Effects need a browser DOM - build with trunk for the web version");

    println!("\nRunning easing checks...");
    check_easing();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn check_easing() {
    use page_motion::motion::{ScrollAnimation, ease_in_out_cubic};

    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);

    let anim = ScrollAnimation::new(0.0, 800.0, 600.0);
    assert_eq!(anim.position_at(0.0), 0.0);
    assert_eq!(anim.position_at(600.0), 800.0);

    println!("✓ Easing checks passed!");
}
