//! Feedback Board entry point
//!
//! The board is a browser app; the native binary only exercises the core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    feedback_board::ui::dom::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use feedback_board::platform::MemoryStorage;
    use feedback_board::{FeedbackForm, FeedbackStore, Paginator, Settings, SubmissionHandler};

    env_logger::init();
    log::info!("Feedback Board (native) starting...");
    log::info!("Native mode has no DOM - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let store = FeedbackStore::with_key(MemoryStorage::new(), settings.storage_key.clone());
    let mut handler = SubmissionHandler::new(store, settings.email_rule);

    let outcome = handler.submit(&FeedbackForm::new(
        "Native",
        "native@example.com",
        "Hello from <native>",
    ));
    log::info!("Sample submit saved: {}", outcome.is_saved());

    let page = Paginator::new(settings.page_size).render(&handler.store().load());
    for record in &page.records {
        println!("{} <{}> {}: {}", record.name, record.email, record.date, record.message);
    }
    println!("{}", page.page_label());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
