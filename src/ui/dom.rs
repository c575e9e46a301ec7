//! DOM wiring for the feedback form and board
//!
//! Form submit and pagination clicks run to completion on the UI thread, so
//! shared state is a plain `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{BannerTimer, EMPTY_TEXT, ERROR_CLASS, HIDDEN_CLASS, card_fields, ids};
use crate::pagination::{PageDirection, Paginator, RenderedPage};
use crate::persistence::FeedbackStore;
use crate::platform::{LocalStorage, MemoryStorage, StorageBackend};
use crate::record::FeedbackRecord;
use crate::settings::Settings;
use crate::submit::{FeedbackForm, SubmissionHandler, SubmitOutcome};
use crate::validate::{FeedbackField, FieldError};

type Backend = Box<dyn StorageBackend>;

/// App instance holding all per-page-load state
struct FeedbackApp {
    handler: SubmissionHandler<Backend>,
    pager: Paginator,
    banner_ms: u32,
    banner_timer: BannerTimer,
}

impl FeedbackApp {
    fn new(settings: &Settings) -> Self {
        let backend: Backend = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; feedback will not survive a reload", e);
                Box::new(MemoryStorage::new())
            }
        };
        let store = FeedbackStore::with_key(backend, settings.storage_key.clone());
        Self {
            handler: SubmissionHandler::new(store, settings.email_rule),
            pager: Paginator::new(settings.page_size),
            banner_ms: settings.success_banner_ms,
            banner_timer: BannerTimer::default(),
        }
    }

    /// Render the current page from storage
    fn paint_board(&self, document: &Document) {
        let page = self.pager.render(&self.handler.store().load());
        paint_page(document, &page);
    }
}

fn current_document() -> Option<Document> {
    web_sys::window()?.document()
}

fn set_hidden(el: &Element, hidden: bool) {
    let classes = el.class_list();
    let _ = if hidden {
        classes.add_1(HIDDEN_CLASS)
    } else {
        classes.remove_1(HIDDEN_CLASS)
    };
}

/// Paint a page into the list container, if there is one
fn paint_page(document: &Document, page: &RenderedPage) {
    let Some(container) = document.get_element_by_id(ids::FEEDBACK_LIST) else {
        log::debug!("No #{} on this page, skipping board", ids::FEEDBACK_LIST);
        return;
    };
    paint_records(document, &container, page);
    paint_controls(document, page);
}

fn paint_records(document: &Document, container: &Element, page: &RenderedPage) {
    container.set_inner_html("");

    if page.show_empty_placeholder {
        if let Ok(empty) = document.create_element("p") {
            let _ = empty.set_attribute("class", "empty-state");
            empty.set_text_content(Some(EMPTY_TEXT));
            let _ = container.append_child(&empty);
        }
        return;
    }

    for record in &page.records {
        if let Some(card) = build_card(document, record) {
            let _ = container.append_child(&card);
        }
    }
}

fn build_card(document: &Document, record: &FeedbackRecord) -> Option<Element> {
    let card = document.create_element("div").ok()?;
    let _ = card.set_attribute("class", "feedback-card");

    for (tag, class, text) in card_fields(record) {
        let el = document.create_element(tag).ok()?;
        let _ = el.set_attribute("class", class);
        el.set_text_content(Some(&text));
        let _ = card.append_child(&el);
    }

    Some(card)
}

fn paint_controls(document: &Document, page: &RenderedPage) {
    let hidden = !page.controls_visible;

    for id in [ids::PAGINATION, ids::PREV_BUTTON, ids::NEXT_BUTTON, ids::PAGE_INFO] {
        if let Some(el) = document.get_element_by_id(id) {
            set_hidden(&el, hidden);
        }
    }
    if hidden {
        return;
    }

    for (id, enabled) in [
        (ids::PREV_BUTTON, page.prev_enabled),
        (ids::NEXT_BUTTON, page.next_enabled),
    ] {
        if let Some(btn) = document.get_element_by_id(id) {
            let _ = if enabled {
                btn.remove_attribute("disabled")
            } else {
                btn.set_attribute("disabled", "")
            };
        }
    }

    if let Some(info) = document.get_element_by_id(ids::PAGE_INFO) {
        info.set_text_content(Some(&page.page_label()));
    }
}

/// Value of an `<input>` or `<textarea>`, empty if missing
fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn read_form(document: &Document) -> FeedbackForm {
    FeedbackForm::new(
        field_value(document, FeedbackField::Name.element_id()),
        field_value(document, FeedbackField::Email.element_id()),
        field_value(document, FeedbackField::Message.element_id()),
    )
}

fn clear_field_errors(document: &Document) {
    for field in FeedbackField::ALL {
        if let Some(el) = document.get_element_by_id(field.element_id()) {
            let _ = el.class_list().remove_1(ERROR_CLASS);
        }
        if let Some(slot) = document.get_element_by_id(field.error_slot_id()) {
            slot.set_text_content(None);
        }
    }
}

fn show_field_error(document: &Document, error: &FieldError) {
    if let Some(el) = document.get_element_by_id(error.field.element_id()) {
        let _ = el.class_list().add_1(ERROR_CLASS);
    }
    if let Some(slot) = document.get_element_by_id(error.field.error_slot_id()) {
        slot.set_text_content(Some(&error.message));
    }
}

/// Show the success banner and hide it again after `ms`, replacing any
/// hide still pending from an earlier submit
fn flash_success(document: &Document, ms: u32, timer: &mut BannerTimer) {
    let Some(banner) = document.get_element_by_id(ids::SUCCESS_BANNER) else {
        return;
    };
    set_hidden(&banner, false);

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(handle) = timer.take_pending() {
        window.clear_timeout_with_handle(handle);
    }

    let hide = Closure::once(move || set_hidden(&banner, true));
    if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.as_ref().unchecked_ref(),
        ms as i32,
    ) {
        timer.arm(handle);
    }
    hide.forget();
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn setup_form(document: &Document, app: Rc<RefCell<FeedbackApp>>) {
    let Some(form) = document
        .get_element_by_id(ids::FORM)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("No #{} on this page, skipping form", ids::FORM);
        return;
    };

    let form_clone = form.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
        event.prevent_default();
        let Some(document) = current_document() else {
            return;
        };

        clear_field_errors(&document);
        let values = read_form(&document);
        let outcome = app.borrow_mut().handler.submit(&values);

        match outcome {
            SubmitOutcome::Invalid(errors) => {
                for error in &errors {
                    show_field_error(&document, error);
                }
            }
            SubmitOutcome::Saved(_) => {
                form_clone.reset();
                let mut app = app.borrow_mut();
                let ms = app.banner_ms;
                flash_success(&document, ms, &mut app.banner_timer);
                app.paint_board(&document);
            }
            SubmitOutcome::NotSaved { .. } => {}
        }
    });
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_pagination(document: &Document, app: Rc<RefCell<FeedbackApp>>) {
    for (id, direction) in [
        (ids::PREV_BUTTON, PageDirection::Previous),
        (ids::NEXT_BUTTON, PageDirection::Next),
    ] {
        let Some(btn) = document.get_element_by_id(id) else {
            continue;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let page = {
                let mut a = app.borrow_mut();
                let list = a.handler.store().load();
                a.pager.turn_page(direction, &list)
            };
            if let Some(page) = page {
                if let Some(document) = current_document() {
                    paint_page(&document, &page);
                }
                scroll_to_top();
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire up whichever parts of the page are present
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Feedback board starting...");

    let Some(document) = current_document() else {
        log::error!("No document, nothing to do");
        return;
    };

    let settings = Settings::load();
    let app = Rc::new(RefCell::new(FeedbackApp::new(&settings)));

    setup_form(&document, app.clone());
    setup_pagination(&document, app.clone());
    app.borrow().paint_board(&document);

    log::info!("Feedback board ready");
}
