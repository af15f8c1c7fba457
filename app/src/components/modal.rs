//! Modal dialogs: DOM projection, delegated close handling and triggers.

use std::cell::RefCell;
use std::rc::Rc;

use autenticos_core::{ModalManager, ModalView};
use autenticos_types::ModalsConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

use crate::dom;

pub type SharedModals = Rc<RefCell<ModalManager<DomModals>>>;

pub struct DomModals {
    doc: Document,
}

impl ModalView for DomModals {
    fn show_modal(&mut self, id: &str, open: bool) {
        let Some(modal) = dom::by_id(&self.doc, id) else {
            return;
        };
        dom::set_class(&modal, "active", open);
        dom::set_attr(&modal, "aria-hidden", if open { "false" } else { "true" });
    }

    fn lock_body_scroll(&mut self, locked: bool) {
        dom::set_body_scroll_locked(locked);
    }

    fn reset_content_scroll(&mut self, id: &str) {
        if let Some(content) =
            dom::by_id(&self.doc, id).and_then(|m| dom::query_in(&m, ".modal__content"))
        {
            content.set_scroll_top(0);
        }
    }
}

thread_local! {
    /// Backs the exported `openModal` / `closeModal` for inline markup handlers
    static PAGE_MODALS: RefCell<Option<SharedModals>> = const { RefCell::new(None) };
}

/// Build the registry from every `.modal[id]` and wire up closing and
/// trigger handlers.
pub fn mount(doc: &Document, config: &ModalsConfig) -> SharedModals {
    let mut manager = ModalManager::new(DomModals { doc: doc.clone() });
    for modal in dom::query_all(doc, ".modal[id]") {
        manager.register(modal.id());
    }
    let modals = Rc::new(RefCell::new(manager));

    {
        let modals = modals.clone();
        dom::listen(doc, "keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                modals.borrow_mut().close_all();
            }
        });
    }

    {
        let modals = modals.clone();
        dom::listen(doc, "click", move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Some(id) = modal_to_close(&target) {
                modals.borrow_mut().close(&id);
            }
        });
    }

    for trigger in &config.triggers {
        let Some(button) = dom::by_id(doc, &trigger.trigger) else {
            continue;
        };
        let modals = modals.clone();
        let modal_id = trigger.modal.clone();
        dom::listen(&button, "click", move |_: MouseEvent| {
            modals.borrow_mut().open(&modal_id);
        });
    }

    PAGE_MODALS.with(|slot| *slot.borrow_mut() = Some(modals.clone()));
    modals
}

/// Which modal a click on `target` dismisses: the backdrop's parent, or the
/// modal around a close or back button.
fn modal_to_close(target: &Element) -> Option<String> {
    if dom::has_class(target, "modal__backdrop") {
        return target.parent_element().map(|p| p.id());
    }
    let is_dismiss = [".modal__close", ".modal__back"]
        .iter()
        .any(|sel| matches!(target.closest(sel), Ok(Some(_))));
    if !is_dismiss {
        return None;
    }
    target.closest(".modal").ok().flatten().map(|m| m.id())
}

fn with_page_modals(f: impl FnOnce(&mut ModalManager<DomModals>) -> bool) -> bool {
    PAGE_MODALS.with(|slot| {
        let Some(modals) = slot.borrow().clone() else {
            tracing::warn!("modal called before the page was mounted");
            return false;
        };
        let Ok(mut modals) = modals.try_borrow_mut() else {
            return false;
        };
        f(&mut modals)
    })
}

/// Exported from the wasm module as `openModal(id)`. Inline `onclick`
/// handlers only see it once the loader script assigns it onto `window`.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(id: &str) -> bool {
    with_page_modals(|m| m.open(id))
}

/// Exported from the wasm module as `closeModal(id)`. Like `openModal`, it
/// must be assigned onto `window` by the loader for inline handlers.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(id: &str) -> bool {
    with_page_modals(|m| m.close(id))
}
