//! Modal dialog registry.
//!
//! [`ModalManager`] is the single owner of which modals exist and which are
//! open. Anything that cares about a modal's visibility (a carousel nested
//! inside it, for instance) subscribes here instead of watching the DOM.

use std::collections::BTreeMap;

/// Projection of modal state onto the page.
pub trait ModalView {
    /// `active` class and `aria-hidden` for one modal
    fn show_modal(&mut self, id: &str, open: bool);

    /// Prevent the page behind from scrolling while any modal is open
    fn lock_body_scroll(&mut self, locked: bool);

    /// Scroll the modal's content pane back to the top
    fn reset_content_scroll(&mut self, id: &str);
}

type VisibilityListener = Box<dyn FnMut(bool)>;

#[derive(Default)]
struct ModalEntry {
    open: bool,
    listeners: Vec<VisibilityListener>,
}

pub struct ModalManager<V: ModalView> {
    view: V,
    modals: BTreeMap<String, ModalEntry>,
}

impl<V: ModalView> ModalManager<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            modals: BTreeMap::new(),
        }
    }

    /// Add a modal to the registry, closed. Re-registering is a no-op.
    pub fn register(&mut self, id: impl Into<String>) {
        self.modals.entry(id.into()).or_default();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modals.contains_key(id)
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.modals.get(id).is_some_and(|m| m.open)
    }

    pub fn any_open(&self) -> bool {
        self.modals.values().any(|m| m.open)
    }

    /// Ids of currently open modals, in id order
    pub fn open_ids(&self) -> Vec<String> {
        self.modals
            .iter()
            .filter(|(_, m)| m.open)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Call `listener` with the new visibility every time `id` opens or
    /// closes. Returns `false` for an unknown modal.
    pub fn subscribe(&mut self, id: &str, listener: impl FnMut(bool) + 'static) -> bool {
        let Some(entry) = self.modals.get_mut(id) else {
            tracing::debug!(modal = id, "subscribe to unknown modal");
            return false;
        };
        entry.listeners.push(Box::new(listener));
        true
    }

    /// Open `id`. Unknown ids are ignored and return `false`.
    pub fn open(&mut self, id: &str) -> bool {
        if !self.set_open(id, true) {
            return false;
        }
        self.view.reset_content_scroll(id);
        true
    }

    /// Close `id`. Returns `false` if unknown or already closed.
    pub fn close(&mut self, id: &str) -> bool {
        self.set_open(id, false)
    }

    /// Close every open modal (Escape key)
    pub fn close_all(&mut self) -> usize {
        let ids = self.open_ids();
        for id in &ids {
            self.close(id);
        }
        ids.len()
    }

    fn set_open(&mut self, id: &str, open: bool) -> bool {
        let Some(entry) = self.modals.get_mut(id) else {
            tracing::debug!(modal = id, open, "unknown modal");
            return false;
        };
        let changed = entry.open != open;
        if !changed && !open {
            return false;
        }
        entry.open = open;

        self.view.show_modal(id, open);
        let locked = self.any_open();
        self.view.lock_body_scroll(locked);

        if changed {
            tracing::debug!(modal = id, open, "modal visibility changed");
            if let Some(entry) = self.modals.get_mut(id) {
                for listener in &mut entry.listeners {
                    listener(open);
                }
            }
        }
        true
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct TestView {
        shown: Vec<(String, bool)>,
        locked: Vec<bool>,
        scroll_resets: Vec<String>,
    }

    impl ModalView for TestView {
        fn show_modal(&mut self, id: &str, open: bool) {
            self.shown.push((id.to_string(), open));
        }

        fn lock_body_scroll(&mut self, locked: bool) {
            self.locked.push(locked);
        }

        fn reset_content_scroll(&mut self, id: &str) {
            self.scroll_resets.push(id.to_string());
        }
    }

    fn manager(ids: &[&str]) -> ModalManager<TestView> {
        let mut manager = ModalManager::new(TestView::default());
        for id in ids {
            manager.register(*id);
        }
        manager
    }

    #[test]
    fn test_open_and_close() {
        let mut m = manager(&["modalEquipo"]);
        assert!(m.open("modalEquipo"));
        assert!(m.is_open("modalEquipo"));
        assert_eq!(m.view().shown, vec![("modalEquipo".to_string(), true)]);
        assert_eq!(m.view().locked, vec![true]);
        assert_eq!(m.view().scroll_resets, vec!["modalEquipo".to_string()]);

        assert!(m.close("modalEquipo"));
        assert!(!m.is_open("modalEquipo"));
        assert_eq!(m.view().locked, vec![true, false]);
    }

    #[test]
    fn test_unknown_modal_is_ignored() {
        let mut m = manager(&["modalEquipo"]);
        assert!(!m.open("modalNope"));
        assert!(!m.close("modalNope"));
        assert!(!m.subscribe("modalNope", |_| {}));
        assert!(m.view().shown.is_empty());
        assert!(m.view().locked.is_empty());
    }

    #[test]
    fn test_close_when_closed_does_nothing() {
        let mut m = manager(&["a"]);
        assert!(!m.close("a"));
        assert!(m.view().shown.is_empty());
    }

    #[test]
    fn test_reopen_rescrolls_without_renotifying() {
        let mut m = manager(&["a"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        m.subscribe("a", move |v| sink.borrow_mut().push(v));

        m.open("a");
        m.open("a");
        assert_eq!(*seen.borrow(), vec![true]);
        assert_eq!(m.view().scroll_resets.len(), 2);
    }

    #[test]
    fn test_subscribers_see_transitions() {
        let mut m = manager(&["a", "b"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        assert!(m.subscribe("a", move |v| sink.borrow_mut().push(v)));

        m.open("b");
        m.open("a");
        m.close("a");
        m.close("b");
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_body_stays_locked_while_any_open() {
        let mut m = manager(&["a", "b"]);
        m.open("a");
        m.open("b");
        m.close("a");
        assert_eq!(m.view().locked, vec![true, true, true]);
        m.close("b");
        assert_eq!(m.view().locked.last(), Some(&false));
    }

    #[test]
    fn test_close_all() {
        let mut m = manager(&["a", "b", "c"]);
        m.open("c");
        m.open("a");
        assert_eq!(m.open_ids(), vec!["a".to_string(), "c".to_string()]);
        assert_eq!(m.close_all(), 2);
        assert!(!m.any_open());
        assert_eq!(m.close_all(), 0);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut m = manager(&["a"]);
        m.open("a");
        m.register("a");
        assert!(m.is_open("a"));
        assert!(m.contains("a"));
        assert!(!m.contains("b"));
    }
}
