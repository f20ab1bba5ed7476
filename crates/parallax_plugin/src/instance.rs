//! Per-element plugin instance
//!
//! One instance is one activation of the scroll-reactive behavior on one
//! element. Construction activates immediately - there is no separate start
//! call and no externally reachable constructed-but-inactive state. The
//! only transition after that is [`ParallaxInstance::teardown`], which is
//! terminal.

use std::cell::RefCell;
use std::rc::Rc;

use parallax_core::{ElementId, ElementStore, ListenerId, Viewport};

use crate::config::ParallaxConfig;
use crate::styler;

/// One activation of the plugin on one element
pub struct ParallaxInstance {
    element: ElementId,
    settings: ParallaxConfig,
    elements: Rc<RefCell<ElementStore>>,
    viewport: Rc<RefCell<Viewport>>,
    /// Styler registration; `None` once torn down
    listener: Option<ListenerId>,
}

impl std::fmt::Debug for ParallaxInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParallaxInstance")
            .field("element", &self.element)
            .field("settings", &self.settings)
            .field("active", &self.is_active())
            .finish()
    }
}

impl ParallaxInstance {
    /// Construct and activate
    ///
    /// Subscribes the scroll styler before returning. The config must
    /// already be validated (see [`ParallaxConfig::merged`]).
    pub fn new(
        element: ElementId,
        settings: ParallaxConfig,
        elements: Rc<RefCell<ElementStore>>,
        viewport: Rc<RefCell<Viewport>>,
    ) -> Self {
        let listener = styler::attach(
            &mut viewport.borrow_mut(),
            elements.clone(),
            element,
            settings.scroll_divisor,
        );
        tracing::trace!("activated parallax on element {:?}", element);

        Self {
            element,
            settings,
            elements,
            viewport,
            listener: Some(listener),
        }
    }

    /// The element this instance manages
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Resolved settings for this instance
    pub fn settings(&self) -> &ParallaxConfig {
        &self.settings
    }

    /// Whether the styler is still attached
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Replace the element's text content
    ///
    /// Extension-point method, reachable through registry dispatch. Silent
    /// no-op if the element has been removed from the store.
    pub fn set_text(&self, text: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(self.element) {
            el.text = Some(text.to_string());
        } else {
            tracing::trace!("set_text on removed element {:?}", self.element);
        }
    }

    /// Detach the scroll listener and clear plugin-written style
    ///
    /// Idempotent; the second and later calls do nothing.
    pub fn teardown(&mut self) {
        let Some(listener) = self.listener.take() else {
            return;
        };
        self.viewport.borrow_mut().unsubscribe(listener);
        if let Some(el) = self.elements.borrow_mut().get_mut(self.element) {
            el.style.margin_bottom = None;
        }
        tracing::trace!("tore down parallax on element {:?}", self.element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigPatch;
    use parallax_core::Element;

    fn fixture() -> (Rc<RefCell<ElementStore>>, Rc<RefCell<Viewport>>, ElementId) {
        let elements = Rc::new(RefCell::new(ElementStore::new()));
        let viewport = Rc::new(RefCell::new(Viewport::new()));
        let el = elements.borrow_mut().insert(Element::new());
        (elements, viewport, el)
    }

    fn config(divisor: f32) -> ParallaxConfig {
        ParallaxConfig::merged(&ConfigPatch::new().scroll_divisor(divisor)).unwrap()
    }

    #[test]
    fn test_construction_activates() {
        let (elements, viewport, el) = fixture();
        let instance = ParallaxInstance::new(el, config(2.0), elements.clone(), viewport.clone());

        assert!(instance.is_active());
        viewport.borrow_mut().set_scroll_top(100.0);
        assert_eq!(
            elements.borrow().get(el).unwrap().style.margin_bottom.as_deref(),
            Some("50% -50px")
        );
    }

    #[test]
    fn test_teardown_detaches_and_clears() {
        let (elements, viewport, el) = fixture();
        let mut instance =
            ParallaxInstance::new(el, config(1.0), elements.clone(), viewport.clone());

        viewport.borrow_mut().set_scroll_top(10.0);
        instance.teardown();

        assert!(!instance.is_active());
        assert!(elements.borrow().get(el).unwrap().style.margin_bottom.is_none());

        // Further scrolls no longer touch the element
        viewport.borrow_mut().set_scroll_top(50.0);
        assert!(elements.borrow().get(el).unwrap().style.margin_bottom.is_none());
        assert_eq!(viewport.borrow().listener_count(), 0);
    }

    #[test]
    fn test_teardown_is_idempotent() {
        let (elements, viewport, el) = fixture();
        let mut instance = ParallaxInstance::new(el, config(1.0), elements, viewport.clone());

        instance.teardown();
        instance.teardown();
        assert_eq!(viewport.borrow().listener_count(), 0);
    }

    #[test]
    fn test_set_text() {
        let (elements, viewport, el) = fixture();
        let instance = ParallaxInstance::new(el, config(1.0), elements.clone(), viewport);

        instance.set_text("updated");
        assert_eq!(elements.borrow().get(el).unwrap().text.as_deref(), Some("updated"));
    }

    #[test]
    fn test_instances_do_not_interfere() {
        let elements = Rc::new(RefCell::new(ElementStore::new()));
        let viewport = Rc::new(RefCell::new(Viewport::new()));
        let a = elements.borrow_mut().insert(Element::new());
        let b = elements.borrow_mut().insert(Element::new());

        let _ia = ParallaxInstance::new(a, config(2.0), elements.clone(), viewport.clone());
        let _ib = ParallaxInstance::new(b, config(5.0), elements.clone(), viewport.clone());

        viewport.borrow_mut().set_scroll_top(100.0);

        let store = elements.borrow();
        assert_eq!(store.get(a).unwrap().style.margin_bottom.as_deref(), Some("50% -50px"));
        assert_eq!(store.get(b).unwrap().style.margin_bottom.as_deref(), Some("50% -20px"));
    }
}
