//! Scroll-reactive margin styler
//!
//! Each managed element gets one listener on the viewport (not on the
//! element). The listener runs synchronously on every scroll update with no
//! throttling or frame coalescing - offset writes track the scroll signal
//! exactly, in delivery order.

use std::cell::RefCell;
use std::rc::Rc;

use parallax_core::{ElementId, ElementStore, ListenerId, Viewport};

/// Compute the margin style value for a scroll offset
///
/// The offset moves opposite to the scroll direction, scaled down by the
/// divisor: `-(scroll_top / divisor)`. The horizontal part is fixed at 50%.
pub(crate) fn margin_for(scroll_top: f32, divisor: f32) -> String {
    let offset = -(scroll_top / divisor);
    // Negating a zero quotient gives -0, which would print as "-0px"
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("50% {offset}px")
}

/// Attach the styler for one element to the viewport
///
/// Returns the listener registration so the caller can detach it on
/// teardown. Scroll updates for elements that have since been removed from
/// the store are ignored.
pub(crate) fn attach(
    viewport: &mut Viewport,
    elements: Rc<RefCell<ElementStore>>,
    element: ElementId,
    divisor: f32,
) -> ListenerId {
    viewport.subscribe(Rc::new(move |event| {
        let mut store = elements.borrow_mut();
        match store.get_mut(element) {
            Some(el) => {
                el.style.margin_bottom = Some(margin_for(event.scroll_top, divisor));
            }
            None => {
                tracing::trace!("scroll update for removed element {:?}", element);
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_core::Element;

    #[test]
    fn test_margin_format() {
        assert_eq!(margin_for(100.0, 2.0), "50% -50px");
        assert_eq!(margin_for(0.0, 1.0), "50% 0px");
        assert_eq!(margin_for(30.0, 3.0), "50% -10px");
    }

    #[test]
    fn test_margin_moves_opposite_to_scroll() {
        assert_eq!(margin_for(-80.0, 4.0), "50% 20px");
    }

    #[test]
    fn test_attach_writes_margin_on_scroll() {
        let elements = Rc::new(RefCell::new(ElementStore::new()));
        let el = elements.borrow_mut().insert(Element::new());
        let mut viewport = Viewport::new();

        attach(&mut viewport, elements.clone(), el, 2.0);
        viewport.set_scroll_top(100.0);

        assert_eq!(
            elements.borrow().get(el).unwrap().style.margin_bottom.as_deref(),
            Some("50% -50px")
        );
    }

    #[test]
    fn test_scroll_after_element_removed_is_ignored() {
        let elements = Rc::new(RefCell::new(ElementStore::new()));
        let el = elements.borrow_mut().insert(Element::new());
        let mut viewport = Viewport::new();

        attach(&mut viewport, elements.clone(), el, 1.0);
        elements.borrow_mut().remove(el);

        // Must not panic or resurrect state
        viewport.set_scroll_top(40.0);
        assert!(elements.borrow().is_empty());
    }
}
