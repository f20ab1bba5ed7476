//! Viewport scroll signal
//!
//! The viewport owns the current scroll offset and broadcasts every change
//! to its listeners. Dispatch is synchronous and strictly in registration
//! order; there is no throttling, batching, or frame coalescing - every
//! `set_scroll_top` call reaches every listener before it returns.

use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a scroll listener registration
    pub struct ListenerId;
}

/// Scroll state delivered to listeners
#[derive(Clone, Copy, Debug)]
pub struct ScrollEvent {
    /// Current viewport scroll offset in pixels (0 = top)
    pub scroll_top: f32,
}

/// Callback for scroll updates
///
/// Uses Rc since dispatch is single-threaded.
pub type ScrollCallback = Rc<dyn Fn(&ScrollEvent)>;

/// The viewport scroll signal
///
/// A single broadcast source shared by every listener; listeners read the
/// signal but never mutate the viewport from inside dispatch.
#[derive(Default)]
pub struct Viewport {
    scroll_top: f32,
    listeners: SlotMap<ListenerId, ScrollCallback>,
    /// Dispatch order (slotmap iteration order is unspecified)
    order: SmallVec<[ListenerId; 4]>,
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("scroll_top", &self.scroll_top)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Viewport {
    /// Create a viewport at scroll offset 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in pixels
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Register a scroll listener
    ///
    /// Listeners fire in registration order on every subsequent scroll
    /// update. Registration does not deliver the current offset.
    pub fn subscribe(&mut self, callback: ScrollCallback) -> ListenerId {
        let id = self.listeners.insert(callback);
        self.order.push(id);
        id
    }

    /// Detach a scroll listener
    ///
    /// Returns true if the listener was still registered. Detaching twice
    /// is a no-op.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_none() {
            tracing::trace!("unsubscribe for unknown listener {:?}", id);
            return false;
        }
        self.order.retain(|l| *l != id);
        true
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Update the scroll offset and dispatch to all listeners
    ///
    /// Dispatch happens even if the offset is unchanged - the host decides
    /// when a scroll event occurred, the viewport just relays it.
    pub fn set_scroll_top(&mut self, scroll_top: f32) {
        self.scroll_top = scroll_top;
        let event = ScrollEvent { scroll_top };

        // Snapshot the callbacks so dispatch sees a stable listener set
        let callbacks: Vec<ScrollCallback> = self
            .order
            .iter()
            .filter_map(|id| self.listeners.get(*id).cloned())
            .collect();

        for callback in callbacks {
            callback(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_subscribe_and_dispatch() {
        let mut viewport = Viewport::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        viewport.subscribe(Rc::new(move |e| {
            seen_clone.borrow_mut().push(e.scroll_top);
        }));

        viewport.set_scroll_top(10.0);
        viewport.set_scroll_top(25.5);

        assert_eq!(*seen.borrow(), vec![10.0, 25.5]);
        assert_eq!(viewport.scroll_top(), 25.5);
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let mut viewport = Viewport::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let log = log.clone();
            viewport.subscribe(Rc::new(move |_| {
                log.borrow_mut().push(tag);
            }));
        }

        viewport.set_scroll_top(1.0);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut viewport = Viewport::new();
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        let id = viewport.subscribe(Rc::new(move |_| {
            *count_clone.borrow_mut() += 1;
        }));

        viewport.set_scroll_top(5.0);
        assert!(viewport.unsubscribe(id));
        viewport.set_scroll_top(10.0);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_twice_is_noop() {
        let mut viewport = Viewport::new();
        let id = viewport.subscribe(Rc::new(|_| {}));

        assert!(viewport.unsubscribe(id));
        assert!(!viewport.unsubscribe(id));
    }

    #[test]
    fn test_dispatch_fires_even_when_offset_unchanged() {
        let mut viewport = Viewport::new();
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        viewport.subscribe(Rc::new(move |_| {
            *count_clone.borrow_mut() += 1;
        }));

        viewport.set_scroll_top(0.0);
        viewport.set_scroll_top(0.0);
        assert_eq!(*count.borrow(), 2);
    }
}
