//! Parallax host primitives
//!
//! This crate provides the capabilities the parallax plugin binds to:
//!
//! - **Element storage**: slotmap-backed elements with mutable text and
//!   style state, addressed by versioned [`ElementId`] keys
//! - **Viewport scroll signal**: a single scroll offset broadcast to an
//!   ordered set of listeners
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use parallax_core::{Element, ElementStore, Viewport};
//!
//! let mut store = ElementStore::new();
//! let el = store.insert(Element::new());
//!
//! let mut viewport = Viewport::new();
//! let listener = viewport.subscribe(Rc::new(move |e| {
//!     println!("scrolled to {}", e.scroll_top);
//! }));
//!
//! viewport.set_scroll_top(120.0);
//! viewport.unsubscribe(listener);
//! # let _ = el;
//! ```

pub mod element;
pub mod viewport;

pub use element::{Element, ElementId, ElementStore, ElementStyle};
pub use viewport::{ListenerId, ScrollCallback, ScrollEvent, Viewport};
