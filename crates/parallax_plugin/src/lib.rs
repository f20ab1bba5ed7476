//! Parallax plugin
//!
//! Attaches scroll-reactive styling to host elements. On every viewport
//! scroll update, each managed element's bottom margin is recomputed as
//! `"50% {offset}px"` with `offset = -(scroll_top / divisor)`.
//!
//! The plugin follows an instance-per-element model:
//!
//! - [`PluginRegistry`] guarantees at most one instance per element and
//!   routes [`PluginMethod`] calls to the right instance
//! - [`ParallaxInstance`] is one activation: constructed, immediately
//!   active, torn down explicitly
//! - [`ParallaxConfig`] / [`ConfigPatch`] handle default-option merging
//!   with fail-fast divisor validation
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use parallax_core::{Element, ElementStore, Viewport};
//! use parallax_plugin::prelude::*;
//!
//! let elements = Rc::new(RefCell::new(ElementStore::new()));
//! let viewport = Rc::new(RefCell::new(Viewport::new()));
//! let el = elements.borrow_mut().insert(Element::new());
//!
//! let mut registry = PluginRegistry::new(elements.clone(), viewport.clone());
//! registry
//!     .apply(&[el], PluginCall::Init(ConfigPatch::new().scroll_divisor(2.0)))
//!     .unwrap();
//!
//! viewport.borrow_mut().set_scroll_top(100.0);
//! assert_eq!(
//!     elements.borrow().get(el).unwrap().style.margin_bottom.as_deref(),
//!     Some("50% -50px"),
//! );
//! ```

pub mod config;
pub mod instance;
pub mod registry;

mod styler;

pub use config::{ConfigError, ConfigPatch, ParallaxConfig};
pub use instance::ParallaxInstance;
pub use registry::{PluginCall, PluginMethod, PluginRegistry};

/// Common imports for plugin callers
pub mod prelude {
    pub use crate::config::{ConfigError, ConfigPatch, ParallaxConfig};
    pub use crate::instance::ParallaxInstance;
    pub use crate::registry::{PluginCall, PluginMethod, PluginRegistry};
}
