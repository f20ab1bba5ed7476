//! Plugin instance registry
//!
//! Guarantees at most one [`ParallaxInstance`] per element and routes
//! method calls to the right instance. Dispatch to an element with no
//! instance is a silent skip rather than an error - `apply` stays
//! chainable no matter what the targets look like. The skip is part of
//! the dispatch contract and is asserted by tests, not accidental.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use parallax_core::{ElementId, ElementStore, Viewport};

use crate::config::{ConfigError, ConfigPatch, ParallaxConfig};
use crate::instance::ParallaxInstance;

/// What an `apply` call should do to each target element
#[derive(Clone, Debug)]
pub enum PluginCall {
    /// Initialize elements that have no instance yet; elements that
    /// already have one are left untouched
    Init(ConfigPatch),
    /// Forward a method call to each element's instance
    Invoke(PluginMethod),
}

/// Methods dispatchable to an existing instance
#[derive(Clone, Debug, PartialEq)]
pub enum PluginMethod {
    /// Reserved initializer name; a guarded no-op through the dispatch
    /// path (re-initialization must go through [`PluginCall::Init`])
    Init,
    /// Tear the instance down and drop its registry entry
    Teardown,
    /// Replace the element's text content
    SetText(String),
}

/// Registry mapping elements to their plugin instances
///
/// Constructed over explicit element-store and viewport handles; there is
/// no ambient host lookup and no global state.
pub struct PluginRegistry {
    elements: Rc<RefCell<ElementStore>>,
    viewport: Rc<RefCell<Viewport>>,
    instances: FxHashMap<ElementId, ParallaxInstance>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("instances", &self.instances.len())
            .finish()
    }
}

impl PluginRegistry {
    /// Create a registry over the injected host capabilities
    pub fn new(elements: Rc<RefCell<ElementStore>>, viewport: Rc<RefCell<Viewport>>) -> Self {
        Self {
            elements,
            viewport,
            instances: FxHashMap::default(),
        }
    }

    /// Apply a plugin call to a set of target elements
    ///
    /// Returns the input slice unchanged so call sites can keep chaining
    /// off the same target set. The only error is a bad configuration,
    /// surfaced before any instance is constructed; per-element misses
    /// (no instance, element gone from the store) are silent skips.
    pub fn apply<'a>(
        &mut self,
        targets: &'a [ElementId],
        call: PluginCall,
    ) -> Result<&'a [ElementId], ConfigError> {
        match call {
            PluginCall::Init(patch) => {
                // Merge and validate once; a bad divisor constructs nothing
                let config = ParallaxConfig::merged(&patch)?;
                for &element in targets {
                    self.init_element(element, &config);
                }
            }
            PluginCall::Invoke(method) => {
                for &element in targets {
                    self.invoke(element, &method);
                }
            }
        }
        Ok(targets)
    }

    fn init_element(&mut self, element: ElementId, config: &ParallaxConfig) {
        if self.instances.contains_key(&element) {
            tracing::trace!("element {:?} already initialized, skipping", element);
            return;
        }
        if !self.elements.borrow().contains(element) {
            tracing::trace!("element {:?} not in store, skipping init", element);
            return;
        }
        let instance = ParallaxInstance::new(
            element,
            config.clone(),
            self.elements.clone(),
            self.viewport.clone(),
        );
        self.instances.insert(element, instance);
    }

    fn invoke(&mut self, element: ElementId, method: &PluginMethod) {
        if !self.instances.contains_key(&element) {
            tracing::trace!("dispatch to element {:?} with no instance, skipping", element);
            return;
        }
        match method {
            PluginMethod::Init => {
                tracing::trace!("ignoring reserved initializer dispatch for {:?}", element);
            }
            PluginMethod::Teardown => {
                // Teardown drops the registry entry along with the
                // instance's attached data; a later Init starts fresh.
                if let Some(mut instance) = self.instances.remove(&element) {
                    instance.teardown();
                }
            }
            PluginMethod::SetText(text) => {
                if let Some(instance) = self.instances.get(&element) {
                    instance.set_text(text);
                }
            }
        }
    }

    /// Look up the instance for an element
    pub fn instance(&self, element: ElementId) -> Option<&ParallaxInstance> {
        self.instances.get(&element)
    }

    /// Whether an element currently has an instance
    pub fn is_initialized(&self, element: ElementId) -> bool {
        self.instances.contains_key(&element)
    }

    /// Number of live instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// True if no element is initialized
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
