//! Element storage with versioned IDs
//!
//! Elements live in a [`SlotMap`] keyed by [`ElementId`]. Keys are
//! versioned: once an element is removed its id never resolves again, even
//! if the slot is reused. Anything holding an `ElementId` therefore holds a
//! weak reference - lookups degrade to `None` rather than aliasing a new
//! element.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Unique identifier for an element
    pub struct ElementId;
}

/// Visual style properties written by plugins
///
/// All properties are optional - only properties a plugin has actually set
/// are present, so clearing plugin state is just resetting fields to `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementStyle {
    /// Bottom margin as a literal style value (e.g. `"50% -12px"`)
    pub margin_bottom: Option<String>,
}

impl ElementStyle {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no property is set
    pub fn is_empty(&self) -> bool {
        self.margin_bottom.is_none()
    }
}

/// One element managed by the host
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Text content (if any)
    pub text: Option<String>,
    /// Style properties written by plugins
    pub style: ElementStyle,
}

impl Element {
    /// Create an empty element
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element with initial text content
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            style: ElementStyle::new(),
        }
    }
}

/// Storage for all live elements
#[derive(Debug, Default)]
pub struct ElementStore {
    elements: SlotMap<ElementId, Element>,
}

impl ElementStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
        }
    }

    /// Insert an element, returning its id
    pub fn insert(&mut self, element: Element) -> ElementId {
        self.elements.insert(element)
    }

    /// Remove an element, returning it if it was present
    ///
    /// The id is invalidated; later lookups with it return `None`.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(id)
    }

    /// Look up an element by id
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Look up an element mutably by id
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Check whether an id still resolves
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if no elements are stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
