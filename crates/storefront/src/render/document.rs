//! Abstract page the cart renders into.

use core::fmt;
use std::rc::Rc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Identifies target elements on a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The element with this `id`.
    Id(String),
    /// Every element carrying this class.
    Class(String),
}

impl Selector {
    /// Select by element id.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Select by class name.
    #[must_use]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

/// A page whose elements can be updated.
///
/// Both methods return how many elements were updated; `0` means the target
/// is absent, which callers treat as "skip".
pub trait Document {
    /// Replace the text content of every matching element.
    fn set_text(&self, selector: &Selector, text: &str) -> usize;

    /// Replace the inner HTML of every matching element.
    fn set_html(&self, selector: &Selector, html: &str) -> usize;
}

impl<T: Document + ?Sized> Document for &T {
    fn set_text(&self, selector: &Selector, text: &str) -> usize {
        (**self).set_text(selector, text)
    }

    fn set_html(&self, selector: &Selector, html: &str) -> usize {
        (**self).set_html(selector, html)
    }
}

impl<T: Document + ?Sized> Document for Rc<T> {
    fn set_text(&self, selector: &Selector, text: &str) -> usize {
        (**self).set_text(selector, text)
    }

    fn set_html(&self, selector: &Selector, html: &str) -> usize {
        (**self).set_html(selector, html)
    }
}

impl<T: Document + ?Sized> Document for Arc<T> {
    fn set_text(&self, selector: &Selector, text: &str) -> usize {
        (**self).set_text(selector, text)
    }

    fn set_html(&self, selector: &Selector, html: &str) -> usize {
        (**self).set_html(selector, html)
    }
}

#[derive(Debug, Clone, Default)]
struct Element {
    id: Option<String>,
    classes: Vec<String>,
    content: String,
}

impl Element {
    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => self.classes.iter().any(|c| c == class),
        }
    }
}

/// An in-process page made of registered elements.
///
/// Clones share the same elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Arc<Mutex<Vec<Element>>>,
}

impl MemoryDocument {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element with an id and no classes.
    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.add_element(Some(id), &[]);
        self
    }

    /// Add an element with a class and no id.
    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.add_element(None, &[class]);
        self
    }

    /// Add an element.
    pub fn add_element(&self, id: Option<&str>, classes: &[&str]) {
        self.lock().push(Element {
            id: id.map(str::to_owned),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            content: String::new(),
        });
    }

    /// Content of the first element matching `selector`.
    #[must_use]
    pub fn content(&self, selector: &Selector) -> Option<String> {
        self.lock()
            .iter()
            .find(|element| element.matches(selector))
            .map(|element| element.content.clone())
    }

    /// Content of the element with `id`.
    #[must_use]
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.content(&Selector::id(id))
    }

    /// Content of every element carrying `class`.
    #[must_use]
    pub fn texts_of_class(&self, class: &str) -> Vec<String> {
        let selector = Selector::class(class);
        self.lock()
            .iter()
            .filter(|element| element.matches(&selector))
            .map(|element| element.content.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Element>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(&self, selector: &Selector, content: &str) -> usize {
        let mut updated = 0;
        for element in self.lock().iter_mut().filter(|e| e.matches(selector)) {
            content.clone_into(&mut element.content);
            updated += 1;
        }
        updated
    }
}

impl Document for MemoryDocument {
    fn set_text(&self, selector: &Selector, text: &str) -> usize {
        self.replace(selector, text)
    }

    fn set_html(&self, selector: &Selector, html: &str) -> usize {
        self.replace(selector, html)
    }
}
