//! Attributes and the case-insensitive attribute map.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::error::InvalidName;

static EMPTY: LazyLock<AttributeList> = LazyLock::new(|| AttributeList {
    map: Arc::new(HashMap::new()),
});

/// A single `name` or `name="value"` pair.
///
/// A supplied value has every literal `"` replaced with `&quot;` at
/// construction, once; serialization writes the stored value verbatim.
#[derive(Clone, Debug)]
pub struct Attribute {
    inner: Arc<AttributeInner>,
}

#[derive(Debug)]
struct AttributeInner {
    name: Arc<str>,
    value: Option<Box<str>>,
}

impl Attribute {
    /// Returns a new attribute with a value.
    pub fn new(
        name: impl Into<Arc<str>>,
        value: impl Into<String>,
    ) -> Result<Attribute, InvalidName> {
        Attribute::build(name.into(), Some(value.into()))
    }

    /// Returns a new attribute without a value (a bare name).
    pub fn bare(name: impl Into<Arc<str>>) -> Result<Attribute, InvalidName> {
        Attribute::build(name.into(), None)
    }

    fn build(name: Arc<str>, value: Option<String>) -> Result<Attribute, InvalidName> {
        if name.trim().is_empty() {
            return Err(InvalidName::Attribute);
        }
        Ok(Attribute::from_parts(name, value))
    }

    pub(crate) fn from_parts(name: Arc<str>, value: Option<String>) -> Attribute {
        debug_assert!(!name.trim().is_empty(), "caller must validate the name");
        let value = value.map(|value| {
            if value.contains('"') {
                value.replace('"', "&quot;").into_boxed_str()
            } else {
                value.into_boxed_str()
            }
        });
        Attribute {
            inner: Arc::new(AttributeInner { name, value }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn value(&self) -> Option<&str> {
        self.inner.value.as_deref()
    }

    /// Whether `self` and `other` are the same shared instance.
    pub fn ptr_eq(&self, other: &Attribute) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Attribute) -> bool {
        self.name().eq_ignore_ascii_case(other.name()) && self.value() == other.value()
    }
}

impl Eq for Attribute {}

/// Case-insensitive name-to-[`Attribute`] map with persistent updates.
///
/// Enumeration order is unspecified and must not be relied on. Every update
/// operation returns a new list sharing what did not change; all empty
/// results collapse to one shared empty instance.
#[derive(Clone, Debug)]
pub struct AttributeList {
    map: Arc<HashMap<Box<str>, Attribute>>,
}

impl AttributeList {
    /// The shared empty list.
    pub fn empty() -> AttributeList {
        EMPTY.clone()
    }

    /// Returns a list holding the single `name="value"` attribute.
    pub fn create(
        name: impl Into<Arc<str>>,
        value: impl Into<String>,
    ) -> Result<AttributeList, InvalidName> {
        Ok(AttributeList::empty().set(Attribute::new(name, value)?))
    }

    /// Builds a list from attributes. On names that collide ignoring ASCII
    /// case, the last occurrence wins.
    pub fn from_attributes(attributes: impl IntoIterator<Item = Attribute>) -> AttributeList {
        let mut map = HashMap::new();
        for attribute in attributes {
            map.insert(key_of(attribute.name()), attribute);
        }
        AttributeList::wrap_new(map)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Looks up an attribute by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.map.get(&*key_of(name))
    }

    /// Inserts or replaces by name, ignoring ASCII case. Returns `self`
    /// unchanged when the list already holds this exact instance.
    pub fn set(&self, attribute: Attribute) -> AttributeList {
        let key = key_of(attribute.name());
        if let Some(existing) = self.map.get(&*key) {
            if existing.ptr_eq(&attribute) {
                return self.clone();
            }
        }
        let mut map = (*self.map).clone();
        map.insert(key, attribute);
        AttributeList::wrap_new(map)
    }

    /// Removes by name, ignoring ASCII case; returns `self` unchanged when
    /// the name is absent.
    pub fn remove(&self, name: &str) -> AttributeList {
        let key = key_of(name);
        if !self.map.contains_key(&*key) {
            return self.clone();
        }
        let mut map = (*self.map).clone();
        map.remove(&*key);
        AttributeList::wrap_new(map)
    }

    /// The shared empty list.
    pub fn clear(&self) -> AttributeList {
        AttributeList::empty()
    }

    /// Attributes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.map.values()
    }

    /// Whether `self` and `other` are the same shared instance.
    pub fn ptr_eq(&self, other: &AttributeList) -> bool {
        Arc::ptr_eq(&self.map, &other.map)
    }

    fn wrap_new(map: HashMap<Box<str>, Attribute>) -> AttributeList {
        if map.is_empty() {
            AttributeList::empty()
        } else {
            AttributeList { map: Arc::new(map) }
        }
    }
}

impl Default for AttributeList {
    fn default() -> AttributeList {
        AttributeList::empty()
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> AttributeList {
        AttributeList::from_attributes(iter)
    }
}

impl PartialEq for AttributeList {
    fn eq(&self, other: &AttributeList) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|attribute| other.get(attribute.name()).is_some_and(|found| found == attribute))
    }
}

impl Eq for AttributeList {}

fn key_of(name: &str) -> Box<str> {
    name.to_ascii_lowercase().into_boxed_str()
}
