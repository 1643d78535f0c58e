// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Case-insensitive attribute map for a single node.

/// Attribute map with ASCII case-insensitive names.
///
/// Insertion order is kept so rendered output is deterministic, but lookups,
/// upserts and removals never depend on it. The first spelling of a name is
/// the one that renders.
///
/// # Example
/// ```
/// use the_tagsmith::node::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.set("Class", "card");
/// attrs.append("class", "featured");
///
/// assert_eq!(attrs.get("CLASS"), Some("card featured"));
/// assert_eq!(attrs.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.0
            .iter()
            .position(|(existing, _)| existing.eq_ignore_ascii_case(name))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.0[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Replace the value of `name`, or add it at the end.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.0[i].1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Space-join `value` onto an existing value, or set it when absent or blank.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        match self.position(&name) {
            Some(i) if !self.0[i].1.trim().is_empty() => {
                let existing = &mut self.0[i].1;
                existing.push(' ');
                existing.push_str(value.trim());
            }
            Some(i) => self.0[i].1 = value.trim().to_string(),
            None => self.0.push((name, value.trim().to_string())),
        }
    }

    /// Remove `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.0.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Equal when both hold the same names (ignoring case) with the same values,
/// in any order.
impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Attributes {}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}
