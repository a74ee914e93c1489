//! HTTP headers abstraction consumed by the [`auth`](crate::auth) extractors.
//!
//! Headers are stored in an ordered map to preserve insertion order. Lookups
//! are case-insensitive: entries are keyed by the lowercased name, while the
//! name as first inserted is kept for serialization.
//!
//! A name may carry several values. [`HttpHeaders::get`] returns the first
//! one, [`HttpHeaders::get_all`] returns all of them in insertion order.
//!
//! Header values are stored as raw strings. No HTTP semantics are enforced
//! here; the [`parser`](crate::http::parser) module applies its own limits
//! when building a header set from raw text.

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    headers: IndexMap<String, HeaderEntry>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    /// Adds a value for `name`, keeping any values already present.
    pub fn append(&mut self, name: &str, value: &str) {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| HeaderEntry {
                name: name.to_string(),
                values: Vec::new(),
            })
            .values
            .push(value.to_string());
    }

    /// Replaces every value for `name` with a single `value`.
    ///
    /// The entry keeps its original position if it already existed.
    pub fn set_raw(&mut self, name: &str, value: &str) {
        let entry = HeaderEntry {
            name: name.to_string(),
            values: vec![value.to_string()],
        };
        self.headers.insert(name.to_ascii_lowercase(), entry);
    }

    /// First value for `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.lookup(name)
            .and_then(|entry| entry.values.first())
            .map(String::as_str)
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.lookup(name)
            .map(|entry| entry.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Removes `name` and returns its values, if any.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.headers
            .shift_remove(&name.to_ascii_lowercase())
            .map(|entry| entry.values)
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order, one pair per value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.values().flat_map(|entry| {
            entry
                .values
                .iter()
                .map(move |value| (entry.name.as_str(), value.as_str()))
        })
    }

    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in self.iter() {
            result.push_str(&format!("{}: {}\r\n", name, value));
        }
        result
    }

    fn lookup(&self, name: &str) -> Option<&HeaderEntry> {
        // Skip the allocation when the caller already passes a lowercase name
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.headers.get(&name.to_ascii_lowercase())
        } else {
            self.headers.get(name)
        }
    }
}

impl<K, V> Extend<(K, V)> for HttpHeaders
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name.as_ref(), value.as_ref());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HttpHeaders
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HttpHeaders::new();
        headers.extend(iter);
        headers
    }
}
