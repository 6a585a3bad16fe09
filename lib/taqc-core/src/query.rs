//! Query parameter multimap.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::ser::{Serialize, SerializeMap, Serializer};
use url::Url;
use url::form_urlencoded;

/// Query parameters: each key maps to an ordered list of values.
///
/// Keys are kept sorted, so iteration and [`QueryValues::encode`] are
/// deterministic. Values under a key keep their insertion order.
///
/// # Example
///
/// ```
/// use taqc_core::QueryValues;
///
/// let mut qp = QueryValues::new();
/// qp.set("q", "rust");
/// qp.add("tag", "a");
/// qp.add("tag", "b");
///
/// assert_eq!(qp.get("q"), Some("rust"));
/// assert_eq!(qp.get_all("tag"), ["a", "b"]);
/// assert_eq!(qp.encode(), "q=rust&tag=a&tag=b");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues(BTreeMap<String, Vec<String>>);

impl QueryValues {
    /// Create an empty set of query parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all values of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// Append `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// The first value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    /// All values of `key`, in insertion order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `key` has at least one value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.0.remove(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there is no key at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over keys and their values, sorted by key.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    /// Flatten into `(key, value)` pairs, sorted by key.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.pairs()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    /// Encode as `application/x-www-form-urlencoded`, sorted by key.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }

    /// Append all parameters to the query string of `url`.
    pub fn append_to_url(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(self.pairs());
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }
}

impl<'a> IntoIterator for &'a QueryValues {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for QueryValues {
    type Item = (String, Vec<String>);
    type IntoIter = btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    /// Collect pairs with `add` semantics.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.add(key, value);
        }
        values
    }
}

impl Serialize for QueryValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, values) in &self.0 {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}
