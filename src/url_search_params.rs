use crate::compat::{String, ToString, Vec};
use crate::form_urlencoded;

/// An ordered list of name/value pairs backed by a urlencoded query string.
///
/// Names and values are plain strings; encoding happens in
/// [`UrlSearchParams::to_string`] and decoding in [`UrlSearchParams::parse`].
/// A `Url` hands out a snapshot through `Url::search_params` and takes
/// changes back through `Url::set_search_params`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearchParams {
    list: Vec<(String, String)>,
}

fn owned_pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

impl UrlSearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a query string. One leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            list: form_urlencoded::parse(query.as_bytes()),
        }
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.list.push(owned_pair(name, value));
    }

    /// Remove every pair named `name`, or only those that also carry `value`.
    pub fn delete(&mut self, name: &str, value: Option<&str>) {
        self.list
            .retain(|(n, v)| n != name || value.is_some_and(|value| v != value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.list
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v.as_str()))
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.list
            .iter()
            .filter_map(|(n, v)| (n == name).then_some(v.as_str()))
            .collect()
    }

    pub fn has(&self, name: &str, value: Option<&str>) -> bool {
        self.list
            .iter()
            .any(|(n, v)| n == name && value.is_none_or(|value| v == value))
    }

    /// The first pair named `name` takes `value` in place and any later ones
    /// are dropped. Appends when there is no such pair.
    pub fn set(&mut self, name: &str, value: &str) {
        let Some(first) = self.list.iter().position(|(n, _)| n == name) else {
            self.append(name, value);
            return;
        };

        self.list[first].1 = value.to_string();
        let mut index = 0;
        self.list.retain(|(n, _)| {
            let keep = index <= first || n != name;
            index += 1;
            keep
        });
    }

    /// Stable sort by name, comparing UTF-16 code units.
    pub fn sort(&mut self) {
        self.list
            .sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
    }

    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.list.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(n, _)| n)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, v)| v)
    }

    /// The query as a `search` getter shows it: `?` plus the pairs, or `""`
    /// when the list is empty.
    pub fn serialize(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            crate::compat::format!("?{self}")
        }
    }

    /// The urlencoded pairs, without a leading `?`.
    #[allow(clippy::inherent_to_string_shadow_display)]
    pub fn to_string(&self) -> String {
        form_urlencoded::serialize(self.iter())
    }
}

impl core::fmt::Display for UrlSearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&form_urlencoded::serialize(self.iter()))
    }
}

impl From<&str> for UrlSearchParams {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl From<String> for UrlSearchParams {
    fn from(query: String) -> Self {
        Self::parse(&query)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for UrlSearchParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(pairs: I) -> Self {
        Self {
            list: pairs
                .into_iter()
                .map(|(n, v)| owned_pair(n, v))
                .collect(),
        }
    }
}

impl<'a> Extend<(&'a str, &'a str)> for UrlSearchParams {
    fn extend<I: IntoIterator<Item = (&'a str, &'a str)>>(&mut self, pairs: I) {
        self.list
            .extend(pairs.into_iter().map(|(n, v)| owned_pair(n, v)));
    }
}
