use crate::constants::header;

/// A single response header entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered response headers produced by the engine.
///
/// Names may repeat: `Vary` is emitted as separate entries and adapters should *append*
/// every entry rather than insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<Header>,
}

impl Headers {
    /// First value stored under `name`, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.value.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    entries: Vec<Header>,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            entries: Vec::with_capacity(estimate),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.entries.push(Header::new(name, value));
        }
    }

    /// Appends a separate `Vary` entry unless an equal one (ignoring case) is present.
    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let incoming = value.into();
        let incoming = incoming.trim();
        if incoming.is_empty() {
            return;
        }

        let duplicate = self.entries.iter().any(|entry| {
            entry.name.eq_ignore_ascii_case(header::VARY)
                && entry.value.eq_ignore_ascii_case(incoming)
        });
        if !duplicate {
            self.entries.push(Header::new(header::VARY, incoming));
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for entry in other.entries {
            self.push(&entry.name, entry.value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        Headers {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
