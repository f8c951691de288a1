use core::fmt;
use std::hash::Hash;

/// An XML namespace, identified by its URI.
#[derive(Debug, Clone, Eq)]
pub struct Namespace<'a> {
    pub url: &'a str,
}

impl PartialEq for Namespace<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Hash for Namespace<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl fmt::Display for Namespace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.url.fmt(f)
    }
}

impl<'a> From<&'a str> for Namespace<'a> {
    fn from(url: &'a str) -> Self {
        Namespace { url }
    }
}

impl<'a> Namespace<'a> {
    pub fn new(url: &'a str) -> Self {
        Namespace { url }
    }
}
