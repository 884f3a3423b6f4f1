//! Response catalog: rendered markup demos keyed by topic, plus the text
//! responses that introduce them.
//!
//! The catalog is rendered once and never mutated afterwards, so a single
//! instance can be shared by every concurrent intent invocation.

pub mod examples;
pub mod responses;

pub use examples::{TopicTemplate, TOPICS};
pub use responses::{examples_list, lead_to_example, CompleteResponses};

use crate::markup::Template;
use std::sync::LazyLock;

static SHARED_CATALOG: LazyLock<ResponseCatalog> = LazyLock::new(ResponseCatalog::build);

/// One rendered demo document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,
    pub document: String,
}

/// Ordered, immutable mapping from topic name to rendered markup.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    entries: Vec<CatalogEntry>,
    responses: CompleteResponses,
}

impl ResponseCatalog {
    /// Renders the built-in topics.
    pub fn build() -> Self {
        Self::from_templates(TOPICS.iter().map(|(name, template)| (*name, template())))
    }

    /// Process-wide catalog, rendered on first use.
    pub fn shared() -> &'static ResponseCatalog {
        &SHARED_CATALOG
    }

    /// Renders the given templates in order. A repeated name keeps its first
    /// position and takes the later document.
    pub fn from_templates<'a, I, N>(templates: I) -> Self
    where
        I: IntoIterator<Item = (N, Template<'a>)>,
        N: Into<String>,
    {
        let mut entries: Vec<CatalogEntry> = Vec::new();
        for (name, template) in templates {
            let name = name.into();
            let document = template.render();
            match entries.iter_mut().find(|entry| entry.name == name) {
                Some(existing) => existing.document = document,
                None => entries.push(CatalogEntry { name, document }),
            }
        }
        let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        let responses = CompleteResponses::for_topics(&names);
        Self { entries, responses }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.document.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn responses(&self) -> &CompleteResponses {
        &self.responses
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::build()
    }
}
