//! Registry of installed capabilities

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::traits::{Annotator, Querier, Searcher, TableQuerier, TagSearcher};

/// Names of the five capability slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Query,
    TableQuery,
    Search,
    Annotate,
    TagSearch,
}

impl Capability {
    /// All capability slots, in registry order
    pub fn all() -> &'static [Capability] {
        &[
            Capability::Query,
            Capability::TableQuery,
            Capability::Search,
            Capability::Annotate,
            Capability::TagSearch,
        ]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Query => write!(f, "query"),
            Capability::TableQuery => write!(f, "table-query"),
            Capability::Search => write!(f, "search"),
            Capability::Annotate => write!(f, "annotate"),
            Capability::TagSearch => write!(f, "tag-search"),
        }
    }
}

/// One configuration step installing a single capability
#[derive(Clone)]
pub enum Registration {
    Querier(Arc<dyn Querier>),
    TableQuerier(Arc<dyn TableQuerier>),
    Searcher(Arc<dyn Searcher>),
    Annotator(Arc<dyn Annotator>),
    TagSearcher(Arc<dyn TagSearcher>),
}

impl Registration {
    /// The slot this step fills
    pub fn capability(&self) -> Capability {
        match self {
            Registration::Querier(_) => Capability::Query,
            Registration::TableQuerier(_) => Capability::TableQuery,
            Registration::Searcher(_) => Capability::Search,
            Registration::Annotator(_) => Capability::Annotate,
            Registration::TagSearcher(_) => Capability::TagSearch,
        }
    }
}

/// Holds zero or one implementation per capability slot
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    querier: Option<Arc<dyn Querier>>,
    table_querier: Option<Arc<dyn TableQuerier>>,
    searcher: Option<Arc<dyn Searcher>>,
    annotator: Option<Arc<dyn Annotator>>,
    tag_searcher: Option<Arc<dyn TagSearcher>>,
}

impl CapabilityRegistry {
    /// Create a registry with every slot empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply configuration steps in order; later steps win
    pub fn from_registrations(steps: impl IntoIterator<Item = Registration>) -> Self {
        let mut registry = Self::new();
        for step in steps {
            registry.register(step);
        }
        registry
    }

    /// Install one capability, replacing whatever occupied its slot
    pub fn register(&mut self, registration: Registration) {
        let capability = registration.capability();
        if self.has(capability) {
            debug!("Replacing previously registered {} capability", capability);
        }

        match registration {
            Registration::Querier(q) => self.querier = Some(q),
            Registration::TableQuerier(q) => self.table_querier = Some(q),
            Registration::Searcher(s) => self.searcher = Some(s),
            Registration::Annotator(a) => self.annotator = Some(a),
            Registration::TagSearcher(t) => self.tag_searcher = Some(t),
        }
    }

    pub fn with_querier(mut self, querier: impl Querier + 'static) -> Self {
        self.register(Registration::Querier(Arc::new(querier)));
        self
    }

    pub fn with_table_querier(mut self, querier: impl TableQuerier + 'static) -> Self {
        self.register(Registration::TableQuerier(Arc::new(querier)));
        self
    }

    pub fn with_searcher(mut self, searcher: impl Searcher + 'static) -> Self {
        self.register(Registration::Searcher(Arc::new(searcher)));
        self
    }

    pub fn with_annotator(mut self, annotator: impl Annotator + 'static) -> Self {
        self.register(Registration::Annotator(Arc::new(annotator)));
        self
    }

    pub fn with_tag_searcher(mut self, tag_searcher: impl TagSearcher + 'static) -> Self {
        self.register(Registration::TagSearcher(Arc::new(tag_searcher)));
        self
    }

    /// Install one backend object into all five slots
    pub fn with_backend<B>(mut self, backend: Arc<B>) -> Self
    where
        B: Querier + TableQuerier + Searcher + Annotator + TagSearcher + 'static,
    {
        self.register(Registration::Querier(backend.clone()));
        self.register(Registration::TableQuerier(backend.clone()));
        self.register(Registration::Searcher(backend.clone()));
        self.register(Registration::Annotator(backend.clone()));
        self.register(Registration::TagSearcher(backend));
        self
    }

    /// Check if a capability slot is occupied
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Query => self.querier.is_some(),
            Capability::TableQuery => self.table_querier.is_some(),
            Capability::Search => self.searcher.is_some(),
            Capability::Annotate => self.annotator.is_some(),
            Capability::TagSearch => self.tag_searcher.is_some(),
        }
    }

    pub fn querier(&self) -> Option<&Arc<dyn Querier>> {
        self.querier.as_ref()
    }

    pub fn table_querier(&self) -> Option<&Arc<dyn TableQuerier>> {
        self.table_querier.as_ref()
    }

    pub fn searcher(&self) -> Option<&Arc<dyn Searcher>> {
        self.searcher.as_ref()
    }

    pub fn annotator(&self) -> Option<&Arc<dyn Annotator>> {
        self.annotator.as_ref()
    }

    pub fn tag_searcher(&self) -> Option<&Arc<dyn TagSearcher>> {
        self.tag_searcher.as_ref()
    }

    /// Occupied slots, in registry order
    pub fn registered(&self) -> Vec<Capability> {
        Capability::all()
            .iter()
            .copied()
            .filter(|c| self.has(*c))
            .collect()
    }
}

impl fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("registered", &self.registered())
            .finish()
    }
}
