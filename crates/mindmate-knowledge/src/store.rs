//! Knowledge store: holds the fixed document corpus and performs the
//! coarse substring pre-filter ahead of relevance ranking.

use mindmate_core::types::KnowledgeDocument;

use crate::seed::seed_corpus;

/// Immutable collection of knowledge documents, queryable by substring.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    documents: Vec<KnowledgeDocument>,
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::with_corpus(seed_corpus())
    }
}

impl KnowledgeStore {
    /// Build a store over an explicit corpus (tests use small fixtures).
    pub fn with_corpus(documents: Vec<KnowledgeDocument>) -> Self {
        Self { documents }
    }

    pub fn all(&self) -> &[KnowledgeDocument] {
        &self.documents
    }

    pub fn get(&self, id: i64) -> Option<&KnowledgeDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Coarse filter: a document qualifies when the lowercased query is a
    /// substring of its lowercased title or content, or of any lowercased
    /// tag.
    ///
    /// This gate runs before scoring, so a document that fails it is never
    /// ranked even when keyword-level scoring would have favored it;
    /// queries phrased with synonyms absent from every title/content/tag
    /// return nothing. Deliberate: the two-stage filter-then-rank shape is
    /// part of the retrieval contract.
    pub fn search(&self, query: &str) -> Vec<KnowledgeDocument> {
        let query_lower = query.to_lowercase();
        self.documents
            .iter()
            .filter(|doc| {
                doc.title.to_lowercase().contains(&query_lower)
                    || doc.content.to_lowercase().contains(&query_lower)
                    || doc
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&query_lower))
            })
            .cloned()
            .collect()
    }
}
