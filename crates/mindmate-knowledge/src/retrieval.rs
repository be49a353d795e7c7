//! Retrieval entry point: coarse filter, then rank, then format for
//! prompt injection.

use mindmate_core::types::KnowledgeDocument;

use crate::rank::{Ranker, TOP_K};
use crate::store::KnowledgeStore;

/// Knowledge retrieved for one user utterance.
#[derive(Debug, Clone, Default)]
pub struct RetrievalResult {
    /// `"<title>: <content>"` per ranked document, ready for the prompt
    /// context block.
    pub context: Vec<String>,
    /// The ranked source documents, same order as `context`.
    pub sources: Vec<KnowledgeDocument>,
}

/// Combines the store's coarse filter with the ranker. Stateless between
/// calls; cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Retriever {
    store: KnowledgeStore,
    ranker: Ranker,
    top_k: usize,
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new(KnowledgeStore::default(), Ranker::default(), TOP_K)
    }
}

impl Retriever {
    pub fn new(store: KnowledgeStore, ranker: Ranker, top_k: usize) -> Self {
        Self { store, ranker, top_k }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Retrieve the most relevant knowledge for `query`.
    ///
    /// Total over its input: any query (including empty) yields a possibly
    /// empty result, never an error. An empty result means the caller
    /// should fall back to a prompt without contextual knowledge.
    pub fn retrieve(&self, query: &str) -> RetrievalResult {
        let candidates = self.store.search(query);
        if candidates.is_empty() {
            tracing::debug!("knowledge retrieval: no candidates for query");
            return RetrievalResult::default();
        }

        let ranked = self.ranker.rank_top(query, &candidates, self.top_k);
        tracing::debug!(
            candidates = candidates.len(),
            returned = ranked.len(),
            "knowledge retrieval complete"
        );

        RetrievalResult {
            context: ranked
                .iter()
                .map(|s| format!("{}: {}", s.document.title, s.document.content))
                .collect(),
            sources: ranked.iter().map(|s| s.document.clone()).collect(),
        }
    }
}
