//! # MindMate Knowledge
//!
//! Keyword-overlap retrieval over a fixed corpus of short mental-health
//! documents. No vector DB, no embeddings; a substring coarse filter
//! followed by additive relevance scoring.
//!
//! ## How it works
//! ```text
//! User: "I can't sleep"
//!   ↓
//! KnowledgeStore.search(query)      -> substring pre-filter
//!   ↓
//! Ranker.rank(query, candidates)    -> additive scoring, top 3
//!   ↓
//! "<title>: <content>" context blocks injected into the provider prompt
//! ```

pub mod keywords;
pub mod rank;
pub mod retrieval;
pub mod seed;
pub mod store;

pub use keywords::Lexicon;
pub use rank::{Ranker, ScoredDocument};
pub use retrieval::{RetrievalResult, Retriever};
pub use store::KnowledgeStore;
