//! Relevance ranking: additive keyword-overlap scoring over a candidate
//! set, highest score first, truncated to a fixed result count.

use mindmate_core::types::KnowledgeDocument;

use crate::keywords::Lexicon;

/// Results returned per ranking call.
pub const TOP_K: usize = 3;

/// Transient pairing of a candidate document with its relevance score.
/// Exists only for the duration of one `rank` call.
#[derive(Debug, Clone)]
pub struct ScoredDocument<'a> {
    pub document: &'a KnowledgeDocument,
    pub score: u32,
}

/// Scores and orders knowledge documents against a user utterance.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    lexicon: Lexicon,
}

impl Ranker {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Additive relevance score for one candidate. The weights are fixed
    /// constants reproduced exactly for compatibility with the stored
    /// corpus tuning:
    ///
    /// - query substring of title: +10
    /// - query substring of content: +5
    /// - each keyword substring of title: +3
    /// - each keyword substring of content: +1
    /// - each tag substring of the query: +2
    /// - each keyword substring of a tag: +1 per pair
    /// - each mental-health term present in both query and title/content: +4
    pub fn score(&self, document: &KnowledgeDocument, keywords: &[String], query: &str) -> u32 {
        let mut score = 0u32;
        let query_lower = query.to_lowercase();
        let title_lower = document.title.to_lowercase();
        let content_lower = document.content.to_lowercase();

        // Direct query match in title (highest weight)
        if title_lower.contains(&query_lower) {
            score += 10;
        }

        // Direct query match in content
        if content_lower.contains(&query_lower) {
            score += 5;
        }

        for keyword in keywords {
            if title_lower.contains(keyword.as_str()) {
                score += 3;
            }
            if content_lower.contains(keyword.as_str()) {
                score += 1;
            }
        }

        for tag in &document.tags {
            let tag_lower = tag.to_lowercase();
            if query_lower.contains(&tag_lower) {
                score += 2;
            }
            for keyword in keywords {
                if tag_lower.contains(keyword.as_str()) {
                    score += 1;
                }
            }
        }

        // Mental-health term boost
        for term in self.lexicon.mental_health_terms() {
            if query_lower.contains(term.as_str())
                && (title_lower.contains(term.as_str()) || content_lower.contains(term.as_str()))
            {
                score += 4;
            }
        }

        score
    }

    /// Order `candidates` by relevance to `query`, highest first, and
    /// truncate to at most [`TOP_K`] results.
    ///
    /// The sort is stable, so candidates with equal scores keep their
    /// relative input order. No minimum-score floor is enforced: when
    /// fewer than [`TOP_K`] candidates score above zero, zero-score
    /// candidates still fill the remaining slots. Callers that need
    /// "only relevant" results must filter by score themselves.
    ///
    /// Pure over its inputs; never errors, empty candidates give an
    /// empty result.
    pub fn rank<'a>(
        &self,
        query: &str,
        candidates: &'a [KnowledgeDocument],
    ) -> Vec<ScoredDocument<'a>> {
        self.rank_top(query, candidates, TOP_K)
    }

    /// [`Self::rank`] with an explicit result limit instead of [`TOP_K`].
    pub fn rank_top<'a>(
        &self,
        query: &str,
        candidates: &'a [KnowledgeDocument],
        limit: usize,
    ) -> Vec<ScoredDocument<'a>> {
        let keywords = self.lexicon.extract_keywords(query);

        let mut scored: Vec<ScoredDocument<'a>> = candidates
            .iter()
            .map(|document| ScoredDocument {
                score: self.score(document, &keywords, query),
                document,
            })
            .collect();

        // Stable sort: equal scores retain input order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: i64, title: &str, content: &str, tags: &[&str]) -> KnowledgeDocument {
        KnowledgeDocument {
            id,
            title: title.into(),
            content: content.into(),
            category: "test".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_rank_empty_candidates() {
        let ranker = Ranker::default();
        assert!(ranker.rank("anything at all", &[]).is_empty());
    }

    #[test]
    fn test_rank_truncates_to_top_k() {
        let ranker = Ranker::default();
        let docs: Vec<_> = (0..6i64)
            .map(|i| doc(i, &format!("sleep doc {i}"), "about sleep", &["sleep"]))
            .collect();
        assert_eq!(ranker.rank("sleep", &docs).len(), TOP_K);
    }

    #[test]
    fn test_rank_top_honors_explicit_limit() {
        let ranker = Ranker::default();
        let docs: Vec<_> = (0..6i64)
            .map(|i| doc(i, &format!("sleep doc {i}"), "about sleep", &["sleep"]))
            .collect();
        assert_eq!(ranker.rank_top("sleep", &docs, 1).len(), 1);
        assert_eq!(ranker.rank_top("sleep", &docs, 5).len(), 5);
    }

    #[test]
    fn test_rank_fills_with_zero_score_candidates() {
        let ranker = Ranker::default();
        let docs = vec![
            doc(1, "unrelated alpha", "nothing here", &[]),
            doc(2, "unrelated beta", "nothing here either", &[]),
        ];
        let ranked = ranker.rank("quantum chromodynamics", &docs);
        // No minimum-score floor: zero-score docs still fill the slots.
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_exact_title_match_scores_at_least_ten() {
        let ranker = Ranker::default();
        let d = doc(1, "mindful walking", "a short walk with attention", &[]);
        let keywords = ranker.lexicon().extract_keywords("mindful walking");
        assert!(ranker.score(&d, &keywords, "mindful walking") >= 10);
    }

    #[test]
    fn test_sleep_query_prefers_sleep_hygiene_doc() {
        let ranker = Ranker::default();
        let docs = vec![
            doc(
                1,
                "Building Emotional Resilience",
                "Emotional resilience is the ability to adapt to stressful situations.",
                &["resilience", "coping"],
            ),
            doc(
                2,
                "Sleep Hygiene for Mental Health",
                "Good sleep hygiene is crucial for mental health.",
                &["sleep", "hygiene", "insomnia", "mental health"],
            ),
        ];
        let ranked = ranker.rank("I can't sleep", &docs);
        assert_eq!(ranked[0].document.id, 2);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let ranker = Ranker::default();
        let docs = vec![
            doc(10, "twin document", "identical body", &[]),
            doc(20, "twin document", "identical body", &[]),
        ];
        let ranked = ranker.rank("no overlap whatsoever", &docs);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].document.id, 10);
        assert_eq!(ranked[1].document.id, 20);
    }

    #[test]
    fn test_mental_health_term_boost() {
        let ranker = Ranker::default();
        let with_term = doc(1, "Managing burnout at work", "burnout recovery steps", &[]);
        let without = doc(2, "Managing workload", "general productivity advice", &[]);
        let keywords = ranker.lexicon().extract_keywords("burnout");
        let a = ranker.score(&with_term, &keywords, "burnout");
        let b = ranker.score(&without, &keywords, "burnout");
        assert!(a > b);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let ranker = Ranker::default();
        let docs = vec![
            doc(1, "Sleep Hygiene", "sleep content", &["sleep"]),
            doc(2, "Stress Management", "stress content", &["stress"]),
        ];
        let first: Vec<(i64, u32)> = ranker
            .rank("trouble with sleep", &docs)
            .iter()
            .map(|s| (s.document.id, s.score))
            .collect();
        let second: Vec<(i64, u32)> = ranker
            .rank("trouble with sleep", &docs)
            .iter()
            .map(|s| (s.document.id, s.score))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_stop_word_query_scores_zero_on_keywords() {
        let ranker = Ranker::default();
        let docs = [doc(1, "Sleep Hygiene", "sleep content", &["sleep"])];
        // "i am" extracts no keywords and is no substring of the doc.
        let ranked = ranker.rank("i am", &docs);
        assert_eq!(ranked[0].score, 0);
    }
}
