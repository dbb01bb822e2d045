//! Lexical context retrieval

use std::collections::HashSet;

use super::document::DocumentChunk;

/// A chunk selected as context for a query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub chunk: DocumentChunk,
    pub score: f32,
}

fn terms(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() > 1)
        .map(str::to_lowercase)
        .collect()
}

/// Rank chunks by the share of query terms they contain.
///
/// Chunks sharing no term with the query are dropped. Ties keep the input
/// order, so results are deterministic.
pub fn rank_chunks(query: &str, chunks: Vec<DocumentChunk>, top_k: usize) -> Vec<SearchHit> {
    let query_terms = terms(query);
    if query_terms.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = chunks
        .into_iter()
        .filter_map(|chunk| {
            let chunk_terms = terms(&chunk.content);
            let shared = query_terms.intersection(&chunk_terms).count();
            (shared > 0).then(|| SearchHit {
                score: shared as f32 / query_terms.len() as f32,
                chunk,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(top_k);
    hits
}
