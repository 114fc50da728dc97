/// Similarity ranking over the catalog.
///
/// The catalog is small enough that retrieval is a straight cosine scan over
/// pre-computed content vectors; no index structure is involved.
use crate::model::{KnowledgeEntry, RetrievalMatch};

/// Entries at or below this similarity are never returned. The cut is strict:
/// exactly 0.3 is out.
pub const RELEVANCE_THRESHOLD: f32 = 0.3;
/// At most this many entries come back per query.
pub const MAX_RESULTS: usize = 3;

/// Cosine similarity between two vectors. Zero when either has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Pick the highest-similarity indices: top three by descending similarity,
/// stable on ties (earlier entry first), then drop anything at or below the
/// relevance threshold.
pub fn select_top(similarities: &[f32]) -> Vec<(usize, f32)> {
    let mut order: Vec<usize> = (0..similarities.len()).collect();
    order.sort_by(|&a, &b| {
        similarities[b]
            .partial_cmp(&similarities[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
        .into_iter()
        .take(MAX_RESULTS)
        .filter(|&idx| similarities[idx] > RELEVANCE_THRESHOLD)
        .map(|idx| (idx, similarities[idx]))
        .collect()
}

/// Rank catalog entries against a query vector.
pub fn rank(
    catalog: &[KnowledgeEntry],
    catalog_vectors: &[Vec<f32>],
    query_vector: &[f32],
) -> Vec<RetrievalMatch> {
    let similarities: Vec<f32> = catalog_vectors
        .iter()
        .map(|vector| cosine_similarity(query_vector, vector))
        .collect();
    select_top(&similarities)
        .into_iter()
        .map(|(idx, similarity)| RetrievalMatch {
            category: catalog[idx].category.clone(),
            content: catalog[idx].content.clone(),
            similarity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_and_orthogonal() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_select_top_orders_by_descending_similarity() {
        let selected = select_top(&[0.4, 0.9, 0.6]);
        let indices: Vec<usize> = selected.iter().map(|(idx, _)| *idx).collect();
        assert_eq!(indices, [1, 2, 0]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let selected = select_top(&[0.3, 0.31, 0.1]);
        assert_eq!(selected, [(1, 0.31)]);
    }

    #[test]
    fn test_at_most_three_results() {
        let selected = select_top(&[0.9, 0.8, 0.7, 0.6]);
        let indices: Vec<usize> = selected.iter().map(|(idx, _)| *idx).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let selected = select_top(&[0.5, 0.9, 0.5]);
        let indices: Vec<usize> = selected.iter().map(|(idx, _)| *idx).collect();
        assert_eq!(indices, [1, 0, 2]);
    }

    #[test]
    fn test_rank_surfaces_closest_entry() {
        let catalog = vec![
            KnowledgeEntry {
                category: "North".to_string(),
                content: "points north".to_string(),
                keywords: vec![],
            },
            KnowledgeEntry {
                category: "East".to_string(),
                content: "points east".to_string(),
                keywords: vec![],
            },
        ];
        let vectors = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let matches = rank(&catalog, &vectors, &[0.1, 0.9]);
        assert_eq!(matches[0].category, "North");
        assert!(matches[0].similarity > matches.get(1).map_or(0.0, |m| m.similarity));
    }
}
