use crate::domain::article::entity::ArticleSummary;
use crate::domain::article::value_objects::TagSet;

/// Jaccard index of two tag sets; `0.0` when either side is empty.
pub fn jaccard(a: &TagSet, b: &TagSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    a.intersection_len(b) as f64 / a.union_len(b) as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredArticle {
    pub article: ArticleSummary,
    pub score: f64,
}

/// Scores each candidate against `reference` and keeps the best `limit`.
///
/// Sorting is stable, so candidates with equal scores keep the order the
/// catalog returned them in.
pub fn rank_by_similarity(
    reference: &TagSet,
    candidates: Vec<ArticleSummary>,
    limit: usize,
) -> Vec<ScoredArticle> {
    let mut scored: Vec<ScoredArticle> = candidates
        .into_iter()
        .map(|article| ScoredArticle {
            score: jaccard(reference, &article.tags),
            article,
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}
