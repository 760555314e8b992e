/// Core traits for Scholar Match

/// Text similarity scorer
///
/// Implementers return a score in `0..=100` where higher means more similar.
/// Scoring must be deterministic and free of side effects; the matcher calls
/// it once per student/opportunity pair.
pub trait SimilarityScorer: Send + Sync {
    /// Score `a` against `b`
    fn score(&self, a: &str, b: &str) -> u8;
}

impl<S: SimilarityScorer + ?Sized> SimilarityScorer for &S {
    fn score(&self, a: &str, b: &str) -> u8 {
        (**self).score(a, b)
    }
}
