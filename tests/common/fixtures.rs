//! Static catalogs used across harnesses.

use munpul_core::Subject;

/// An ASCII catalog for case-folding tests, where upper/lowercase actually
/// differ (Hangul has no case).
pub const CORPUS_ASCII: &[(&str, &str)] = &[
    ("English Conversation", "Practical speaking drills for beginners"),
    ("English Grammar", "From parts of speech to complex clauses"),
    ("Python", "Scripting and automation fundamentals"),
    ("Rust", "Systems programming with ownership and borrowing"),
];

/// Generate a synthetic catalog of `n` subjects for scaling tests and
/// benchmarks. Every third entry contains the token "학습" so queries have a
/// predictable hit rate.
pub fn corpus_scaled(n: usize) -> Vec<Subject> {
    (0..n)
        .map(|i| {
            let description = if i % 3 == 0 {
                format!("과목 {i} 단계별 학습 과정")
            } else {
                format!("과목 {i} 심화 과정")
            };
            Subject::new(format!("과목-{i}"), description)
        })
        .collect()
}
