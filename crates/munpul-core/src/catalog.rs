//! Built-in subject catalog.
//!
//! The catalog is a fixed, ordered list. In a production deployment it would
//! be replaced by an external data source; the search contract in
//! [`crate::search`] does not depend on where the list comes from.

use crate::Subject;

/// The five reference subjects, in catalog order.
pub fn builtin() -> Vec<Subject> {
    vec![
        Subject::new("한국사", "조선시대부터 현대사까지 체계적인 한국사 학습"),
        Subject::new("국어", "문법, 독해, 작문까지 국어 실력 향상"),
        Subject::new("수학", "기초부터 심화까지 단계별 수학 학습 코칭"),
        Subject::new("영어", "회화, 문법, 독해 등 영어 실력 완성"),
        Subject::new("코딩", "프론트엔드부터 백엔드까지 실무형 코딩 학습"),
    ]
}
