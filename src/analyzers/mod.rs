//! Heuristic analysis core
//!
//! Pure, stateless functions behind the paid endpoints:
//! - `code_review` - regex-driven lint scan with a 0-100 score and A-F grade
//! - `summarize` - extractive sentence summarizer bounded by a max length
//! - `translate` - fixed bilingual phrase dictionary with per-word fallback
//!
//! Each call reads only its arguments and static tables, so concurrent
//! requests need no coordination.

pub mod code_review;
pub mod summarize;
pub mod translate;

pub use code_review::{review, ReviewResult};
pub use summarize::{summarize, SummaryResult};
pub use translate::{translate, TranslationResult};
