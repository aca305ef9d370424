//! Command implementations

pub mod analyze;
pub mod check;
pub mod simple;
pub mod survey;

pub use analyze::{RootAnalysis, achievable_words, analyze_root};
pub use check::{CheckResult, check_word};
pub use simple::run_simple;
pub use survey::{SurveyStatistics, print_survey_statistics, run_survey};
