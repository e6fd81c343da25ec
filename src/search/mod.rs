mod collected;
pub mod heuristics;
mod path;
mod planner;
mod rewards;
mod run_summary;
pub mod search_engines;
mod validate;
mod verbosity;

pub use collected::{CollectedMask, INLINE_REWARD_CAPACITY};
pub use path::Path;
pub use planner::SearchPlanner;
pub use rewards::{RewardIndex, Rewards, Score};
pub use run_summary::RunSummary;
pub use search_engines::{SearchConfig, SearchEngine, SearchEngineName};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
