pub mod run_log;
pub mod selection;
pub mod tier_resolver;

pub use run_log::RunLog;
pub use selection::{seeded_shuffle, take_prefix, MATCHING_SEED};
pub use tier_resolver::{resolve, resolve_tier, SectionCounts};
