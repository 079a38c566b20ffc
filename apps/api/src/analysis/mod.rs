// Resume analysis: provider calls, normalization, merging and local fallback.

pub mod extract;
pub mod fallback;
pub mod handlers;
pub mod merge;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod prompts;
pub mod providers;
