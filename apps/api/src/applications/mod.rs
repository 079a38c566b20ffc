// Job application tracking: status timeline, notes and follow-up actions.

pub mod handlers;
pub mod store;
pub mod tracking;
