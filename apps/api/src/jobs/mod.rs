// Job search: query derivation, the Jooble proxy and normalized listings.

pub mod handlers;
pub mod jooble;
pub mod listing;
pub mod query;
