//! Client for the RCHK Championships statistics API: typed models, a fetch-once
//! cache, and the sorting/filtering engine behind the people, champion and
//! match views.

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;
