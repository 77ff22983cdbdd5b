//! Browse the Awaji island business-restructuring subsidy awards.
//!
//! The core is [`engine`]: facets, filtering and aggregation as pure
//! functions over an immutable [`model::SubsidyDataset`]. [`session`] and
//! [`commands`] form the interactive front end; [`parser`] and [`enrich`]
//! prepare the dataset file.

pub mod commands;
pub mod config;
pub mod consts;
pub mod engine;
pub mod enrich;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod session;
