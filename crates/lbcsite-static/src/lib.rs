//! Static site generator for the LBC-bench leaderboard.
//!
//! Validates the leaderboards dataset against a closed structural schema,
//! derives tag aggregates, and renders every page template into a freshly
//! reset output directory alongside the site's static assets.

pub mod assets;
pub mod builder;
pub mod data;
pub mod schema;
pub mod tags;
pub mod templates;

pub use builder::{check, BuildConfig, BuildError, BuildReport, CheckReport, SiteBuilder};
pub use data::{Entry, Leaderboard, PressItem};
pub use schema::{validate, SchemaError};
pub use tags::{collect_tags, TagSummary};
