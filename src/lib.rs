//! Country identity layer for the esports world map.
//!
//! Everything that turns raw geography data into a displayable
//! country: the ISO code registry, the resolver that reconciles
//! numeric codes, alpha-2 codes, and free-text names, the esports
//! region classifier, highlight matching, and flag URL resolution.

pub mod atlas;
pub mod config;
pub mod error;
pub mod flags;
pub mod geography;
pub mod highlight;
pub mod logging;
pub mod region;
pub mod registry;
pub mod resolver;
pub mod search;
