//! Navigation data: route paths, the navbar lookup table, and the route tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `paths` is the single source of URL strings, `table` maps menu keys to
//! those paths, and `tree` describes the hierarchical menu the navbar renders.

pub mod paths;
pub mod table;
pub mod tree;

pub use paths::RoutePaths;
