//! # repolyzer-scan
//!
//! **Tier 3 (Analyzers)**
//!
//! Filesystem aggregates: per-language file and line counts, and directory
//! structure statistics. Each analyzer walks the tree independently.
//!
//! ## What belongs here
//! * Language aggregation over classified files
//! * Structure statistics (counts, sizes, depth, largest files)
//!
//! ## What does NOT belong here
//! * Marker scanning (use repolyzer-content)
//! * Output formatting

mod languages;
mod structure;

pub use languages::analyze_languages;
pub use structure::analyze_structure;
