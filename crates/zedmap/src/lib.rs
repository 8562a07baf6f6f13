//! # zedmap
//!
//! Text search for Project Zomboid map files.
//!
//! This crate provides:
//! - Token extraction from binary map data (UTF-8 fragments in noise)
//! - Needle matching over per-file token streams
//! - Area coordinate parsing and online map viewer addressing
//! - Save directory and map file discovery
//!
//! The pipeline is pure and single-pass: locate map files, read each
//! through a tagged read boundary, extract word tokens, keep the files
//! whose tokens contain the needle, and render coordinates the online
//! viewer understands.

pub mod coords;
pub mod error;
pub mod export;
pub mod prelude;
pub mod saves;
pub mod search;
pub mod tokens;

pub use coords::{AreaCoords, MAP_VIEWER_URL, VIEWER_ZOOM};
pub use error::{Error, Result};
pub use export::{SearchResultJson, results_to_json};
pub use saves::{MapFileRead, SaveLocator, read_map_file};
pub use search::{SearchResult, format_results, search_files, search_save};
pub use tokens::extract_tokens;
