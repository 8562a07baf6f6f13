//! Prelude module for convenient imports
//!
//! ```ignore
//! use zedmap::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Pipeline entry points: `search_save`, `search_files`, `format_results`
//! - Core types: `SearchResult`, `AreaCoords`, `SaveLocator`, `MapFileRead`
//! - Error handling: `Error`, `Result`

pub use crate::coords::AreaCoords;
pub use crate::error::{Error, Result};
pub use crate::saves::{MapFileRead, SaveLocator};
pub use crate::search::{SearchResult, format_results, search_files, search_save};
pub use crate::tokens::extract_tokens;
