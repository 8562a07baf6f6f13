//! Area coordinate parsing and online map viewer addressing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Base URL of the online map viewer.
pub const MAP_VIEWER_URL: &str = "https://map.projectzomboid.com/";

/// Fixed zoom suffix understood by the viewer.
pub const VIEWER_ZOOM: u32 = 512;

/// Maximal digit runs, scanned in order of appearance.
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

/// Area coordinates embedded in a map file name (`map_<x>_<y>.bin`).
///
/// One area unit covers ten display units on the online viewer, so the
/// display rendering appends a literal `0` to each coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCoords {
    pub x: u32,
    pub y: u32,
}

impl AreaCoords {
    /// Parse area coordinates from a map file name.
    ///
    /// Takes the first two maximal digit runs as x and y. Names without
    /// two in-range runs violate the locator's naming contract and are
    /// reported as malformed.
    pub fn from_file_name(name: &str) -> Result<Self> {
        let mut runs = DIGITS.find_iter(name);
        let x = Self::parse_run(runs.next(), name)?;
        let y = Self::parse_run(runs.next(), name)?;
        Ok(Self { x, y })
    }

    fn parse_run(run: Option<regex::Match<'_>>, name: &str) -> Result<u32> {
        run.ok_or_else(|| Error::MalformedMapFilename(name.to_string()))?
            .as_str()
            .parse()
            .map_err(|_| Error::MalformedMapFilename(name.to_string()))
    }

    /// Viewer URL pointing at these coordinates.
    pub fn viewer_url(&self) -> String {
        format!("{}#{}x{}", MAP_VIEWER_URL, self, VIEWER_ZOOM)
    }
}

impl fmt::Display for AreaCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}0x{}0", self.x, self.y)
    }
}
