//! Needle matching over per-file token streams and result formatting.

use std::path::Path;

use tracing::{debug, info};

use crate::coords::AreaCoords;
use crate::error::{Error, Result};
use crate::saves::{MapFileRead, SaveLocator, read_map_file};
use crate::tokens::extract_tokens;

/// Tokens from one map file that matched the needle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Map file the matches came from.
    pub file_name: String,
    /// Matching tokens, lowercased, in extraction order.
    pub matches: Vec<String>,
}

/// Search per-file token lists for a needle.
///
/// Matching is case-insensitive substring containment; matched tokens
/// are stored lowercased. Files with no match are left out of the
/// result set entirely. Result order follows input order, match order
/// follows token order. Empty and whitespace-only needles are rejected.
pub fn search_files<I>(files: I, needle: &str) -> Result<Vec<SearchResult>>
where
    I: IntoIterator<Item = (String, Vec<String>)>,
{
    if needle.trim().is_empty() {
        return Err(Error::EmptyNeedle);
    }
    let needle_lower = needle.to_lowercase();

    let mut results = Vec::new();
    for (file_name, tokens) in files {
        let matches: Vec<String> = tokens
            .iter()
            .map(|token| token.to_lowercase())
            .filter(|token| token.contains(&needle_lower))
            .collect();
        if !matches.is_empty() {
            results.push(SearchResult { file_name, matches });
        }
    }
    Ok(results)
}

/// Search every map file in a save directory.
///
/// Each candidate goes through the tagged read boundary; an unreadable
/// file contributes no tokens and never aborts the rest of the scan.
pub fn search_save(
    locator: &SaveLocator,
    save_dir: &Path,
    needle: &str,
) -> Result<Vec<SearchResult>> {
    let map_files = locator.map_files(save_dir);
    info!(
        "Scanning {} map file(s) in {}",
        map_files.len(),
        save_dir.display()
    );

    let files = map_files.into_iter().map(|name| {
        let tokens = match read_map_file(&save_dir.join(&name)) {
            MapFileRead::Contents(bytes) => extract_tokens(&bytes),
            MapFileRead::Unreadable { reason } => {
                debug!("No tokens from {}: {:?}", name, reason);
                Vec::new()
            }
        };
        (name, tokens)
    });
    search_files(files, needle)
}

/// Render results as display lines, four per result: coordinates,
/// matched items, viewer URL, separator.
pub fn format_results(results: &[SearchResult]) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(results.len() * 4);
    for result in results {
        let coords = AreaCoords::from_file_name(&result.file_name)?;
        lines.push(format!("Found in area with coords: {}", coords));
        lines.push(format!("(Matched items: {:?})", result.matches));
        lines.push(coords.viewer_url());
        lines.push(String::new());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_search_keeps_substring_matches_only() {
        let files = vec![(
            "map_1_2.bin".to_string(),
            tokens(&["wall", "doordoorwin", "dow", "ab"]),
        )];
        let results = search_files(files, "do").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matches, tokens(&["doordoorwin", "dow"]));
    }

    #[test]
    fn test_search_is_case_insensitive_and_lowercases_matches() {
        let files = vec![("map_1_2.bin".to_string(), tokens(&["WoodenDoor", "Wall"]))];
        let results = search_files(files, "DOOR").unwrap();
        assert_eq!(results[0].matches, tokens(&["woodendoor"]));
    }

    #[test]
    fn test_search_drops_files_without_matches() {
        let files = vec![
            ("map_1_1.bin".to_string(), tokens(&["door", "wall"])),
            ("map_2_2.bin".to_string(), tokens(&["grass", "tree"])),
            ("map_3_3.bin".to_string(), tokens(&["trapdoor"])),
        ];
        let results = search_files(files, "door").unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["map_1_1.bin", "map_3_3.bin"]);
    }

    #[test]
    fn test_search_preserves_input_file_order() {
        let files = vec![
            ("map_9_9.bin".to_string(), tokens(&["door"])),
            ("map_1_1.bin".to_string(), tokens(&["door"])),
        ];
        let results = search_files(files, "door").unwrap();
        assert_eq!(results[0].file_name, "map_9_9.bin");
        assert_eq!(results[1].file_name, "map_1_1.bin");
    }

    #[test]
    fn test_search_rejects_empty_needle() {
        let files = vec![("map_1_1.bin".to_string(), tokens(&["door"]))];
        assert!(matches!(search_files(files, ""), Err(Error::EmptyNeedle)));
    }

    #[test]
    fn test_search_rejects_whitespace_needle() {
        let files = vec![("map_1_1.bin".to_string(), tokens(&["door"]))];
        assert!(matches!(
            search_files(files, "  \t"),
            Err(Error::EmptyNeedle)
        ));
    }

    #[test]
    fn test_search_empty_input_yields_empty_results() {
        let results = search_files(Vec::new(), "door").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_over_extracted_tokens_end_to_end() {
        let bytes: &[u8] = b"wall\x00\x00doordoorwin\xffdow a ab";
        let files = vec![("map_12_34.bin".to_string(), extract_tokens(bytes))];
        let results = search_files(files, "do").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matches, tokens(&["doordoorwin", "dow"]));
    }

    #[test]
    fn test_format_emits_four_lines_per_result() {
        let results = vec![
            SearchResult {
                file_name: "map_12_34.bin".to_string(),
                matches: tokens(&["wall"]),
            },
            SearchResult {
                file_name: "map_5_6.bin".to_string(),
                matches: tokens(&["door", "trapdoor"]),
            },
        ];
        let lines = format_results(&results).unwrap();
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_format_line_contents() {
        let results = vec![SearchResult {
            file_name: "map_12_34.bin".to_string(),
            matches: tokens(&["wall"]),
        }];
        let lines = format_results(&results).unwrap();
        assert_eq!(lines[0], "Found in area with coords: 120x340");
        assert_eq!(lines[1], "(Matched items: [\"wall\"])");
        assert_eq!(lines[2], "https://map.projectzomboid.com/#120x340x512");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_format_rejects_malformed_file_name() {
        let results = vec![SearchResult {
            file_name: "backup.bin".to_string(),
            matches: tokens(&["wall"]),
        }];
        assert!(matches!(
            format_results(&results),
            Err(Error::MalformedMapFilename(_))
        ));
    }

    #[test]
    fn test_format_no_results_no_lines() {
        assert!(format_results(&[]).unwrap().is_empty());
    }

    mod save_scan {
        use super::*;
        use std::fs;
        use tempfile::TempDir;

        #[test]
        fn test_search_save_reads_matches_and_skips_unreadable() {
            let temp = TempDir::new().unwrap();
            let save_dir = temp.path().join("Survivor").join("MyTown");
            fs::create_dir_all(&save_dir).unwrap();
            fs::write(save_dir.join("map_1_1.bin"), b"wall\x00door\xffframe").unwrap();
            fs::write(save_dir.join("map_2_2.bin"), b"grass tree").unwrap();
            // Dangling symlink: enumerated as a candidate, then unreadable
            #[cfg(unix)]
            std::os::unix::fs::symlink("missing", save_dir.join("map_3_3.bin")).ok();

            let locator = SaveLocator::new(temp.path());
            let results = search_save(&locator, &save_dir, "door").unwrap();
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].file_name, "map_1_1.bin");
            assert_eq!(results[0].matches, tokens(&["door"]));
        }

        #[test]
        fn test_search_save_missing_directory_yields_empty() {
            let temp = TempDir::new().unwrap();
            let locator = SaveLocator::new(temp.path());
            let results = search_save(&locator, &temp.path().join("gone"), "door").unwrap();
            assert!(results.is_empty());
        }
    }
}
