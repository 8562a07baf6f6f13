//! JSON export of search results.

use serde::Serialize;

use crate::coords::AreaCoords;
use crate::error::Result;
use crate::search::SearchResult;

/// Search result JSON structure for serialization
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultJson {
    pub file: String,
    pub coords: String,
    pub url: String,
    pub matches: Vec<String>,
}

impl SearchResultJson {
    /// Build the JSON row for one result.
    pub fn from_result(result: &SearchResult) -> Result<Self> {
        let coords = AreaCoords::from_file_name(&result.file_name)?;
        Ok(Self {
            file: result.file_name.clone(),
            coords: coords.to_string(),
            url: coords.viewer_url(),
            matches: result.matches.clone(),
        })
    }
}

/// Render all results as a pretty-printed JSON array.
pub fn results_to_json(results: &[SearchResult]) -> Result<String> {
    let entries: Vec<SearchResultJson> = results
        .iter()
        .map(SearchResultJson::from_result)
        .collect::<Result<_>>()?;
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_to_json_round_trips_fields() {
        let results = vec![SearchResult {
            file_name: "map_12_34.bin".to_string(),
            matches: vec!["wall".to_string(), "walled".to_string()],
        }];
        let json = results_to_json(&results).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["file"], "map_12_34.bin");
        assert_eq!(entries[0]["coords"], "120x340");
        assert_eq!(
            entries[0]["url"],
            "https://map.projectzomboid.com/#120x340x512"
        );
        assert_eq!(entries[0]["matches"][1], "walled");
    }

    #[test]
    fn test_results_to_json_empty_is_empty_array() {
        let json = results_to_json(&[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[test]
    fn test_results_to_json_malformed_name_errors() {
        let results = vec![SearchResult {
            file_name: "backup.bin".to_string(),
            matches: vec!["wall".to_string()],
        }];
        assert!(results_to_json(&results).is_err());
    }
}
