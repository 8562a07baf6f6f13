//! Word extraction from binary map data.
//!
//! Map files are mostly binary with fragments of UTF-8 text embedded in
//! the noise. The extractor decodes what it can and turns the readable
//! stretches into a stream of word-like tokens.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of word characters (letters, digits, underscore).
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Extract word-like tokens from a raw byte buffer.
///
/// Decoding is UTF-8 with invalid byte sequences dropped, never
/// replaced. Whitespace, ASCII punctuation and dropped sequences all
/// separate word runs; adjacent runs never merge across them. Tokens of
/// a single character are discarded as noise. Order follows first
/// occurrence in the decoded text, duplicates included.
pub fn extract_tokens(bytes: &[u8]) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in bytes.utf8_chunks() {
        let cleaned: String = chunk
            .valid()
            .chars()
            .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
            .collect();
        for word in WORD.find_iter(&cleaned) {
            if word.as_str().chars().count() > 1 {
                tokens.push(word.as_str().to_string());
            }
        }
    }
    tokens
}
