//! Pattern-to-character reverse index, built from the forward table.

use log::{debug, warn};
use std::collections::HashMap;

use crate::table::MORSE_TABLE;

/// Maps a Morse pattern back to the character it encodes.
///
/// Built once by scanning [`MORSE_TABLE`] in index order and consulted once
/// per decode token. If two table entries carry the identical pattern, the
/// earlier entry wins and the later one is dropped; in the canonical table
/// this only happens for the upper/lower case pairs and the two word
/// separators, so decoded letters come back uppercase.
#[derive(Debug, Clone)]
pub struct ReverseIndex {
    entries: HashMap<&'static str, char>,
}

impl ReverseIndex {
    /// Builds the index from the forward table.
    ///
    /// Entries with an empty pattern are skipped. Building is deterministic:
    /// two builds always produce identical lookup results.
    pub fn build() -> Self {
        let mut entries: HashMap<&'static str, char> = HashMap::new();

        for (code, &pattern) in MORSE_TABLE.iter().enumerate() {
            if pattern.is_empty() {
                continue;
            }
            let ch = code as u8 as char;
            if let Some(&existing) = entries.get(pattern) {
                warn!(
                    "duplicate pattern {:?}: keeping {:?}, dropping {:?}",
                    pattern, existing, ch
                );
                continue;
            }
            entries.insert(pattern, ch);
        }

        debug!("reverse index built: {} patterns", entries.len());
        ReverseIndex { entries }
    }

    /// Looks up the character for a pattern.
    ///
    /// Equality is exact: no prefix matching, no trimming. Returns `None` for
    /// any pattern the table does not define.
    pub fn lookup(&self, pattern: &str) -> Option<char> {
        self.entries.get(pattern).copied()
    }

    /// Number of distinct patterns in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no patterns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
