//! Encode and decode loops.
//!
//! In transmitted Morse, timing carries the structure: a dot is one unit, a
//! dash three, the gap inside a letter one, the gap between letters three and
//! the gap between words seven. This transcoder targets text, not a keyed
//! signal, and flattens all of that to a single space after every character's
//! pattern. Decoding splits on that same space, so letter separators and the
//! word gap are not distinguished on the way back.

use log::warn;
use std::fmt;

use crate::index::ReverseIndex;
use crate::table::pattern_for;

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The message contains a character outside the 7-bit ASCII table
    InvalidCharacter { ch: char, position: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidCharacter { ch, position } => {
                write!(
                    f,
                    "character {:?} at position {} has no place in the Morse table",
                    ch, position
                )
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encodes a message into dot/dash notation.
///
/// Every character's pattern is followed by one separator space, including
/// the last. Characters with no Morse representation contribute only their
/// separator; spaces and newlines contribute the word-gap pattern, which is
/// itself a space. Characters outside the ASCII table are skipped with a
/// logged warning — encoding a message never fails.
pub fn encode(message: &str) -> String {
    let mut out = String::with_capacity(message.len() * 5);
    for (position, ch) in message.chars().enumerate() {
        match pattern_for(ch) {
            Some(pattern) => {
                out.push_str(pattern);
                out.push(' ');
            }
            None => {
                warn!("skipping {:?} at position {}: not in the Morse table", ch, position);
            }
        }
    }
    out
}

/// Encodes a message, failing on the first character outside the ASCII table.
///
/// Identical output to [`encode`] for messages that stay within the table.
pub fn encode_strict(message: &str) -> Result<String, EncodeError> {
    for (position, ch) in message.chars().enumerate() {
        if pattern_for(ch).is_none() {
            return Err(EncodeError::InvalidCharacter { ch, position });
        }
    }
    Ok(encode(message))
}

/// Decodes dot/dash notation back into text.
///
/// The input is split on single spaces; runs of separators produce empty
/// tokens, which are skipped. Each remaining token is looked up in the
/// reverse index. A token that matches no pattern decodes to a substitute
/// space with a logged warning, so garbled input degrades into extra
/// whitespace instead of stopping the transcription.
pub fn decode(input: &str, index: &ReverseIndex) -> String {
    let mut out = String::new();
    for token in input.split(' ') {
        if token.is_empty() {
            continue;
        }
        match index.lookup(token) {
            Some(ch) => out.push(ch),
            None => {
                warn!("unknown pattern {:?}: substituting a space", token);
                out.push(' ');
            }
        }
    }
    out
}
