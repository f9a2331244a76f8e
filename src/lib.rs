mod codec;
mod config;
mod index;
mod table;

pub use codec::{EncodeError, decode, encode, encode_strict};
pub use config::{Mode, Settings};
pub use index::ReverseIndex;
pub use table::{MORSE_TABLE, TABLE_SIZE, WORD_GAP, pattern_for};

#[cfg(test)]
mod tests;
