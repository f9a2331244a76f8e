//! Character-to-pattern table for International Morse Code.
//!
//! Patterns are strings over `.` and `-`, at most six marks long. The table
//! covers the full 7-bit ASCII range; characters with no Morse representation
//! carry an empty pattern. Upper and lower case letters are stored as separate
//! entries with identical patterns, so callers never need to fold case before
//! a lookup.

/// Number of entries in [`MORSE_TABLE`], one per 7-bit ASCII code.
pub const TABLE_SIZE: usize = 128;

/// Pattern assigned to the word separators (space and newline).
///
/// A single space, not a mark sequence. It stands in for the inter-word gap
/// and is deliberately distinct from every letter pattern.
pub const WORD_GAP: &str = " ";

/// Morse pattern for each ASCII code, indexed by the code itself.
///
/// Entry order is load-bearing: the reverse index scans this table in index
/// order and the first entry to claim a pattern keeps it. Do not reorder.
pub static MORSE_TABLE: [&str; TABLE_SIZE] = [
    "", "", "", "", "", "", "", "", "", "", // NUL..HT
    WORD_GAP, // LF, treated as a word separator
    "", "", "", "", "", "", "", "", "", // VT..US (11-31)
    "", "", "", "", "", "", "", "", "", "", //
    "", "", //
    WORD_GAP, // space
    "-.-.--", // !  not in the ITU-R recommendation
    ".-..-.", // "
    "",       // #
    "",       // $
    "",       // %
    ".-...",  // &
    ".----.", // '
    "-.--.",  // (
    "-.--.-", // )
    "",       // *
    ".-.-.",  // +
    "--..--", // ,
    "-....-", // -
    ".-.-.-", // .
    "-..-.",  // /
    "-----",  // 0
    ".----",  // 1
    "..---",  // 2
    "...--",  // 3
    "....-",  // 4
    ".....",  // 5
    "-....",  // 6
    "--...",  // 7
    "---..",  // 8
    "----.",  // 9
    "---...", // :
    "",       // ;
    "",       // <
    "-...-",  // =
    "",       // >
    "..--..", // ?
    ".--.-.", // @
    ".-",     // A
    "-...",   // B
    "-.-.",   // C
    "-..",    // D
    ".",      // E
    "..-.",   // F
    "--.",    // G
    "....",   // H
    "..",     // I
    ".---",   // J
    "-.-",    // K
    ".-..",   // L
    "--",     // M
    "-.",     // N
    "---",    // O
    ".--.",   // P
    "--.-",   // Q
    ".-.",    // R
    "...",    // S
    "-",      // T
    "..-",    // U
    "...-",   // V
    ".--",    // W
    "-..-",   // X
    "-.--",   // Y
    "--..",   // Z
    "",       // [
    "",       // backslash
    "",       // ]
    "",       // ^
    "",       // _
    "",       // `
    ".-",     // a
    "-...",   // b
    "-.-.",   // c
    "-..",    // d
    ".",      // e
    "..-.",   // f
    "--.",    // g
    "....",   // h
    "..",     // i
    ".---",   // j
    "-.-",    // k
    ".-..",   // l
    "--",     // m
    "-.",     // n
    "---",    // o
    ".--.",   // p
    "--.-",   // q
    ".-.",    // r
    "...",    // s
    "-",      // t
    "..-",    // u
    "...-",   // v
    ".--",    // w
    "-..-",   // x
    "-.--",   // y
    "--..",   // z
    "", "", "", "", "", // {..DEL
];

/// Returns the pattern for a character, or `None` outside the ASCII range.
///
/// An empty pattern means the character is valid ASCII but has no Morse
/// representation.
pub fn pattern_for(ch: char) -> Option<&'static str> {
    MORSE_TABLE.get(ch as usize).copied()
}
