use crate::{ReverseIndex, decode, encode, encode_strict, pattern_for};

#[test]
fn test_encode_sos() {
    assert_eq!(encode("SOS"), "... --- ... ");
}

#[test]
fn test_decode_sos() {
    let index = ReverseIndex::build();
    assert_eq!(decode("... --- ...", &index), "SOS");
}

#[test]
fn test_case_insensitive_encoding() {
    assert_eq!(encode("A"), encode("a"));
    assert_eq!(encode("Hello"), encode("HELLO"));
}

#[test]
fn test_roundtrip_every_marked_character() {
    let index = ReverseIndex::build();
    for code in 0u8..128 {
        let ch = code as char;
        let pattern = pattern_for(ch).unwrap();
        if pattern.is_empty() || pattern == crate::WORD_GAP {
            continue;
        }
        let expected = ch.to_ascii_uppercase();
        assert_eq!(
            decode(encode(&ch.to_string()).trim_end(), &index),
            expected.to_string(),
            "round-trip failed for {:?}",
            ch
        );
    }
}

#[test]
fn test_encode_separator_per_character() {
    // One trailing space after every pattern, word boundary or not.
    assert_eq!(encode("et"), ". - ");
    assert_eq!(encode("e t"), ".   - ");
    assert_eq!(encode("e\nt"), ".   - ");
}

#[test]
fn test_encode_unmapped_ascii_emits_bare_separator() {
    // '#' has no pattern; only its separator shows up.
    assert_eq!(encode("#"), " ");
    assert_eq!(encode("e#e"), ".  . ");
}

#[test]
fn test_encode_skips_non_ascii() {
    assert_eq!(encode("é"), "");
    assert_eq!(encode("aéb"), ".- -... ");
}

#[test]
fn test_encode_strict_rejects_non_ascii() {
    let err = encode_strict("ab£cd").unwrap_err();
    assert_eq!(
        err,
        crate::EncodeError::InvalidCharacter { ch: '£', position: 2 }
    );
    assert!(err.to_string().contains("position 2"));
}

#[test]
fn test_encode_strict_matches_encode_on_clean_input() {
    assert_eq!(encode_strict("cq de k7abc").unwrap(), encode("cq de k7abc"));
}

#[test]
fn test_decode_unknown_pattern_substitutes_space() {
    let index = ReverseIndex::build();
    assert_eq!(decode("......", &index), " ");
    assert_eq!(decode("... ...... ...", &index), "S S");
}

#[test]
fn test_decode_empty_input() {
    let index = ReverseIndex::build();
    assert_eq!(decode("", &index), "");
}

#[test]
fn test_decode_separator_runs_are_skipped() {
    let index = ReverseIndex::build();
    assert_eq!(decode("  ", &index), "");
    assert_eq!(decode("...   ---", &index), "SO");
    assert_eq!(decode(" ... ", &index), "S");
}

#[test]
fn test_decode_of_encoded_sentence_drops_word_gaps() {
    // The word-gap pattern is a space, so splitting eats it: words run
    // together on the way back.
    let index = ReverseIndex::build();
    assert_eq!(decode(&encode("cq dx"), &index), "CQDX");
}

#[test]
fn test_decode_digits_and_punctuation() {
    let index = ReverseIndex::build();
    assert_eq!(
        decode("-.-.-- ..--.. .-.-.- -----", &index),
        "!?.0"
    );
}

#[test]
fn test_rebuilt_index_decodes_identically() {
    let message = "the quick brown fox 1234567890";
    let encoded = encode(message);
    let first = decode(&encoded, &ReverseIndex::build());
    let second = decode(&encoded, &ReverseIndex::build());
    assert_eq!(first, second);
}
