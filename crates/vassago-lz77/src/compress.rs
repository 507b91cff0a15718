//! LZ77 compression: greedy longest-match search over a sliding window.

use vassago_core::OffsetBits;

use crate::triple::Triple;
use crate::window::WindowIndex;

/// Number of equal bytes at `data[from..]` and `data[at..]`, capped at
/// `limit`.
#[inline]
fn match_length(data: &[u8], from: usize, at: usize, limit: usize) -> usize {
    let mut len = 0;
    while len < limit && data[from + len] == data[at + len] {
        len += 1;
    }
    len
}

/// Compress `input` into a sequence of packed triples.
///
/// The output length is always a multiple of 3. An `offset_bits` outside
/// `1..=15` yields an empty buffer, a defined no-op rather than an error.
/// The decoder must be handed the same `offset_bits`; the stream does not
/// carry it.
pub fn lz77_encode(input: &[u8], offset_bits: u8) -> Vec<u8> {
    let Ok(offset_bits) = OffsetBits::new(offset_bits) else {
        return Vec::new();
    };

    let mut index = WindowIndex::new(offset_bits.max_offset());
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let mut best_len = 0;
        let mut best_offset = 0;

        // Every triple ends in a literal taken from the input, so a match
        // may reach at most the second-to-last unconsumed byte.
        let limit = offset_bits.max_match_len().min(input.len() - pos - 1);
        if limit > 0 {
            for candidate in index.candidates(input[pos], pos) {
                let len = match_length(input, candidate, pos, limit);
                let offset = pos - candidate;
                // Longest match wins; among equal lengths the nearest
                // candidate does. Iteration runs farthest-first, so the
                // tie-break resolves on the later candidate.
                if len > best_len || (len == best_len && offset < best_offset) {
                    best_len = len;
                    best_offset = offset;
                }
            }
        }

        let triple = Triple {
            offset: best_offset as u16,
            length: best_len as u16,
            literal: input[pos + best_len],
        };
        out.extend_from_slice(&triple.pack(offset_bits));

        // The matched run and its literal all become candidates for
        // later matches.
        for covered in pos..=pos + best_len {
            index.insert(input[covered], covered);
        }
        pos += best_len + 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triple::TRIPLE_SIZE;
    use vassago_core::OffsetBits;

    fn unpack_all(encoded: &[u8], offset_bits: u8) -> Vec<Triple> {
        let offset_bits = OffsetBits::new(offset_bits).unwrap();
        encoded
            .chunks_exact(TRIPLE_SIZE)
            .map(|c| Triple::unpack([c[0], c[1], c[2]], offset_bits))
            .collect()
    }

    #[test]
    fn test_out_of_range_offset_bits_are_a_noop() {
        assert!(lz77_encode(b"data", 0).is_empty());
        assert!(lz77_encode(b"data", 16).is_empty());
        assert!(lz77_encode(b"data", 255).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(lz77_encode(b"", 8).is_empty());
    }

    #[test]
    fn test_output_is_whole_triples() {
        for input in [&b"x"[..], b"xy", b"hello hello hello", b"abcdefgh"] {
            assert_eq!(lz77_encode(input, 8).len() % TRIPLE_SIZE, 0);
        }
    }

    #[test]
    fn test_incompressible_input_is_all_literals() {
        let encoded = lz77_encode(b"abc", 8);
        assert_eq!(
            unpack_all(&encoded, 8),
            vec![
                Triple::literal_only(b'a'),
                Triple::literal_only(b'b'),
                Triple::literal_only(b'c'),
            ]
        );
    }

    #[test]
    fn test_identical_run_emits_maximal_overlap_triple() {
        // One literal for the first byte, then a single overlapping copy
        // covering the rest of the run with its closing literal.
        let encoded = lz77_encode(b"AAAAAAAA", 8);
        assert_eq!(encoded, vec![0, 0, b'A', 1, 6, b'A']);
    }

    #[test]
    fn test_repeated_phrase_is_back_referenced() {
        let triples = unpack_all(&lz77_encode(b"abcabcabc", 8), 8);
        assert_eq!(
            triples,
            vec![
                Triple::literal_only(b'a'),
                Triple::literal_only(b'b'),
                Triple::literal_only(b'c'),
                Triple {
                    offset: 3,
                    length: 5,
                    literal: b'c'
                },
            ]
        );
    }

    #[test]
    fn test_equal_length_tie_prefers_nearest() {
        // At the final "ab", candidates at 0 and 3 both match one byte
        // (the lookahead cap leaves no second); distance 3 must win over
        // distance 6.
        let triples = unpack_all(&lz77_encode(b"abxabyab", 8), 8);
        let last = triples.last().unwrap();
        assert_eq!((last.offset, last.length, last.literal), (3, 1, b'b'));
    }

    #[test]
    fn test_window_bound_is_respected() {
        let input: Vec<u8> = b"ab".iter().cycle().take(64).copied().collect();
        for offset_bits in [1u8, 2, 3, 8] {
            let limits = OffsetBits::new(offset_bits).unwrap();
            for triple in unpack_all(&lz77_encode(&input, offset_bits), offset_bits) {
                assert!(triple.offset as usize <= limits.max_offset());
                assert!(triple.length as usize <= limits.max_match_len());
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let input = b"deterministic output, byte for byte, run after run";
        assert_eq!(lz77_encode(input, 8), lz77_encode(input, 8));
        assert_eq!(lz77_encode(input, 11), lz77_encode(input, 11));
    }
}
