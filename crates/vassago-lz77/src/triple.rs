//! Packing and unpacking of back-reference triples.

use vassago_core::OffsetBits;

/// Size in bytes of one packed triple.
pub const TRIPLE_SIZE: usize = 3;

/// One LZ77 token: a back-reference plus the literal that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    /// Distance back from the current output position to the start of
    /// the copied run; 0 when there is no match.
    pub offset: u16,
    /// Number of bytes to copy from that run; 0 when there is no match.
    pub length: u16,
    /// The byte appended after the copied run.
    pub literal: u8,
}

impl Triple {
    /// A match-less triple carrying only a literal.
    pub fn literal_only(literal: u8) -> Self {
        Triple {
            offset: 0,
            length: 0,
            literal,
        }
    }

    /// Pack into wire form. Both fields must fit the widths implied by
    /// `offset_bits`; the encoder's window and length caps guarantee it.
    pub fn pack(self, offset_bits: OffsetBits) -> [u8; TRIPLE_SIZE] {
        debug_assert!(self.offset as usize <= offset_bits.max_offset());
        debug_assert!(self.length as usize <= offset_bits.max_match_len());

        let word = (self.offset << (16 - offset_bits.get())) | self.length;
        [(word >> 8) as u8, word as u8, self.literal]
    }

    /// Unpack from wire form.
    pub fn unpack(bytes: [u8; TRIPLE_SIZE], offset_bits: OffsetBits) -> Self {
        let word = u16::from_be_bytes([bytes[0], bytes[1]]);
        let length_bits = 16 - offset_bits.get();
        Triple {
            offset: word >> length_bits,
            length: word & ((1 << length_bits) - 1),
            literal: bytes[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(n: u8) -> OffsetBits {
        OffsetBits::new(n).unwrap()
    }

    #[test]
    fn test_even_split_is_byte_aligned() {
        let triple = Triple {
            offset: 3,
            length: 7,
            literal: b'x',
        };
        assert_eq!(triple.pack(bits(8)), [3, 7, b'x']);
    }

    #[test]
    fn test_literal_only() {
        let triple = Triple::literal_only(b'q');
        assert_eq!(triple.pack(bits(8)), [0, 0, b'q']);
        assert_eq!(triple.pack(bits(3)), [0, 0, b'q']);
    }

    #[test]
    fn test_roundtrip_all_widths_at_field_limits() {
        for n in 1..=15u8 {
            let offset_bits = bits(n);
            let triple = Triple {
                offset: offset_bits.max_offset() as u16,
                length: offset_bits.max_match_len() as u16,
                literal: 0xA5,
            };
            let unpacked = Triple::unpack(triple.pack(offset_bits), offset_bits);
            assert_eq!(unpacked, triple, "width {n}");
        }
    }

    #[test]
    fn test_roundtrip_uneven_split() {
        let offset_bits = bits(11);
        let triple = Triple {
            offset: 0x5A3,
            length: 0x1C,
            literal: 0x00,
        };
        let unpacked = Triple::unpack(triple.pack(offset_bits), offset_bits);
        assert_eq!(unpacked, triple);
    }
}
