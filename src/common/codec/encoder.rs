pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use log::debug;

    use super::writer::{
        pad_remaining_capacity, push_alphanumeric_data, push_byte_data, push_header,
        push_kanji_data, push_numeric_data, push_terminator,
    };
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::transcode::Transcoder;
    use crate::common::codec::{Mode, Segment, MODES};
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    // Smallest version fitting the text. Returns the data codewords.
    pub fn encode(
        text: &str,
        mode: Option<Mode>,
        ecl: ECLevel,
        transcoder: &dyn Transcoder,
    ) -> QRResult<(Vec<u8>, Version, Mode)> {
        let seg = build_segment(text, mode, transcoder)?;
        let ver = find_min_version(&seg, ecl)?;
        Ok((assemble(&seg, ver, ecl), ver, seg.mode))
    }

    pub fn encode_with_version(
        text: &str,
        mode: Option<Mode>,
        ver: Version,
        ecl: ECLevel,
        transcoder: &dyn Transcoder,
    ) -> QRResult<(Vec<u8>, Mode)> {
        let seg = build_segment(text, mode, transcoder)?;
        if seg.char_count > ver.char_capacity(ecl, seg.mode) {
            return Err(QRError::CapacityExceeded {
                mode: seg.mode,
                ec_level: ecl,
                char_count: seg.char_count,
            });
        }
        Ok((assemble(&seg, ver, ecl), seg.mode))
    }

    // First mode whose predicate accepts the whole text, byte otherwise
    pub fn select_mode(text: &str, transcoder: &dyn Transcoder) -> Mode {
        let mode = MODES
            .iter()
            .copied()
            .find(|&m| match m {
                Mode::Kanji => {
                    text.chars().all(|ch| m.contains(ch)) && kanji_codes(text, transcoder).is_ok()
                }
                _ => text.chars().all(|ch| m.contains(ch)),
            })
            .unwrap_or(Mode::Byte);
        debug!("Selected {mode:?} mode for {} chars", text.chars().count());
        mode
    }

    pub fn build_segment(
        text: &str,
        mode: Option<Mode>,
        transcoder: &dyn Transcoder,
    ) -> QRResult<Segment> {
        let mode = mode.unwrap_or_else(|| select_mode(text, transcoder));
        let mut payload = BitStream::with_capacity(text.len() * 8);
        let char_count = match mode {
            Mode::Numeric => {
                validate_chars(text, mode)?;
                push_numeric_data(text.as_bytes(), &mut payload);
                text.len()
            }
            Mode::Alphanumeric => {
                validate_chars(text, mode)?;
                push_alphanumeric_data(text.as_bytes(), &mut payload);
                text.len()
            }
            Mode::Byte => {
                push_byte_data(text.as_bytes(), &mut payload);
                text.len()
            }
            Mode::Kanji => {
                let codes = kanji_codes(text, transcoder)?;
                push_kanji_data(&codes, &mut payload);
                codes.len()
            }
        };
        Ok(Segment::new(mode, char_count, payload))
    }

    fn validate_chars(text: &str, mode: Mode) -> QRResult<()> {
        match text.chars().enumerate().find(|&(_, ch)| !mode.contains(ch)) {
            Some((position, ch)) => Err(QRError::InvalidCharacter { mode, position, ch }),
            None => Ok(()),
        }
    }

    // 13 bit values of the transcoded double byte codes
    fn kanji_codes(text: &str, transcoder: &dyn Transcoder) -> QRResult<Vec<u16>> {
        let bytes = transcoder.transcode(text)?;
        if bytes.len() % 2 != 0 {
            return Err(QRError::TranscodingFailure(format!(
                "odd transcoded length {} for {text:?}",
                bytes.len()
            )));
        }
        bytes
            .chunks_exact(2)
            .enumerate()
            .map(|(i, pair)| {
                Mode::kanji_value(pair[0], pair[1]).ok_or_else(|| {
                    QRError::TranscodingFailure(format!(
                        "double byte code {:#04x}{:02x} at pair {i} is out of kanji range",
                        pair[0], pair[1]
                    ))
                })
            })
            .collect()
    }

    fn find_min_version(seg: &Segment, ecl: ECLevel) -> QRResult<Version> {
        let ver = Version::all()
            .find(|v| seg.char_count <= v.char_capacity(ecl, seg.mode))
            .ok_or(QRError::CapacityExceeded {
                mode: seg.mode,
                ec_level: ecl,
                char_count: seg.char_count,
            })?;
        debug!("Smallest version for {} {:?} chars at {ecl:?}: {}", seg.char_count, seg.mode, *ver);
        Ok(ver)
    }

    // Header, payload, terminator & padding up to the data codeword count
    fn assemble(seg: &Segment, ver: Version, ecl: ECLevel) -> Vec<u8> {
        let bit_capacity = ver.data_bit_capacity(ecl);
        debug_assert!(
            seg.bit_len(ver) <= bit_capacity,
            "Segment exceeds data capacity: Segment {}, Capacity {bit_capacity}",
            seg.bit_len(ver)
        );

        let mut bs = BitStream::with_capacity(bit_capacity);
        push_header(seg, ver, &mut bs);
        for bit in seg.payload.iter() {
            bs.push(bit);
        }
        push_terminator(&mut bs, bit_capacity);
        pad_remaining_capacity(&mut bs, bit_capacity);
        debug!("Assembled {} data codewords", bs.len() >> 3);
        bs.finalize()
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{Mode, Segment, MODE_INDICATOR_BITS, PADDING_CODEWORDS};
    use crate::common::metadata::Version;

    pub fn push_header(seg: &Segment, ver: Version, out: &mut BitStream) {
        out.push_bits(seg.mode.indicator(), MODE_INDICATOR_BITS);
        let len_bits = ver.char_cnt_bits(seg.mode);
        debug_assert!(
            seg.char_count < (1 << len_bits),
            "Char count exceeds bit length: Char count {}, Char count bits {len_bits}",
            seg.char_count
        );
        out.push_bits(seg.char_count as u16, len_bits);
    }

    pub fn push_numeric_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(3) {
            let len = (chunk.len() * 10).div_ceil(3);
            let data = Mode::numeric_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    pub fn push_alphanumeric_data(data: &[u8], out: &mut BitStream) {
        for chunk in data.chunks(2) {
            let len = (chunk.len() * 11).div_ceil(2);
            let data = Mode::alphanumeric_chunk(chunk);
            out.push_bits(data, len);
        }
    }

    pub fn push_byte_data(data: &[u8], out: &mut BitStream) {
        for &b in data {
            out.push_bits(b, 8);
        }
    }

    pub fn push_kanji_data(codes: &[u16], out: &mut BitStream) {
        for &code in codes {
            debug_assert!(code < (1 << 13), "Kanji value exceeds 13 bits: {code}");
            out.push_bits(code, 13);
        }
    }

    pub fn push_terminator(out: &mut BitStream, bit_capacity: usize) {
        let bit_len = out.len();
        if bit_len < bit_capacity {
            let term_len = std::cmp::min(4, bit_capacity - bit_len);
            out.push_bits(0u8, term_len);
        }
    }

    pub fn pad_remaining_capacity(out: &mut BitStream, bit_capacity: usize) {
        push_padding_bits(out);
        push_padding_codewords(out, bit_capacity);
    }

    fn push_padding_bits(out: &mut BitStream) {
        let offset = out.len() & 7;
        if offset > 0 {
            let padding_bits_len = 8 - offset;
            out.push_bits(0u8, padding_bits_len);
        }
    }

    fn push_padding_codewords(out: &mut BitStream, bit_capacity: usize) {
        let offset = out.len() & 7;
        debug_assert!(
            offset == 0,
            "Bit offset should be zero before padding codewords: {}",
            offset
        );

        let remain_byte_capacity = (bit_capacity - out.len()) >> 3;
        PADDING_CODEWORDS.iter().copied().cycle().take(remain_byte_capacity).for_each(|pc| {
            out.push_bits(pc, 8);
        });
    }

    #[cfg(test)]
    mod writer_tests {
        use test_case::test_case;

        use super::{
            push_alphanumeric_data, push_byte_data, push_header, push_kanji_data,
            push_numeric_data, push_padding_bits, push_padding_codewords, push_terminator, Mode,
            Segment, PADDING_CODEWORDS,
        };
        use crate::common::bit_utils::BitStream;
        use crate::common::metadata::{ECLevel, Version};

        fn segment(mode: Mode, char_count: usize) -> Segment {
            let mut payload = BitStream::new();
            for _ in 0..mode.encoded_len(char_count) {
                payload.push(false);
            }
            Segment::new(mode, char_count, payload)
        }

        #[test_case(1, Mode::Numeric, 1023, vec![0b00011111, 0b11111100])]
        #[test_case(1, Mode::Alphanumeric, 511, vec![0b00101111, 0b11111000])]
        #[test_case(1, Mode::Byte, 255, vec![0b01001111, 0b11110000])]
        #[test_case(1, Mode::Kanji, 255, vec![0b10001111, 0b11110000])]
        #[test_case(10, Mode::Numeric, 4095, vec![0b00011111, 0b11111111])]
        #[test_case(10, Mode::Alphanumeric, 2047, vec![0b00101111, 0b11111110])]
        #[test_case(10, Mode::Byte, 65535, vec![0b01001111, 0b11111111, 0b11110000])]
        #[test_case(27, Mode::Numeric, 16383, vec![0b00011111, 0b11111111, 0b11000000])]
        #[test_case(27, Mode::Alphanumeric, 8191, vec![0b00101111, 0b11111111, 0b10000000])]
        #[test_case(27, Mode::Kanji, 4095, vec![0b10001111, 0b11111111])]
        fn test_push_header(v: usize, mode: Mode, char_count: usize, exp: Vec<u8>) {
            let ver = Version::new(v).unwrap();
            let mut bs = BitStream::new();
            push_header(&segment(mode, char_count), ver, &mut bs);
            assert_eq!(bs.data(), exp);
        }

        #[test]
        fn test_push_numeric_data() {
            let mut bs = BitStream::new();
            push_numeric_data("01234567".as_bytes(), &mut bs);
            assert_eq!(bs.data(), vec![0b00000011, 0b00010101, 0b10011000, 0b01100000]);
            let mut bs = BitStream::new();
            push_numeric_data("8".as_bytes(), &mut bs);
            assert_eq!(bs.data(), vec![0b10000000]);
        }

        #[test]
        fn test_push_alphanumeric_data() {
            let mut bs = BitStream::new();
            push_alphanumeric_data("AC-42".as_bytes(), &mut bs);
            assert_eq!(bs.data(), vec![0b00111001, 0b11011100, 0b11100100, 0b00100000])
        }

        #[test]
        fn test_push_byte_data() {
            let mut bs = BitStream::new();
            push_byte_data("a".as_bytes(), &mut bs);
            assert_eq!(bs.data(), vec![0b01100001])
        }

        #[test]
        fn test_push_kanji_data() {
            let mut bs = BitStream::new();
            push_kanji_data(&[0x1AAA, 0x697], &mut bs);
            assert_eq!(bs.len(), 26);
            assert_eq!(bs.data(), vec![0b11010101, 0b01010001, 0b10100101, 0b11000000]);
        }

        #[test]
        fn test_push_terminator() {
            let bit_capacity = Version::new(1).unwrap().data_bit_capacity(ECLevel::L);
            let mut bs = BitStream::new();
            bs.push_bits(0b1u8, 1);
            push_terminator(&mut bs, bit_capacity);
            assert_eq!(bs.data(), vec![0b10000000]);
            assert_eq!(bs.len(), 5);
            // Only 2 bits left, so the terminator is clipped
            while bs.len() < bit_capacity - 2 {
                bs.push(true);
            }
            push_terminator(&mut bs, bit_capacity);
            assert_eq!(bs.len(), bit_capacity);
            push_terminator(&mut bs, bit_capacity);
            assert_eq!(bs.len(), bit_capacity);
        }

        #[test]
        fn test_push_padding_bits() {
            let mut bs = BitStream::new();
            bs.push_bits(0b1u8, 1);
            push_padding_bits(&mut bs);
            assert_eq!(bs.data(), vec![0b10000000]);
            assert_eq!(bs.len() & 7, 0);
        }

        #[test]
        fn test_push_padding_codewords() {
            let bit_capacity = Version::new(1).unwrap().data_bit_capacity(ECLevel::L);
            let mut bs = BitStream::new();
            bs.push_bits(0b1u8, 1);
            push_padding_bits(&mut bs);
            push_padding_codewords(&mut bs, bit_capacity);
            let mut output = vec![0b10000000];
            output.extend(PADDING_CODEWORDS.iter().cycle().take(18));
            assert_eq!(bs.data(), output);
        }
    }
}
