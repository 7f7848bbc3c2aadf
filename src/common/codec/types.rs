use crate::common::bit_utils::BitStream;
use crate::common::error::QRError;
use crate::common::metadata::Version;

// Mode
//------------------------------------------------------------------------------

// Discriminants are the 4 bit mode indicators
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

impl TryFrom<u8> for Mode {
    type Error = QRError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Numeric),
            1 => Ok(Self::Alphanumeric),
            2 => Ok(Self::Byte),
            3 => Ok(Self::Kanji),
            _ => Err(QRError::InvalidConfiguration(format!("unknown mode index {value}"))),
        }
    }
}

impl Mode {
    // Column of the mode in the capacity & char count tables
    pub fn index(self) -> usize {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Byte => 2,
            Self::Kanji => 3,
        }
    }

    pub fn indicator(self) -> u8 {
        self as u8
    }

    #[inline]
    fn numeric_digit(char: u8) -> u16 {
        debug_assert!(char.is_ascii_digit(), "Invalid numeric data: {char}");
        (char - b'0') as u16
    }

    #[inline]
    fn alphanumeric_digit(char: u8) -> u16 {
        match char {
            b'0'..=b'9' => (char - b'0') as u16,
            b'A'..=b'Z' => (char - b'A' + 10) as u16,
            b' ' => 36,
            b'$' => 37,
            b'%' => 38,
            b'*' => 39,
            b'+' => 40,
            b'-' => 41,
            b'.' => 42,
            b'/' => 43,
            b':' => 44,
            _ => unreachable!("Invalid alphanumeric {char}"),
        }
    }

    // Packs up to 3 digits into a 10, 7 or 4 bit value
    pub fn numeric_chunk(data: &[u8]) -> u16 {
        debug_assert!(data.len() <= 3, "Data is too long for numeric conver: {}", data.len());
        data.iter().fold(0_u16, |n, b| n * 10 + Self::numeric_digit(*b))
    }

    // Packs up to 2 alphanumeric chars into an 11 or 6 bit value
    pub fn alphanumeric_chunk(data: &[u8]) -> u16 {
        debug_assert!(data.len() <= 2, "Data is too long for alphanumeric conver: {}", data.len());
        data.iter().fold(0_u16, |n, b| n * 45 + Self::alphanumeric_digit(*b))
    }

    // Remaps a double byte code into its 13 bit value. None if the code lies
    // outside 0x8140..=0x9FFC and 0xE040..=0xEBBF.
    pub fn kanji_value(hi: u8, lo: u8) -> Option<u16> {
        let code = ((hi as u16) << 8) | lo as u16;
        let adjusted = match code {
            0x8140..=0x9FFC => code - 0x8140,
            0xE040..=0xEBBF => code - 0xC140,
            _ => return None,
        };
        Some((adjusted >> 8) * 0xC0 + (adjusted & 0xFF))
    }

    // Char level predicate. Kanji validity depends on the transcoded bytes
    // and is checked against the transcoder output instead.
    pub fn contains(&self, ch: char) -> bool {
        match self {
            Self::Numeric => ch.is_ascii_digit(),
            Self::Alphanumeric => {
                matches!(ch, '0'..='9' | 'A'..='Z' | ' ' | '$' | '%' | '*' | '+' | '-' | '.' | '/' | ':')
            }
            Self::Byte => true,
            Self::Kanji => !ch.is_ascii(),
        }
    }

    // Bit length of the payload for `len` characters
    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
            Self::Kanji => len * 13,
        }
    }
}

#[cfg(test)]
mod mode_tests {

    use test_case::test_case;

    use super::Mode;
    use super::Mode::*;
    use crate::common::error::QRError;

    #[test]
    fn test_indicator() {
        assert_eq!(Numeric.indicator(), 0b0001);
        assert_eq!(Alphanumeric.indicator(), 0b0010);
        assert_eq!(Byte.indicator(), 0b0100);
        assert_eq!(Kanji.indicator(), 0b1000);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Mode::try_from(0), Ok(Numeric));
        assert_eq!(Mode::try_from(3), Ok(Kanji));
        assert!(matches!(Mode::try_from(4), Err(QRError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_numeric_digit() {
        assert_eq!(Mode::numeric_digit(b'0'), 0);
        assert_eq!(Mode::numeric_digit(b'9'), 9);
    }

    #[test]
    #[should_panic]
    fn test_invalid_numeric_digit() {
        Mode::numeric_digit(b'A');
    }

    #[test]
    fn test_alphanumeric_digit() {
        assert_eq!(Mode::alphanumeric_digit(b'0'), 0);
        assert_eq!(Mode::alphanumeric_digit(b'9'), 9);
        assert_eq!(Mode::alphanumeric_digit(b'A'), 10);
        assert_eq!(Mode::alphanumeric_digit(b'Z'), 35);
        assert_eq!(Mode::alphanumeric_digit(b' '), 36);
        assert_eq!(Mode::alphanumeric_digit(b':'), 44);
    }

    #[test]
    #[should_panic]
    fn test_invalid_alphanumeric_digit() {
        Mode::alphanumeric_digit(b'a');
    }

    #[test]
    fn test_numeric_encoding() {
        assert_eq!(Mode::numeric_chunk("012".as_bytes()), 0b0000001100);
        assert_eq!(Mode::numeric_chunk("345".as_bytes()), 0b0101011001);
        assert_eq!(Mode::numeric_chunk("901".as_bytes()), 0b1110000101);
        assert_eq!(Mode::numeric_chunk("67".as_bytes()), 0b1000011);
        assert_eq!(Mode::numeric_chunk("8".as_bytes()), 0b1000);
    }

    #[test]
    #[should_panic]
    fn test_invalid_numeric_encoding() {
        Mode::numeric_chunk("1234".as_bytes());
    }

    #[test]
    fn test_alphanumeric_encoding() {
        assert_eq!(Mode::alphanumeric_chunk("AC".as_bytes()), 0b00111001110);
        assert_eq!(Mode::alphanumeric_chunk("-4".as_bytes()), 0b11100111001);
        assert_eq!(Mode::alphanumeric_chunk("2".as_bytes()), 0b000010);
        assert_eq!(Mode::alphanumeric_chunk("HE".as_bytes()), 779);
    }

    #[test]
    #[should_panic]
    fn test_invalid_alphanumeric_encoding() {
        Mode::alphanumeric_chunk("1234".as_bytes());
    }

    #[test_case(0x93, 0x5F, Some(0xD9F))]
    #[test_case(0xE4, 0xAA, Some(0x1AAA))]
    #[test_case(0x89, 0xD7, Some(0x697))]
    #[test_case(0x81, 0x40, Some(0))]
    #[test_case(0xEB, 0xBF, Some(0x1FFF))]
    #[test_case(0x81, 0x3F, None)]
    #[test_case(0xA0, 0x40, None)]
    #[test_case(0xEB, 0xC0, None)]
    fn test_kanji_value(hi: u8, lo: u8, exp: Option<u16>) {
        assert_eq!(Mode::kanji_value(hi, lo), exp);
    }

    #[test]
    fn test_is_numeric() {
        assert!(Numeric.contains('0'));
        assert!(Numeric.contains('9'));
        assert!(!Numeric.contains('A'));
        assert!(!Numeric.contains(' '));
        assert!(!Numeric.contains('٣'));
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(Alphanumeric.contains('0'));
        assert!(Alphanumeric.contains('Z'));
        assert!(Alphanumeric.contains(' '));
        assert!(Alphanumeric.contains(':'));
        assert!(!Alphanumeric.contains('a'));
        assert!(!Alphanumeric.contains('@'));
        assert!(!Alphanumeric.contains('('));
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(Numeric.encoded_len(3), 10);
        assert_eq!(Numeric.encoded_len(2), 7);
        assert_eq!(Numeric.encoded_len(1), 4);
        assert_eq!(Alphanumeric.encoded_len(2), 11);
        assert_eq!(Alphanumeric.encoded_len(1), 6);
        assert_eq!(Byte.encoded_len(1), 8);
        assert_eq!(Kanji.encoded_len(2), 26);
    }
}

// Segment
//------------------------------------------------------------------------------

// Mode tagged payload. Exactly one segment is written per symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub mode: Mode,
    pub char_count: usize,
    pub payload: BitStream,
}

impl Segment {
    pub fn new(mode: Mode, char_count: usize, payload: BitStream) -> Self {
        debug_assert!(
            payload.len() == mode.encoded_len(char_count),
            "Payload length doesn't match char count: Payload {}, Char count {char_count}",
            payload.len()
        );
        Self { mode, char_count, payload }
    }

    // Header and payload bits once written into the given version
    pub fn bit_len(&self, ver: Version) -> usize {
        MODE_INDICATOR_BITS + ver.char_cnt_bits(self.mode) + self.payload.len()
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static MODE_INDICATOR_BITS: usize = 4;

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

// Auto selection order, byte is the fallback
pub static MODES: [Mode; 3] = [Mode::Numeric, Mode::Alphanumeric, Mode::Kanji];
