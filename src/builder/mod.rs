mod qr;

pub use qr::{Module, ModuleValue, QR};

use std::ops::Deref;

use log::{debug, info};

use crate::common::{
    codec::{encode, encode_with_version, Mode, ShiftJis, Transcoder},
    ec::{ecc_with_generator, generator_polynomial},
    error::QRResult,
    mask::{apply_best_mask, MaskPattern, PenaltyRules},
    metadata::{ECLevel, Version},
};

pub struct QRBuilder<'a> {
    text: &'a str,
    version: Option<Version>,
    ec_level: ECLevel,
    mode: Option<Mode>,
    mask: Option<MaskPattern>,
    penalty_rules: PenaltyRules,
    transcoder: &'a dyn Transcoder,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            version: None,
            ec_level: ECLevel::M,
            mode: None,
            mask: None,
            penalty_rules: PenaltyRules::Basic,
            transcoder: &ShiftJis,
        }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = Some(mode);
        self
    }

    pub fn unset_mode(&mut self) -> &mut Self {
        self.mode = None;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn penalty_rules(&mut self, rules: PenaltyRules) -> &mut Self {
        self.penalty_rules = rules;
        self
    }

    pub fn transcoder(&mut self, transcoder: &'a dyn Transcoder) -> &mut Self {
        self.transcoder = transcoder;
        self
    }

    pub fn metadata(&self) -> String {
        let ver = self.version.map_or("None".to_string(), |v| (*v).to_string());
        let mode = self.mode.map_or("Auto".to_string(), |m| format!("{m:?}"));
        format!("{{ Version: {ver}, Ec level: {:?}, Mode: {mode} }}", self.ec_level)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        let mut qr = self.build_unmasked()?;

        let mask = match self.mask {
            Some(m) => {
                debug!("Applying forced mask {}", *m);
                qr.apply_mask(m);
                m
            }
            None => apply_best_mask(&mut qr, self.penalty_rules),
        };
        qr.draw_info();

        info!("Generated QR {}", qr.metadata());
        debug!(
            "Dark modules {} of {}, mask {}",
            qr.count_dark_modules(),
            qr.width() * qr.width(),
            *mask
        );
        Ok(qr)
    }

    // Function patterns, reserved info areas & unmasked data region
    pub(crate) fn build_unmasked(&self) -> QRResult<QR> {
        let (payload, version, mode) = self.codewords()?;

        let mut qr = QR::new(version, self.ec_level, mode);
        qr.draw_all_function_patterns();
        qr.reserve_info_areas();
        qr.draw_encoding_region(&payload);
        Ok(qr)
    }

    // Final interleaved data & ec codeword stream
    pub(crate) fn codewords(&self) -> QRResult<(Vec<u8>, Version, Mode)> {
        debug!("Encoding {}", self.metadata());
        let (data, version, mode) = match self.version {
            Some(v) => {
                let (data, mode) =
                    encode_with_version(self.text, self.mode, v, self.ec_level, self.transcoder)?;
                (data, v, mode)
            }
            None => encode(self.text, self.mode, self.ec_level, self.transcoder)?,
        };

        let (data_blocks, ecc_blocks) = Self::compute_ecc(&data, version, self.ec_level);

        let mut payload = Self::interleave(&data_blocks);
        payload.extend(Self::interleave(&ecc_blocks));

        debug_assert!(
            payload.len() == version.total_codewords(),
            "Payload len {} doesn't match total codewords {}",
            payload.len(),
            version.total_codewords()
        );
        debug!(
            "Version {}: {} data & {} ec codewords in {} blocks",
            *version,
            data.len(),
            payload.len() - data.len(),
            data_blocks.len()
        );

        Ok((payload, version, mode))
    }

    // ECC: Error Correction Codeword generator
    fn compute_ecc(data: &[u8], version: Version, ec_level: ECLevel) -> (Vec<&[u8]>, Vec<Vec<u8>>) {
        let data_blocks = Self::blockify(data, version, ec_level);

        let gen_poly = generator_polynomial(version.ec_profile(ec_level).ec_per_block);
        let ecc_blocks =
            data_blocks.iter().map(|b| ecc_with_generator(b, &gen_poly)).collect::<Vec<_>>();

        (data_blocks, ecc_blocks)
    }

    pub(crate) fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<&[u8]> {
        let profile = version.ec_profile(ec_level);
        let (g1, g2) = (profile.group1, profile.group2);

        let total_g1_size = g1.blocks * g1.data_codewords;
        let total_size = total_g1_size + g2.blocks * g2.data_codewords;

        debug_assert!(
            total_size == data.len(),
            "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
            data.len(),
            total_size
        );

        let mut data_blocks = Vec::with_capacity(profile.total_blocks());
        data_blocks.extend(data[..total_g1_size].chunks(g1.data_codewords));
        if g2.blocks > 0 {
            data_blocks.extend(data[total_g1_size..total_size].chunks(g2.data_codewords));
        }
        data_blocks
    }

    // Column-wise read across blocks, skipping exhausted ones
    pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::{QRBuilder, QR};
    use crate::common::{
        codec::{Mode, Transcoder},
        error::{QRError, QRResult},
        iter::EncRegionIter,
        mask::MaskPattern,
        metadata::{ECLevel, Version},
    };

    #[test]
    fn test_add_ec_simple() {
        let msg = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let expected_ecc = [b"\xc4\x23\x27\x77\xeb\xd7\xe7\xe2\x5d\x17"];
        let (data, ecc) = QRBuilder::compute_ecc(msg, Version::new(1).unwrap(), ECLevel::M);
        assert_eq!(data, [&msg[..]]);
        assert_eq!(&*ecc, expected_ecc);
    }

    #[test]
    fn test_add_ec_complex() {
        let msg = b"CUF\x86W&U\xc2w2\x06\x12\x06g&\xf6\xf6B\x07v\x86\xf2\x07&V\x16\xc6\xc7\x92\x06\
                    \xb6\xe6\xf7w2\x07v\x86W&R\x06\x86\x972\x07F\xf7vV\xc2\x06\x972\x10\xec\x11\xec\
                    \x11\xec\x11\xec";
        let expected_ec = [
            b"\xd5\xc7\x0b\x2d\x73\xf7\xf1\xdf\xe5\xf8\x9a\x75\x9a\x6f\x56\xa1\x6f\x27",
            b"\x57\xcc\x60\x3c\xca\xb6\x7c\x9d\xc8\x86\x1b\x81\xd1\x11\xa3\xa3\x78\x85",
            b"\x94\x74\xb1\xd4\x4c\x85\x4b\xf2\xee\x4c\xc3\xe6\xbd\x0a\x6c\xf0\xc0\x8d",
            b"\xeb\x9f\x05\xad\x18\x93\x3b\x21\x6a\x28\xff\xac\x52\x02\x83\x20\xb2\xec",
        ];
        let (data, ecc) = QRBuilder::compute_ecc(msg, Version::new(5).unwrap(), ECLevel::Q);
        assert_eq!(data.iter().map(|b| b.len()).collect::<Vec<_>>(), [15, 15, 16, 16]);
        assert_eq!(data[2], &msg[30..46]);
        assert_eq!(&*ecc, &expected_ec[..]);
    }

    #[test]
    fn test_interleave() {
        let blocks = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9, 0]];
        let interleaved = QRBuilder::interleave(&blocks);
        let exp_interleaved = vec![1, 4, 7, 2, 5, 8, 3, 6, 9, 0];
        assert_eq!(interleaved, exp_interleaved);
    }

    #[test]
    fn test_interleave_empty() {
        let blocks: Vec<Vec<u8>> = vec![];
        assert!(QRBuilder::interleave(&blocks).is_empty());
    }

    #[test]
    fn test_codewords_hello_world() {
        let (payload, version, mode) = QRBuilder::new("HELLO WORLD").codewords().unwrap();
        assert_eq!(*version, 1);
        assert_eq!(mode, Mode::Alphanumeric);
        assert_eq!(
            payload,
            [
                32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17, 196, 35, 39,
                119, 235, 215, 231, 226, 93, 23
            ]
        );
    }

    // Undoes the mask & reads the data region back in placement order
    fn read_payload(qr: &QR, len: usize) -> Vec<u8> {
        let mut unmasked = qr.clone();
        if let Some(m) = qr.mask() {
            unmasked.apply_mask(m);
        }
        let bits = EncRegionIter::new(qr.version())
            .filter(|&(r, c)| !unmasked.get(r, c).reserved)
            .map(|(r, c)| unmasked.get(r, c).is_dark())
            .take(len * 8)
            .collect::<Vec<_>>();
        bits.chunks(8).map(|b| b.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8)).collect()
    }

    #[test_case("Hello, world!🌎".to_string(), 1, ECLevel::L)]
    #[test_case("TEST".to_string(), 1, ECLevel::M)]
    #[test_case("12345".to_string(), 1, ECLevel::Q)]
    #[test_case("OK".to_string(), 1, ECLevel::H)]
    #[test_case("B3@j🎮#Z%8v🍣K!🔑3zC^8📖&r💾F9*🔍b6🌼".repeat(3), 7, ECLevel::L)]
    #[test_case("A11111111111111".repeat(11), 7, ECLevel::M)]
    #[test_case("aAAAAAA1111111111111AAAAAAa".repeat(3), 7, ECLevel::Q)]
    #[test_case("1234567890".repeat(15), 7, ECLevel::H)]
    #[test_case("A11111111111111".repeat(20), 10, ECLevel::M)]
    #[test_case("1234567890".repeat(145), 27, ECLevel::H)]
    #[test_case("A111111111111111".repeat(97), 40, ECLevel::M)]
    #[test_case("1234567890".repeat(305), 40, ECLevel::H)]
    fn test_builder(data: String, version: usize, ec_level: ECLevel) {
        let version = Version::new(version).unwrap();
        let qr = QRBuilder::new(&data).version(version).ec_level(ec_level).build().unwrap();

        assert_eq!(qr.version(), version);
        assert_eq!(qr.ec_level(), ec_level);
        assert!(qr.modules().iter().all(|m| m.value != super::ModuleValue::Unset));

        let (payload, ..) =
            QRBuilder::new(&data).version(version).ec_level(ec_level).codewords().unwrap();
        assert_eq!(read_payload(&qr, payload.len()), payload);
    }

    #[test]
    fn test_builder_forced_mask() {
        for m in MaskPattern::all() {
            let qr = QRBuilder::new("MASKED").mask(m).build().unwrap();
            assert_eq!(qr.mask(), Some(m));
            let (payload, ..) = QRBuilder::new("MASKED").codewords().unwrap();
            assert_eq!(read_payload(&qr, payload.len()), payload);
        }
    }

    #[test]
    fn test_builder_data_overflow() {
        let data = "1234567890".repeat(306);
        let res = QRBuilder::new(&data).version(Version::new(40).unwrap()).ec_level(ECLevel::H).build();
        assert_eq!(
            res.unwrap_err(),
            QRError::CapacityExceeded { mode: Mode::Numeric, ec_level: ECLevel::H, char_count: 3060 }
        );
    }

    #[test]
    fn test_builder_invalid_character() {
        let res = QRBuilder::new("12a4").mode(Mode::Numeric).build();
        assert_eq!(
            res.unwrap_err(),
            QRError::InvalidCharacter { mode: Mode::Numeric, position: 2, ch: 'a' }
        );
    }

    #[test]
    fn test_builder_auto_version() {
        let qr = QRBuilder::new(&"A".repeat(26)).ec_level(ECLevel::M).build().unwrap();
        assert_eq!(*qr.version(), 2);
        assert_eq!(qr.mode(), Mode::Alphanumeric);
    }

    // Returns the same double byte output for any text
    struct CannedTranscoder(Vec<u8>);

    impl Transcoder for CannedTranscoder {
        fn transcode(&self, _text: &str) -> QRResult<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_custom_transcoder() {
        let transcoder = CannedTranscoder(vec![0x93, 0x5F, 0xE4, 0xAA]);
        let mut builder = QRBuilder::new("ÄÖ");
        builder.transcoder(&transcoder);

        let (payload, version, mode) = builder.codewords().unwrap();
        assert_eq!((*version, mode), (1, Mode::Kanji));
        // 1000 00000010 0110110011111 1101010101010 0000
        let mut exp = vec![0x80, 0x26, 0xCF, 0xEA, 0xA8, 0x00];
        exp.extend([0xEC, 0x11].iter().cycle().take(10));
        assert_eq!(payload[..16], exp);

        let qr = builder.build().unwrap();
        assert_eq!(qr.mode(), Mode::Kanji);
        assert_eq!(read_payload(&qr, payload.len()), payload);
    }

    #[test]
    fn test_custom_transcoder_forced_kanji() {
        let transcoder = CannedTranscoder(vec![0x81, 0x40, 0xEB, 0xBF]);
        let qr = QRBuilder::new("ab").mode(Mode::Kanji).transcoder(&transcoder).build().unwrap();
        assert_eq!(qr.mode(), Mode::Kanji);
    }

    #[test_case(vec![0x93, 0x5F, 0xE4] ; "odd length")]
    #[test_case(vec![0x93, 0x5F, 0xA0, 0x40] ; "gap between ranges")]
    #[test_case(vec![0x81, 0x3F] ; "below first range")]
    #[test_case(vec![0xEB, 0xC0] ; "above second range")]
    fn test_custom_transcoder_failure(bytes: Vec<u8>) {
        let transcoder = CannedTranscoder(bytes);
        let res = QRBuilder::new("ÄÖ").mode(Mode::Kanji).transcoder(&transcoder).build();
        assert!(matches!(res, Err(QRError::TranscodingFailure(_))), "{res:?}");

        // Auto selection falls back to byte mode instead
        let qr = QRBuilder::new("ÄÖ").transcoder(&transcoder).build().unwrap();
        assert_eq!(qr.mode(), Mode::Byte);
    }
}
