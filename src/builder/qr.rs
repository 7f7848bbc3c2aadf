use std::ops::Not;

use crate::common::{
    bit_utils::BitReader,
    codec::Mode,
    iter::EncRegionIter,
    mask::MaskPattern,
    metadata::{ECLevel, Version},
    version_db::{
        FORMAT_INFOS, FORMAT_INFO_BIT_LEN, FORMAT_INFO_COORDS_QR_MAIN, FORMAT_INFO_COORDS_QR_SIDE,
        VERSION_INFO_BIT_LEN, VERSION_INFO_COORDS_BL, VERSION_INFO_COORDS_TR,
    },
};

// Module
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ModuleValue {
    #[default]
    Unset,
    Black,
    White,
}

impl ModuleValue {
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Self::Black
        } else {
            Self::White
        }
    }
}

// Unset stays unset
impl Not for ModuleValue {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Unset => Self::Unset,
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

// `reserved` marks function patterns & info areas, which data placement
// and masking never touch
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Module {
    pub value: ModuleValue,
    pub reserved: bool,
}

impl Module {
    pub const EMPTY: Module = Module { value: ModuleValue::Unset, reserved: false };

    pub(crate) fn func(value: ModuleValue) -> Self {
        Self { value, reserved: true }
    }

    pub(crate) fn data(value: ModuleValue) -> Self {
        Self { value, reserved: false }
    }

    pub fn is_dark(&self) -> bool {
        self.value == ModuleValue::Black
    }
}

// QR symbol
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mode: Mode,
    mask: Option<MaskPattern>,
}

impl QR {
    pub(crate) fn new(ver: Version, ecl: ECLevel, mode: Mode) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::EMPTY; w * w], w, ver, ecl, mode, mask: None }
    }

    // Row major
    pub fn modules(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn metadata(&self) -> String {
        match self.mask {
            Some(m) => format!(
                "{{ Version: {}, Ec level: {:?}, Mode: {:?}, Mask: {} }}",
                *self.ver, self.ecl, self.mode, *m
            ),
            None => format!(
                "{{ Version: {}, Ec level: {:?}, Mode: {:?}, Mask: None }}",
                *self.ver, self.ecl, self.mode
            ),
        }
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|m| m.is_dark()).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let m = self.get(i, j);
                let c = match (m.reserved, m.value) {
                    (false, ModuleValue::Unset) => '.',
                    (false, ModuleValue::Black) => 'd',
                    (false, ModuleValue::White) => 'D',
                    (true, ModuleValue::Unset) => 'r',
                    (true, ModuleValue::Black) => 'f',
                    (true, ModuleValue::White) => 'F',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r as usize) * self.w + c as usize
    }

    // Negative indexes wrap from the far edge
    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub(crate) fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub(crate) fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }
}

#[cfg(test)]
mod qr_util_tests {
    use super::{Module, ModuleValue, QR};
    use crate::common::{codec::Mode, metadata::ECLevel, metadata::Version};

    fn blank_qr() -> QR {
        QR::new(Version::MIN, ECLevel::L, Mode::Byte)
    }

    #[test]
    fn test_index_wrap() {
        let mut qr = blank_qr();
        let w = qr.w as i16;
        qr.set(-1, -1, Module::func(ModuleValue::Black));
        assert_eq!(qr.get(w - 1, w - 1), Module::func(ModuleValue::Black));
        qr.set(0, 0, Module::func(ModuleValue::Black));
        assert_eq!(qr.get(-w, -w), Module::func(ModuleValue::Black));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let qr = blank_qr();
        let w = qr.w as i16;
        qr.get(w, 0);
    }

    #[test]
    #[should_panic]
    fn test_col_out_of_bound() {
        let qr = blank_qr();
        let w = qr.w as i16;
        qr.get(0, w);
    }

    #[test]
    #[should_panic]
    fn test_row_index_overwrap() {
        let qr = blank_qr();
        let w = qr.w as i16;
        qr.get(-(w + 1), 0);
    }

    #[test]
    fn test_module_value_not() {
        assert_eq!(!ModuleValue::Black, ModuleValue::White);
        assert_eq!(!ModuleValue::White, ModuleValue::Black);
        assert_eq!(!ModuleValue::Unset, ModuleValue::Unset);
    }

    #[test]
    fn test_metadata() {
        let qr = QR::new(Version::new(2).unwrap(), ECLevel::Q, Mode::Numeric);
        assert_eq!(qr.metadata(), "{ Version: 2, Ec level: Q, Mode: Numeric, Mask: None }");
    }
}

// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Finder with its separator, clipped at the symbol edges
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_left, dr_right) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_top, dc_bottom) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_left..=dr_right {
            for j in dc_top..=dc_bottom {
                let value = match (i, j) {
                    (4 | -4, _) | (_, 4 | -4) => ModuleValue::White,
                    (3 | -3, _) | (_, 3 | -3) => ModuleValue::Black,
                    (2 | -2, _) | (_, 2 | -2) => ModuleValue::White,
                    _ => ModuleValue::Black,
                };
                self.set(r + i, c + j, Module::func(value));
            }
        }
    }
}


// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    // Skipped entirely when it would overlap a reserved module
    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let overlaps =
            (-2..=2).any(|i| (-2..=2).any(|j| self.get(r + i, c + j).reserved));
        if overlaps {
            return;
        }
        for i in -2..=2 {
            for j in -2..=2 {
                let value = match (i, j) {
                    (-2 | 2, _) | (_, -2 | 2) | (0, 0) => ModuleValue::Black,
                    _ => ModuleValue::White,
                };
                self.set(r + i, c + j, Module::func(value));
            }
        }
    }
}


// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    // Alternates along row & column 6 starting dark, leaving reserved modules be
    fn draw_timing_patterns(&mut self) {
        let w = self.w as i16;
        for i in 0..w {
            let value = if i & 1 == 0 { ModuleValue::Black } else { ModuleValue::White };
            if !self.get(TIMING_LINE, i).reserved {
                self.set(TIMING_LINE, i, Module::func(value));
            }
            if !self.get(i, TIMING_LINE).reserved {
                self.set(i, TIMING_LINE, Module::func(value));
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    fn draw_dark_module(&mut self) {
        let r = (*self.ver * 4 + 9) as i16;
        debug_assert!(!self.get(r, 8).reserved, "Dark module overlaps a reserved module");

        self.set(r, 8, Module::func(ModuleValue::Black));
    }

    pub(crate) fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_alignment_patterns();
        self.draw_timing_patterns();
        self.draw_dark_module();
    }
}


// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn reserve(&mut self, coords: &[(i16, i16)]) {
        for &(r, c) in coords {
            debug_assert!(!self.get(r, c).reserved, "Module already reserved: {r} {c}");

            self.set(r, c, Module::func(ModuleValue::Unset));
        }
    }

    pub(crate) fn reserve_info_areas(&mut self) {
        self.reserve(&FORMAT_INFO_COORDS_QR_MAIN);
        self.reserve(&FORMAT_INFO_COORDS_QR_SIDE);
        if *self.ver >= 7 {
            self.reserve(&VERSION_INFO_COORDS_TR);
            self.reserve(&VERSION_INFO_COORDS_BL);
        }
    }

    fn draw_format_info(&mut self, mask: MaskPattern) {
        let format_info = FORMAT_INFOS[self.ecl as usize][*mask as usize];
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_QR_MAIN);
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, &FORMAT_INFO_COORDS_QR_SIDE);
    }

    fn draw_version_info(&mut self) {
        let Some(ver_info) = self.ver.info() else {
            return;
        };
        self.draw_number(ver_info, VERSION_INFO_BIT_LEN, &VERSION_INFO_COORDS_TR);
        self.draw_number(ver_info, VERSION_INFO_BIT_LEN, &VERSION_INFO_COORDS_BL);
    }

    // Writes the masked symbol's format info & the version info
    pub(crate) fn draw_info(&mut self) {
        debug_assert!(self.mask.is_some(), "Format info needs a mask");

        if let Some(mask) = self.mask {
            self.draw_format_info(mask);
        }
        self.draw_version_info();
    }

    // MSB first across `coords`
    fn draw_number(&mut self, number: u32, bit_len: usize, coords: &[(i16, i16)]) {
        debug_assert!(coords.len() == bit_len, "Coords don't match bit len {bit_len}");

        let mut mask = 1 << (bit_len - 1);
        for &(r, c) in coords {
            self.set(r, c, Module::func(ModuleValue::from_bit(number & mask != 0)));
            mask >>= 1;
        }
    }

    #[cfg(test)]
    fn read_number(&self, coords: &[(i16, i16)]) -> u32 {
        coords.iter().fold(0, |acc, &(r, c)| (acc << 1) | self.get(r, c).is_dark() as u32)
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    // Places codewords MSB first along the data region, filling the
    // remainder modules white
    pub(crate) fn draw_encoding_region(&mut self, payload: &[u8]) {
        let mut bits = BitReader::new(payload);
        for (r, c) in EncRegionIter::new(self.ver) {
            if self.get(r, c).reserved {
                continue;
            }
            let value = bits.next().map_or(ModuleValue::White, ModuleValue::from_bit);
            self.set(r, c, Module::data(value));
        }

        debug_assert!(!bits.has_data(), "Payload exceeds the encoding region");
    }

    // Flips every unreserved module selected by the pattern
    pub(crate) fn apply_mask(&mut self, pattern: MaskPattern) {
        self.mask = Some(pattern);
        let mask_fn = pattern.mask_functions();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if mask_fn(r, c) {
                    let module = self.get_mut(r, c);
                    if !module.reserved {
                        module.value = !module.value;
                    }
                }
            }
        }
    }
}


// Global constants
//------------------------------------------------------------------------------

const TIMING_LINE: i16 = 6;
