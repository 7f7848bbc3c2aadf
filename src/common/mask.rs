use std::ops::Deref;

use log::{debug, trace};
use rayon::prelude::*;

use super::error::QRError;
use crate::builder::{ModuleValue, QR};

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct MaskPattern(u8);

impl MaskPattern {
    // Callers outside the crate go through `TryFrom<u8>`
    pub(crate) fn new(pattern: u8) -> Self {
        debug_assert!(pattern < 8, "Invalid masking pattern");
        Self(pattern)
    }

    pub fn all() -> impl Iterator<Item = MaskPattern> {
        (0..8).map(MaskPattern)
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = QRError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 8 {
            return Err(QRError::InvalidConfiguration(format!("unknown mask index {value}")));
        }
        Ok(Self(value))
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

mod mask_functions {
    pub fn checkerboard(r: i16, c: i16) -> bool {
        (r + c) & 1 == 0
    }

    pub fn horizontal_lines(r: i16, _: i16) -> bool {
        r & 1 == 0
    }

    pub fn vertical_lines(_: i16, c: i16) -> bool {
        c % 3 == 0
    }

    pub fn diagonal_lines(r: i16, c: i16) -> bool {
        (r + c) % 3 == 0
    }

    pub fn large_checkerboard(r: i16, c: i16) -> bool {
        ((r >> 1) + (c / 3)) & 1 == 0
    }

    pub fn fields(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        ((r * c) & 1) + ((r * c) % 3) == 0
    }

    pub fn diamonds(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        (((r * c) & 1) + ((r * c) % 3)) & 1 == 0
    }

    pub fn meadow(r: i16, c: i16) -> bool {
        let (r, c) = (r as i32, c as i32);
        (((r + c) & 1) + ((r * c) % 3)) & 1 == 0
    }
}

impl MaskPattern {
    pub fn mask_functions(self) -> fn(i16, i16) -> bool {
        debug_assert!(*self < 8, "Invalid pattern");

        match *self {
            0b000 => mask_functions::checkerboard,
            0b001 => mask_functions::horizontal_lines,
            0b010 => mask_functions::vertical_lines,
            0b011 => mask_functions::diagonal_lines,
            0b100 => mask_functions::large_checkerboard,
            0b101 => mask_functions::fields,
            0b110 => mask_functions::diamonds,
            0b111 => mask_functions::meadow,
            _ => unreachable!(),
        }
    }
}


// Penalty scoring
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum PenaltyRules {
    // Runs, 2x2 blocks & dark balance
    #[default]
    Basic,
    // Basic plus the finder look-alike rule
    Iso,
}

// Tries every pattern on a copy of `qr` and applies the lowest scoring one.
// Ties go to the lowest pattern index.
pub fn apply_best_mask(qr: &mut QR, rules: PenaltyRules) -> MaskPattern {
    let base: &QR = qr;
    let (score, best_mask) = (0..8u8)
        .into_par_iter()
        .map(|m| {
            let mask = MaskPattern(m);
            let mut candidate = base.clone();
            candidate.apply_mask(mask);
            let score = compute_total_penalty(&candidate, rules);
            trace!("Mask {m} penalty {score}");
            (score, mask)
        })
        .min()
        .unwrap_or((0, MaskPattern(0)));

    debug!("Best mask {} with penalty {score}", *best_mask);
    qr.apply_mask(best_mask);
    best_mask
}

pub fn compute_total_penalty(qr: &QR, rules: PenaltyRules) -> u32 {
    let adj_pen = compute_adjacent_penalty(qr);
    let blk_pen = compute_block_penalty(qr);
    let bal_pen = compute_balance_penalty(qr);
    let fp_pen = match rules {
        PenaltyRules::Basic => 0,
        PenaltyRules::Iso => {
            compute_finder_pattern_penalty(qr, true) + compute_finder_pattern_penalty(qr, false)
        }
    };
    adj_pen + blk_pen + bal_pen + fp_pen
}

// 3 for every run of 5 equal modules, plus 1 per module beyond
fn compute_adjacent_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width();
    let mut cols = vec![(ModuleValue::Unset, 0); w];
    for r in 0..w {
        let mut last = ModuleValue::Unset;
        let mut consec_row_len = 0;
        for (c, col) in cols.iter_mut().enumerate() {
            let val = qr.get(r as i16, c as i16).value;
            if last != val {
                last = val;
                consec_row_len = 0;
            }
            consec_row_len += 1;
            pen += run_penalty(consec_row_len);
            if col.0 != val {
                col.0 = val;
                col.1 = 0;
            }
            col.1 += 1;
            pen += run_penalty(col.1);
        }
    }
    pen
}

#[inline]
fn run_penalty(run_len: usize) -> u32 {
    match run_len {
        5 => 3,
        6.. => 1,
        _ => 0,
    }
}

fn compute_block_penalty(qr: &QR) -> u32 {
    let mut pen = 0;
    let w = qr.width() as i16;
    for r in 0..w - 1 {
        for c in 0..w - 1 {
            let val = qr.get(r, c).value;
            if val == qr.get(r + 1, c).value
                && val == qr.get(r, c + 1).value
                && val == qr.get(r + 1, c + 1).value
            {
                pen += 3;
            }
        }
    }
    pen
}

fn compute_finder_pattern_penalty(qr: &QR, is_hor: bool) -> u32 {
    use ModuleValue::{Black, White};

    let mut pen = 0;
    let w = qr.width() as i16;
    static PATTERN: [ModuleValue; 7] = [Black, White, Black, Black, Black, White, Black];
    for i in 0..w {
        let get = |j: i16| if is_hor { qr.get(i, j).value } else { qr.get(j, i).value };
        let is_light = |j: i16| j < 0 || j >= w || get(j) != Black;
        for j in 0..w - 6 {
            if (j..j + 7).map(get).eq(PATTERN.iter().copied())
                && ((j - 4..j).all(is_light) || (j + 7..j + 11).all(is_light))
            {
                pen += 40;
            }
        }
    }
    pen
}

// 10 for every full 5% step the dark ratio strays from 50%
fn compute_balance_penalty(qr: &QR) -> u32 {
    let dark_cnt = qr.count_dark_modules();
    let w = qr.width();
    let tot = w * w;
    let percent = dark_cnt * 100 / tot;
    (percent.abs_diff(50) / 5 * 10) as u32
}
