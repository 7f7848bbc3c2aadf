use std::ops::Deref;

use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::version_db::{
    ALIGNMENT_PATTERN_POSITIONS, CHAR_CAPACITY, CHAR_CNT_BITS, EC_PROFILES, VERSION_INFOS,
};

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(usize);

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Version {
    pub const MIN: Version = Version(1);

    pub const MAX: Version = Version(40);

    pub fn new(version: usize) -> QRResult<Self> {
        if !(1..=40).contains(&version) {
            return Err(QRError::InvalidConfiguration(format!(
                "version {version} is outside 1..=40"
            )));
        }
        Ok(Self(version))
    }

    // Versions 1..=40, smallest first
    pub fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    pub fn ec_profile(self, ecl: ECLevel) -> &'static ECProfile {
        &EC_PROFILES[self.0 - 1][ecl as usize]
    }

    pub fn char_capacity(self, ecl: ECLevel, mode: Mode) -> usize {
        CHAR_CAPACITY[self.0 - 1][ecl as usize][mode.index()]
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        let band = match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        CHAR_CNT_BITS[band][mode.index()]
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 - 1]
    }

    // Version info is only carried from version 7 up
    pub fn info(self) -> Option<u32> {
        self.0.checked_sub(7).map(|i| VERSION_INFOS[i])
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.ec_profile(ecl).total_data_bits()
    }

    pub fn total_codewords(self) -> usize {
        self.ec_profile(ECLevel::L).total_codewords()
    }
}


// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl TryFrom<u8> for ECLevel {
    type Error = QRError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::L),
            1 => Ok(Self::M),
            2 => Ok(Self::Q),
            3 => Ok(Self::H),
            _ => Err(QRError::InvalidConfiguration(format!("unknown EC level index {value}"))),
        }
    }
}


// Error correction profile
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BlockGroup {
    pub blocks: usize,
    pub data_codewords: usize,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct ECProfile {
    pub data_codewords: usize,
    pub ec_per_block: usize,
    pub group1: BlockGroup,
    pub group2: BlockGroup,
}

impl ECProfile {
    pub fn total_blocks(&self) -> usize {
        self.group1.blocks + self.group2.blocks
    }

    pub fn total_ec_codewords(&self) -> usize {
        self.total_blocks() * self.ec_per_block
    }

    pub fn total_codewords(&self) -> usize {
        self.data_codewords + self.total_ec_codewords()
    }

    pub fn total_data_bits(&self) -> usize {
        self.data_codewords << 3
    }

    pub fn total_required_bits(&self) -> usize {
        self.total_codewords() << 3
    }
}
