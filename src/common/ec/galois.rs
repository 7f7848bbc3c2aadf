use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

use crate::common::error::{QRError, QRResult};

// Galois field GF(256) element
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct G(pub u8);

impl G {
    pub const ZERO: G = G(0);

    pub const ONE: G = G(1);

    // Generator raised to `i`, wrapping at the multiplicative order
    pub fn gen_pow(i: usize) -> G {
        G(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> QRResult<usize> {
        if self.0 == 0 {
            return Err(QRError::DomainError("logarithm of zero"));
        }
        Ok(LOG_TABLE[self.0 as usize] as usize)
    }

    pub fn checked_div(self, rhs: G) -> QRResult<G> {
        if rhs.0 == 0 {
            return Err(QRError::DomainError("division by zero"));
        }
        if self.0 == 0 {
            return Ok(G::ZERO);
        }
        let log_lhs = LOG_TABLE[self.0 as usize] as usize;
        let log_rhs = LOG_TABLE[rhs.0 as usize] as usize;
        Ok(G(EXP_TABLE[(log_lhs + 255 - log_rhs) % 255]))
    }
}

impl From<u8> for G {
    fn from(value: u8) -> Self {
        G(value)
    }
}

impl From<G> for u8 {
    fn from(value: G) -> Self {
        value.0
    }
}

impl Add for G {
    type Output = G;
    fn add(self, rhs: G) -> G {
        G(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    fn add_assign(&mut self, rhs: G) {
        self.0 ^= rhs.0;
    }
}

impl Sub for G {
    type Output = G;
    fn sub(self, rhs: G) -> G {
        self + rhs
    }
}

impl Mul for G {
    type Output = G;
    fn mul(self, rhs: G) -> G {
        if self.0 == 0 || rhs.0 == 0 {
            return G::ZERO;
        }
        let log_sum = LOG_TABLE[self.0 as usize] as usize + LOG_TABLE[rhs.0 as usize] as usize;
        G(EXP_TABLE[log_sum % 255])
    }
}

impl MulAssign for G {
    fn mul_assign(&mut self, rhs: G) {
        *self = *self * rhs;
    }
}

// Byte level field primitives
//------------------------------------------------------------------------------

pub fn add(a: u8, b: u8) -> u8 {
    (G(a) + G(b)).0
}

pub fn multiply(a: u8, b: u8) -> u8 {
    (G(a) * G(b)).0
}

pub fn divide(a: u8, b: u8) -> QRResult<u8> {
    G(a).checked_div(G(b)).map(u8::from)
}

pub fn exp(i: usize) -> u8 {
    G::gen_pow(i).0
}

pub fn log(a: u8) -> QRResult<usize> {
    G(a).log()
}


// Global constants
//------------------------------------------------------------------------------

// x^8 + x^4 + x^3 + x^2 + 1
const PRIMITIVE_POLY: u16 = 0x11d;

const fn build_exp_table() -> [u8; 255] {
    let mut table = [0u8; 255];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        table[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

pub static EXP_TABLE: [u8; 255] = build_exp_table();

// Entry 0 is unused, zero has no logarithm
pub static LOG_TABLE: [u8; 256] = build_log_table();
