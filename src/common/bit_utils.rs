use std::mem;

use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0 }
    }

    // Bits appended so far, excluding any byte alignment padding
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    // Byte aligned copy of the stream. Unused low bits of the last byte are zero.
    pub fn finalize(&self) -> Vec<u8> {
        self.data.clone()
    }

    // Bits in write order, excluding alignment padding
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        BitReader::new(&self.data).take(self.len)
    }
}

// Push bits for bit stream
//------------------------------------------------------------------------------

impl BitStream {
    // Appends the `size` least significant bits of `bits`, MSB first
    pub fn push_bits<T: PrimInt>(&mut self, bits: T, size: usize) {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(size <= max_bits, "Cannot push {size} bits from a {max_bits} bit value");

        for i in (0..size).rev() {
            self.push((bits >> i) & T::one() == T::one());
        }
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len & 7;
        if offset == 0 {
            self.data.push(0);
        }
        if bit {
            let pos = self.len >> 3;
            self.data[pos] |= 0b10000000 >> offset;
        }
        self.len += 1;
    }
}


// Bit reader
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    // Byte cursor
    pos: usize,
    // Bits already consumed from the byte under cursor
    offset: u8,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0, offset: 0 }
    }

    pub fn has_data(&self) -> bool {
        self.pos < self.data.len()
    }

    // Callers must check `has_data` before popping
    pub fn pop(&mut self) -> bool {
        debug_assert!(self.has_data(), "Bit reader exhausted: Len {}", self.data.len());

        let bit = (self.data[self.pos] << self.offset) & 0b10000000 != 0;
        self.offset += 1;
        if self.offset == 8 {
            self.offset = 0;
            self.pos += 1;
        }
        bit
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.has_data() {
            Some(self.pop())
        } else {
            None
        }
    }
}
