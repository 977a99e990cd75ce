const HASH_WORD_BITS: u32 = 32;

pub fn hash_key(key: &[u8]) -> u32 {
    let mut value: u32 = 0;
    for &byte in key {
        value = (value << 4).wrapping_add(u32::from(byte));
        let high = value & (0xf << (HASH_WORD_BITS - 4));
        if high != 0 {
            value ^= high >> (HASH_WORD_BITS - 8);
            value ^= high;
        }
    }
    value
}

/// The wraparound is a subtraction, not a modulo; tables built by msgfmt
/// depend on this exact sequence. The iterator ends after `size` steps so a
/// table without empty slots cannot loop forever.
#[derive(Clone, Debug)]
pub struct SlotSequence {
    index: u32,
    increment: u32,
    size: u32,
    remaining: u32,
}

impl SlotSequence {
    pub fn new(hash: u32, size: u32) -> Self {
        if size <= 2 {
            return Self {
                index: 0,
                increment: 1,
                size,
                remaining: 0,
            };
        }
        Self {
            index: hash % size,
            increment: 1 + hash % (size - 2),
            size,
            remaining: size,
        }
    }
}

impl Iterator for SlotSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.index;
        if self.index >= self.size - self.increment {
            self.index -= self.size - self.increment;
        } else {
            self.index += self.increment;
        }
        Some(current as usize)
    }
}
