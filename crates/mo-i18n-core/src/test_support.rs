use alloc::vec;
use alloc::vec::Vec;

use crate::{ByteOrder, MO_MAGIC, SlotSequence, hash_key};

/// Lays out a catalog the way msgfmt does: header, original table,
/// translated table, hash table, then the NUL-terminated strings.
pub struct MoBuilder {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    hashed: bool,
    order: ByteOrder,
}

impl Default for MoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            hashed: false,
            order: ByteOrder::Little,
        }
    }

    pub fn entry(mut self, original: &[u8], translation: &[u8]) -> Self {
        self.entries.push((original.to_vec(), translation.to_vec()));
        self
    }

    pub fn hashed(mut self, hashed: bool) -> Self {
        self.hashed = hashed;
        self
    }

    pub fn big_endian(mut self) -> Self {
        self.order = ByteOrder::Big;
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        let count = self.entries.len();
        let hash_size = if self.hashed {
            next_prime((count * 4 / 3).max(3))
        } else {
            0
        };

        let originals_offset = 28;
        let translations_offset = originals_offset + count * 8;
        let hash_offset = translations_offset + count * 8;
        let mut strings_offset = hash_offset + hash_size * 4;

        let mut originals = Vec::new();
        let mut translations = Vec::new();
        let mut strings = Vec::new();
        for (original, _) in &self.entries {
            originals.push((original.len(), strings_offset + strings.len()));
            strings.extend_from_slice(original);
            strings.push(0);
        }
        for (_, translation) in &self.entries {
            translations.push((translation.len(), strings_offset + strings.len()));
            strings.extend_from_slice(translation);
            strings.push(0);
        }
        strings_offset += strings.len();

        let mut slots = vec![0u32; hash_size];
        for (idx, (original, _)) in self.entries.iter().enumerate() {
            let key = match original.iter().position(|&byte| byte == 0) {
                Some(end) => &original[..end],
                None => original.as_slice(),
            };
            for slot in SlotSequence::new(hash_key(key), hash_size as u32) {
                if slots[slot] == 0 {
                    slots[slot] = idx as u32 + 1;
                    break;
                }
            }
        }

        let mut bytes = Vec::with_capacity(strings_offset);
        let order = self.order;
        let put = |bytes: &mut Vec<u8>, value: usize| {
            let value = value as u32;
            match order {
                ByteOrder::Little => bytes.extend_from_slice(&value.to_le_bytes()),
                ByteOrder::Big => bytes.extend_from_slice(&value.to_be_bytes()),
            }
        };
        put(&mut bytes, MO_MAGIC as usize);
        put(&mut bytes, 0);
        put(&mut bytes, count);
        put(&mut bytes, originals_offset);
        put(&mut bytes, translations_offset);
        put(&mut bytes, hash_size);
        put(&mut bytes, hash_offset);
        for (length, offset) in originals.into_iter().chain(translations) {
            put(&mut bytes, length);
            put(&mut bytes, offset);
        }
        for slot in slots {
            put(&mut bytes, slot as usize);
        }
        bytes.extend_from_slice(&strings);
        bytes
    }
}

fn next_prime(start: usize) -> usize {
    let mut candidate = start | 1;
    while (3..candidate)
        .step_by(2)
        .take_while(|div| div * div <= candidate)
        .any(|div| candidate % div == 0)
    {
        candidate += 2;
    }
    candidate
}
