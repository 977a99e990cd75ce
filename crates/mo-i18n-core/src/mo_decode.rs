use alloc::vec::Vec;
use core::ops::Range;

use crate::{ByteOrder, CoreError, CoreResult};

const DESCRIPTOR_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringDesc {
    pub length: u32,
    pub offset: u32,
}

impl StringDesc {
    pub fn range(self) -> Range<usize> {
        let start = self.offset as usize;
        start..start + self.length as usize
    }
}

pub fn decode_descriptor_table(
    input: &[u8],
    order: ByteOrder,
    offset: u32,
    count: u32,
    table: &'static str,
) -> CoreResult<Vec<StringDesc>> {
    let start = offset as usize;
    let extent = (count as usize)
        .checked_mul(DESCRIPTOR_LEN)
        .and_then(|len| start.checked_add(len))
        .ok_or(CoreError::TableOutOfBounds(table))?;
    if extent > input.len() {
        return Err(CoreError::TableOutOfBounds(table));
    }

    let mut descriptors = Vec::with_capacity(count as usize);
    for idx in 0..count as usize {
        let cursor = start + idx * DESCRIPTOR_LEN;
        let length = order
            .read_u32(input, cursor)
            .ok_or(CoreError::TableOutOfBounds(table))?;
        let offset = order
            .read_u32(input, cursor + 4)
            .ok_or(CoreError::TableOutOfBounds(table))?;
        // The terminating NUL at offset + length must also be inside the buffer.
        let end = (offset as usize).checked_add(length as usize);
        match end {
            Some(end) if end < input.len() => {}
            _ => return Err(CoreError::TableOutOfBounds(table)),
        }
        descriptors.push(StringDesc { length, offset });
    }
    Ok(descriptors)
}

pub fn decode_hash_table(
    input: &[u8],
    order: ByteOrder,
    offset: u32,
    size: u32,
) -> CoreResult<Option<Vec<u32>>> {
    if size <= 2 {
        return Ok(None);
    }
    let start = offset as usize;
    let extent = (size as usize)
        .checked_mul(4)
        .and_then(|len| start.checked_add(len))
        .ok_or(CoreError::TableOutOfBounds("hash table"))?;
    if extent > input.len() {
        return Err(CoreError::TableOutOfBounds("hash table"));
    }

    let mut slots = Vec::with_capacity(size as usize);
    for idx in 0..size as usize {
        let slot = order
            .read_u32(input, start + idx * 4)
            .ok_or(CoreError::TableOutOfBounds("hash table"))?;
        slots.push(slot);
    }
    Ok(Some(slots))
}
