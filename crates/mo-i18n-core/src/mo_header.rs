use crate::{CoreError, CoreResult};

pub const MO_MAGIC: u32 = 0x950412de;
pub const MIN_CATALOG_LEN: usize = 32;
pub const MAX_CATALOG_LEN: usize = 16 * 1024 * 1024;
pub const HEADER_LEN: usize = 7 * 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    pub fn read_u32(self, input: &[u8], offset: usize) -> Option<u32> {
        let end = offset.checked_add(4)?;
        let bytes: [u8; 4] = input.get(offset..end)?.try_into().ok()?;
        Some(match self {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoHeader {
    pub byte_order: ByteOrder,
    pub revision: u32,
    pub string_count: u32,
    pub originals_offset: u32,
    pub translations_offset: u32,
    pub hash_table_size: u32,
    pub hash_table_offset: u32,
}

pub fn parse_mo_header(input: &[u8]) -> CoreResult<MoHeader> {
    if input.len() < MIN_CATALOG_LEN {
        return Err(CoreError::CatalogTooSmall(input.len()));
    }
    if input.len() > MAX_CATALOG_LEN {
        return Err(CoreError::CatalogTooLarge(input.len()));
    }

    let magic = [input[0], input[1], input[2], input[3]];
    let byte_order = if u32::from_le_bytes(magic) == MO_MAGIC {
        ByteOrder::Little
    } else if u32::from_be_bytes(magic) == MO_MAGIC {
        ByteOrder::Big
    } else {
        return Err(CoreError::BadSignature(u32::from_be_bytes(magic)));
    };

    let mut fields = [0u32; 6];
    for (idx, field) in fields.iter_mut().enumerate() {
        *field = byte_order
            .read_u32(input, 4 + idx * 4)
            .ok_or(CoreError::TableOutOfBounds("header"))?;
    }
    let [
        revision,
        string_count,
        originals_offset,
        translations_offset,
        hash_table_size,
        hash_table_offset,
    ] = fields;

    if string_count == 0 {
        return Err(CoreError::TableOutOfBounds("empty string table"));
    }
    // No table may overlap the fixed header.
    if (originals_offset as usize) < HEADER_LEN {
        return Err(CoreError::TableOutOfBounds("original string table"));
    }
    if (translations_offset as usize) < HEADER_LEN {
        return Err(CoreError::TableOutOfBounds("translated string table"));
    }
    if hash_table_size > 2 && (hash_table_offset as usize) < HEADER_LEN {
        return Err(CoreError::TableOutOfBounds("hash table"));
    }

    Ok(MoHeader {
        byte_order,
        revision,
        string_count,
        originals_offset,
        translations_offset,
        hash_table_size,
        hash_table_offset,
    })
}
