use alloc::vec::Vec;

use crate::{
    CatalogMetadata, CoreResult, MoHeader, PluralRule, SlotSequence, StringDesc,
    decode_descriptor_table, decode_hash_table, hash_key, parse_mo_header,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupStrategy {
    Hashed,
    Sorted,
}

#[derive(Clone, Debug)]
pub struct MoCatalog {
    bytes: Vec<u8>,
    header: MoHeader,
    originals: Vec<StringDesc>,
    translations: Vec<StringDesc>,
    hash_table: Option<Vec<u32>>,
    plural_rule: PluralRule,
}

impl MoCatalog {
    pub fn decode(bytes: Vec<u8>) -> CoreResult<Self> {
        let header = parse_mo_header(&bytes)?;
        let originals = decode_descriptor_table(
            &bytes,
            header.byte_order,
            header.originals_offset,
            header.string_count,
            "original string table",
        )?;
        let translations = decode_descriptor_table(
            &bytes,
            header.byte_order,
            header.translations_offset,
            header.string_count,
            "translated string table",
        )?;
        let hash_table = decode_hash_table(
            &bytes,
            header.byte_order,
            header.hash_table_offset,
            header.hash_table_size,
        )?;

        let mut catalog = Self {
            bytes,
            header,
            originals,
            translations,
            hash_table,
            plural_rule: PluralRule::default(),
        };
        let plural_rule = PluralRule::from_header_or_default(catalog.lookup(b""));
        catalog.plural_rule = plural_rule;
        Ok(catalog)
    }

    pub fn header(&self) -> &MoHeader {
        &self.header
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn string_count(&self) -> usize {
        self.originals.len()
    }

    pub fn plural_rule(&self) -> &PluralRule {
        &self.plural_rule
    }

    pub fn strategy(&self) -> LookupStrategy {
        if self.hash_table.is_some() {
            LookupStrategy::Hashed
        } else {
            LookupStrategy::Sorted
        }
    }

    /// Keys compare like C strings: anything after an embedded NUL is
    /// ignored, and a plural entry `singular\0plural` is found by `singular`.
    pub fn lookup(&self, key: &[u8]) -> Option<&[u8]> {
        self.lookup_using(self.strategy(), key)
    }

    pub fn lookup_using(&self, strategy: LookupStrategy, key: &[u8]) -> Option<&[u8]> {
        let key = c_str(key);
        let index = match strategy {
            LookupStrategy::Hashed => self.find_hashed(self.hash_table.as_deref()?, key),
            LookupStrategy::Sorted => self.find_sorted(key),
        }?;
        self.translation(index)
    }

    pub fn lookup_plural(&self, key: &[u8], n: i64) -> Option<&[u8]> {
        self.lookup(key)
            .map(|translation| self.select_plural(n, translation))
    }

    pub fn select_plural<'t>(&self, n: i64, translation: &'t [u8]) -> &'t [u8] {
        select_plural_form(self.plural_rule.index(n), translation)
    }

    pub fn metadata(&self) -> CatalogMetadata {
        self.lookup(b"")
            .map(CatalogMetadata::parse)
            .unwrap_or_default()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        (0..self.string_count()).filter_map(move |index| {
            let original = self.original(index)?;
            if original.is_empty() {
                return None;
            }
            Some((original, self.translation(index)?))
        })
    }

    fn original(&self, index: usize) -> Option<&[u8]> {
        let desc = self.originals.get(index)?;
        self.bytes.get(desc.range())
    }

    fn translation(&self, index: usize) -> Option<&[u8]> {
        let desc = self.translations.get(index)?;
        self.bytes.get(desc.range())
    }

    fn find_hashed(&self, slots: &[u32], key: &[u8]) -> Option<usize> {
        for idx in SlotSequence::new(hash_key(key), slots.len() as u32) {
            let slot = *slots.get(idx)?;
            if slot == 0 {
                return None;
            }
            let index = (slot - 1) as usize;
            let Some(desc) = self.originals.get(index) else {
                continue;
            };
            // `>=` because plural entries store both forms in one string.
            if desc.length as usize >= key.len() && self.original(index).map(c_str) == Some(key)
            {
                return Some(index);
            }
        }
        None
    }

    fn find_sorted(&self, key: &[u8]) -> Option<usize> {
        self.originals
            .binary_search_by(|desc| c_str(self.bytes.get(desc.range()).unwrap_or_default()).cmp(key))
            .ok()
    }
}

/// A negative index, or one past the forms actually present, yields the
/// whole translation.
pub fn select_plural_form(index: i64, translation: &[u8]) -> &[u8] {
    if index < 0 {
        return translation;
    }
    let mut start = 0usize;
    for _ in 0..index {
        match translation[start..].iter().position(|&byte| byte == 0) {
            Some(nul) => start += nul + 1,
            None => return translation,
        }
        if start >= translation.len() {
            return translation;
        }
    }
    c_str(&translation[start..])
}

pub fn c_str(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&byte| byte == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}
