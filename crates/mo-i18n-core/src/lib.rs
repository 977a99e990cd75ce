#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod error;
mod format;
mod hash;
mod language;
mod metadata;
mod mo_catalog;
mod mo_decode;
mod mo_header;
mod plural_expr;
mod plural_parser;
mod plural_rule;
#[cfg(any(test, feature = "test-support"))]
mod test_support;

pub use error::{CoreError, CoreResult};
pub use format::{FormatArg, format_message};
pub use hash::{SlotSequence, hash_key};
pub use language::{
    LanguageInfo, SUPPORTED_LANGUAGES, language_name, normalize_language_id,
    strip_language_specifiers, supported_languages,
};
pub use metadata::CatalogMetadata;
pub use mo_catalog::{LookupStrategy, MoCatalog, c_str, select_plural_form};
pub use mo_decode::{StringDesc, decode_descriptor_table, decode_hash_table};
pub use mo_header::{
    ByteOrder, HEADER_LEN, MAX_CATALOG_LEN, MIN_CATALOG_LEN, MO_MAGIC, MoHeader, parse_mo_header,
};
pub use plural_expr::{BinaryOp, PluralExpr};
pub use plural_parser::{parse_plural_expr, parse_plural_expr_bytes};
pub use plural_rule::PluralRule;
#[cfg(any(test, feature = "test-support"))]
pub use test_support::MoBuilder;
