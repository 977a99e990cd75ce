use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    CatalogTooSmall(usize),
    CatalogTooLarge(usize),
    BadSignature(u32),
    TableOutOfBounds(&'static str),
    InvalidExpression,
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::CatalogTooSmall(len) => write!(f, "catalog too small: {len} bytes"),
            CoreError::CatalogTooLarge(len) => write!(f, "catalog too large: {len} bytes"),
            CoreError::BadSignature(magic) => write!(f, "bad catalog signature: {magic:#010x}"),
            CoreError::TableOutOfBounds(table) => write!(f, "{table} out of bounds"),
            CoreError::InvalidExpression => f.write_str("invalid plural expression"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
