use thiserror::Error;

/// Error returned when parsing an [`Argb`](crate::Argb) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseArgbError {
    #[error("empty color string")]
    Empty,

    #[error("a color has 3, 6 or 8 hex digits, got {len}")]
    Length { len: usize },

    #[error("not a hexadecimal color: “{text}”")]
    Digit { text: String },
}
