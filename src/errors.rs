/// Errors that can occur when parsing a [`Value`](crate::Value) from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueParseError {
    Empty,

    UnterminatedQuote,
}
impl core::fmt::Display for ValueParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueParseError::Empty => f.write_str("empty value"),
            ValueParseError::UnterminatedQuote => f.write_str("unterminated quoted string"),
        }
    }
}
impl std::error::Error for ValueParseError {}
