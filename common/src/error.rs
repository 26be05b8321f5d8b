use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Reasons a piece of address text was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{input}' is not a valid IPv4 address")]
    InvalidAddress { input: String },

    #[error("'{input}' is not a valid IPv4 address range: {reason}")]
    InvalidRange { input: String, reason: &'static str },

    /// Both bounds are valid addresses but `lower < upper` does not hold.
    #[error("IPv4 range '{input}' must start below its end ({lower} is not below {upper})")]
    RangeOrder {
        input: String,
        lower: String,
        upper: String,
    },

    #[error("'{input}' is neither an IPv4 address nor an IPv4 address range")]
    InvalidEntry { input: String },
}

impl ParseError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidAddress { input }
            | ParseError::InvalidRange { input, .. }
            | ParseError::RangeOrder { input, .. }
            | ParseError::InvalidEntry { input } => input,
        }
    }

    /// True for bad bound ordering, false for every plain syntax problem.
    pub fn is_range_order(&self) -> bool {
        matches!(self, ParseError::RangeOrder { .. })
    }
}
