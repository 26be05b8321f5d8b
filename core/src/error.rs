use ipgate_common::ParseError;
use thiserror::Error;

pub type PolicyResult<T> = Result<T, PolicyError>;

/// Why a candidate field or assignment update was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error(
        "The value you provided is not a valid comma separated IPv4 address or IPv4 address range: {field}"
    )]
    InvalidField {
        field: String,
        #[source]
        source: ParseError,
    },

    /// `entry` from the candidate shares addresses with sibling number `index`.
    #[error("The following IP values/ranges overlap: '{entry}' and '{sibling}'.")]
    Overlap {
        entry: String,
        sibling: String,
        index: usize,
    },

    /// A sibling field is malformed, so overlap could not be decided.
    #[error("Cannot check '{entry}' against '{sibling}': {source}")]
    Undetermined {
        entry: String,
        sibling: String,
        index: usize,
        #[source]
        source: ParseError,
    },

    #[error("Assignment '{key}' rejected: {source}")]
    Rejected {
        key: String,
        /// The other assignment involved, when the failure is a comparison.
        other_key: Option<String>,
        #[source]
        source: Box<PolicyError>,
    },
}

impl PolicyError {
    /// True when the root cause is a range whose bounds are not increasing.
    pub fn is_range_order(&self) -> bool {
        match self {
            PolicyError::InvalidField { source, .. } => source.is_range_order(),
            PolicyError::Rejected { source, .. } => source.is_range_order(),
            _ => false,
        }
    }

    /// True for the "cannot determine" outcome, as opposed to a definite
    /// syntax error or conflict.
    pub fn is_undetermined(&self) -> bool {
        match self {
            PolicyError::Undetermined { .. } => true,
            PolicyError::Rejected { source, .. } => source.is_undetermined(),
            _ => false,
        }
    }
}
