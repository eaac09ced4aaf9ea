use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    RecipientCount { expected: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::RecipientCount { expected, actual } => {
                write!(
                    f,
                    "unsupported recipient count: {actual} (only {expected} recipient per request is supported)"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
