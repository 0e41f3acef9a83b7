use crate::quest::Field;

/// Failure of a single field extractor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The node or container could not be found at all.
    #[error("{0} not found")]
    Absent(&'static str),

    /// The node was found but its text does not have the expected shape.
    #[error("malformed {what}: {text:?}")]
    Malformed { what: &'static str, text: String },
}

impl ExtractError {
    pub(crate) fn malformed(what: &'static str, text: impl Into<String>) -> Self {
        ExtractError::Malformed {
            what,
            text: text.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("Quest content block not found")]
    MissingContent,

    #[error("Failed to extract quest {field}")]
    Field {
        field: Field,
        #[source]
        source: ExtractError,
    },
}
