use thiserror::Error;

/// An error that occurs while building a [`Catalog`][`crate::Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The byte source failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    /// The bytes do not describe a gamemaster.
    #[error("failed to parse gamemaster: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn io<S>(context: S, source: std::io::Error) -> Self
    where
        S: Into<String>,
    {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
