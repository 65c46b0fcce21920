use thiserror::Error;

/// An error that occurs while creating, calculating, or persisting a
/// [`Creature`][`crate::Creature`].
#[derive(Debug, Error)]
pub enum CreatureError {
    /// The byte source or sink failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    /// The bytes do not describe a Mon.
    #[error("failed to parse mon: {0}")]
    Parse(#[source] serde_yaml::Error),
    /// The Mon could not be written out.
    #[error("failed to serialize mon: {0}")]
    Serialize(#[source] serde_yaml::Error),
    /// The level is not a half level between the minimum and maximum level.
    #[error("invalid level: {0}")]
    InvalidLevel(f64),
    /// No species exists with the given ID.
    #[error("species not found: {0}")]
    UnknownSpecies(String),
}

impl CreatureError {
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
