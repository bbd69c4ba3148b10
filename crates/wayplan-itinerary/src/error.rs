use thiserror::Error;

/// Errors raised while building a [`crate::Segmenter`].
///
/// Segmenting text never fails; only an unusable section list does.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("section title must be non-empty")]
    EmptyTitle,

    #[error("duplicate section title: '{0}'")]
    DuplicateTitle(String),

    #[error("could not compile heading pattern for '{title}': {source}")]
    Pattern {
        title: String,
        #[source]
        source: regex::Error,
    },
}
