use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TutorError {
    /// The abstract root of a hierarchy was asked for directly.
    #[error("cannot instantiate abstract type '{kind}'")]
    AbstractInstantiation { kind: &'static str },

    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
