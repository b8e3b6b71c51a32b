/// Alias for `Result<T, HxError>`.
pub type HxResult<T> = Result<T, HxError>;

/// Errors that can occur when encoding or decoding game data.
#[derive(Debug, thiserror::Error)]
pub enum HxError {
    /// The snapshot JSON could not be produced or parsed.
    #[error("snapshot encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible version of the game.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the snapshot.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },
}
