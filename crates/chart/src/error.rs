//! Result and Error types for the yield chart

/// Type alias for `Result<T, chart::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `isoyield-chart`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// A staged record did not have enough whitespace separated fields
    #[error("malformed record (expected at least {expected:?} fields, found {found:?})")]
    MalformedRecord { found: usize, expected: usize },

    /// Derived (N, Z) pair does not fall within the nuclide table
    #[error("invalid isotope derivation (N={n:?}, Z={z:?})")]
    InvalidIsotope { n: i32, z: i32 },

    /// Generic error type for nom parser results
    #[error("parser failed")]
    ParseError(String),

    /// Element symbol not found in the periodic table
    #[error("failed to infer element from \"{0}\"")]
    UnknownElement(String),

    /// Target material is not one of the known targets
    #[error("failed to infer target material from \"{0}\"")]
    UnknownTarget(String),

    /// Ion source identifier outside of the known range
    #[error("failed to infer ion source from id {0}")]
    UnknownIonSource(u8),
}
