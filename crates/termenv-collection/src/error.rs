//! Error types for the collection engine
//!
//! Merge and diff are total functions over already-valid inputs; the only
//! fallible operation is `apply`, whose injected resolver may fail.

/// Errors raised while applying a merged collection to an environment map
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// The injected value resolver failed for a mutator.
    ///
    /// The apply call aborts here: every variable fully processed before
    /// `variable` is finalized in the target map, `variable` itself and all
    /// later variables are left untouched.
    #[error("failed to resolve value for {variable}: {source}")]
    Resolve {
        /// Variable whose mutator was being resolved
        variable: String,
        /// Resolver failure
        #[source]
        source: anyhow::Error,
    },
}
