use std::time::Duration;

use thiserror::Error;

use crate::types::TokenStandard;

/// Failures that leave the storefront without anything to show.
///
/// Probe, claim condition and currency lookups degrade the listing instead of failing it,
/// so they never show up here.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to fetch {standard} metadata: {reason}")]
    CoreMetadata {
        standard: TokenStandard,
        reason: String,
    },

    #[error("resolving listing timed out after {0:?}")]
    Timeout(Duration),
}
