//! Snapshot DTOs

use serde::Deserialize;

/// Query parameters for the hotel snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotParams {
    /// Annotate each client with the total they owe
    #[serde(default)]
    pub totals: bool,
}
