//! Word-search puzzle engine.
//!
//! Places a list of target words into a letter grid along the 8
//! compass directions, fills the leftover cells with difficulty-biased
//! decoy letters, and emits a verifiable solution map. The companion
//! `verify` module recovers or audits placements for any grid,
//! including grids produced elsewhere.
//!
//! The host-facing boundary is `generate_json`, which accepts a JSON
//! string (puzzle params) and returns a JSON string (puzzle result).

pub mod errors;
pub mod fill;
pub mod generate;
pub mod placement;
pub mod types;
pub mod verify;

pub use errors::GenerateError;
pub use types::{Direction, Grid, Placement, PuzzleParams, PuzzleResult, Tuning};

/// Run the puzzle engine over the JSON interchange format.
///
/// Takes a JSON string matching the `PuzzleParams` schema and returns
/// a JSON string matching the `PuzzleResult` schema. Errors come back
/// as display strings ready for the host application.
pub fn generate_json(params_json: &str) -> Result<String, String> {
    let params: PuzzleParams = serde_json::from_str(params_json)
        .map_err(|e| format!("invalid puzzle params JSON: {e}"))?;

    let result = generate::generate(&params).map_err(|e| e.to_string())?;

    serde_json::to_string(&result).map_err(|e| format!("failed to serialize puzzle result: {e}"))
}
