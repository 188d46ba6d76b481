use serde_json::Value;

use crate::error::{MoodSyncError, Result};
use crate::models::MoodAnalysis;

/// Parse raw model output into a typed analysis.
///
/// Two distinct failure modes: text that is not JSON at all yields
/// `Parse`, while well-formed JSON that lacks the required analysis
/// shape yields `SchemaMismatch`. The model is untrusted either way.
pub fn parse_analysis(raw: &str) -> Result<MoodAnalysis> {
    let value: Value = serde_json::from_str(raw)?;

    serde_json::from_value(value)
        .map_err(|e| MoodSyncError::SchemaMismatch(format!("{e}. Raw: {raw}")))
}
