//! Structured error types for storymap.
//!
//! Selection and activation are infallible; errors only come from loading
//! configuration and from binding to the browser environment.

/// All errors that can occur while configuring or mounting a story page.
#[derive(Debug, thiserror::Error)]
pub enum StorymapError {
    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration JSON could not be decoded.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Required DOM object was missing or rejected an operation.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The map library was unavailable or failed to build the map.
    #[error("Map error: {0}")]
    Map(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StorymapError>;

#[cfg(target_arch = "wasm32")]
impl From<StorymapError> for wasm_bindgen::JsValue {
    fn from(e: StorymapError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<serde_wasm_bindgen::Error> for StorymapError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let err: StorymapError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, StorymapError::Json(_)));
        assert!(err.to_string().starts_with("JSON: "));
    }

    #[test]
    fn test_config_error_message() {
        let err = StorymapError::Config("zoom 40 exceeds 18".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: zoom 40 exceeds 18");
    }
}
