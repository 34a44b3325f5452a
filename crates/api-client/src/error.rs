use thiserror::Error;

/// Flat error taxonomy for REST calls. Everything the UI needs is the
/// human-readable detail; callers that want to branch can match the
/// variant, but none currently do beyond logging.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{detail}")]
    Status { status: u16, detail: String },

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The backend-supplied `detail` string when one exists, otherwise a
    /// generic description. Shown verbatim on enrollment and registration
    /// failures.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Pull the `detail` field out of an error response body, if present.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_backend_detail() {
        assert_eq!(
            extract_detail(r#"{"detail":"Class is full"}"#),
            Some("Class is full".to_string())
        );
    }

    #[test]
    fn missing_or_malformed_detail_is_none() {
        assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(r#"{"detail":42}"#), None);
    }

    #[test]
    fn status_error_surfaces_detail() {
        let err = ApiError::Status { status: 400, detail: "Invalid credentials".into() };
        assert_eq!(err.detail(), "Invalid credentials");
    }
}
