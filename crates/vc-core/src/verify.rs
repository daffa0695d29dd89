use serde::{Deserialize, Serialize};

/// Outcome of a check surfaced to the UI as data.
///
/// Serialized with an internal `type` tag:
/// `{"type":"Ok","value":...}`, `{"type":"Warn","message":"..."}`,
/// `{"type":"Err","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VerifyResult<T = ()> {
    Ok { value: T },
    /// Usable, but the user should confirm first.
    Warn { message: String },
    Err { message: String },
}

impl<T> VerifyResult<T> {
    pub fn ok(value: T) -> Self {
        VerifyResult::Ok { value }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        VerifyResult::Warn {
            message: message.into(),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        VerifyResult::Err {
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, VerifyResult::Ok { .. })
    }

    pub fn is_err(&self) -> bool {
        matches!(self, VerifyResult::Err { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            VerifyResult::Ok { .. } => None,
            VerifyResult::Warn { message } | VerifyResult::Err { message } => Some(message),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            VerifyResult::Ok { value } => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> VerifyResult<U> {
        match self {
            VerifyResult::Ok { value } => VerifyResult::Ok { value: f(value) },
            VerifyResult::Warn { message } => VerifyResult::Warn { message },
            VerifyResult::Err { message } => VerifyResult::Err { message },
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for VerifyResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => VerifyResult::Ok { value },
            Err(err) => VerifyResult::Err {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tagged_json_shape() {
        assert_eq!(
            serde_json::to_value(VerifyResult::ok(3)).unwrap(),
            json!({ "type": "Ok", "value": 3 })
        );
        assert_eq!(
            serde_json::to_value(VerifyResult::<()>::err("bad path")).unwrap(),
            json!({ "type": "Err", "message": "bad path" })
        );
        assert_eq!(
            serde_json::to_value(VerifyResult::<()>::warn("exists")).unwrap(),
            json!({ "type": "Warn", "message": "exists" })
        );
    }

    #[test]
    fn test_from_result() {
        let ok: VerifyResult<u8> = Ok::<u8, String>(1).into();
        assert_eq!(ok.into_value(), Some(1));

        let err: VerifyResult<u8> = Err::<u8, _>("not a compiler").into();
        assert!(err.is_err());
        assert_eq!(err.message(), Some("not a compiler"));
    }

    #[test]
    fn test_map_keeps_messages() {
        let warn: VerifyResult<u8> = VerifyResult::warn("careful");
        assert_eq!(warn.map(|v| v + 1), VerifyResult::warn("careful"));
        assert_eq!(VerifyResult::ok(1).map(|v| v + 1), VerifyResult::ok(2));
    }
}
