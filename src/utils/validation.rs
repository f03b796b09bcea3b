use validator::Validate;

use crate::error::{Error, Result};

pub const MAX_SESSION_ID_LEN: usize = 128;

pub fn validate<T: Validate>(val: &T) -> std::result::Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Session ids are opaque to the engine but must be 1..=128 characters and
/// free of control characters.
pub fn validate_session_id(session_id: &str) -> Result<()> {
    let len = session_id.chars().count();
    if len == 0 || len > MAX_SESSION_ID_LEN {
        return Err(Error::BadRequest(format!(
            "session_id must be between 1 and {} characters",
            MAX_SESSION_ID_LEN
        )));
    }
    if session_id.chars().any(char::is_control) {
        return Err(Error::BadRequest(
            "session_id must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_bounds() {
        assert!(validate_session_id("interview-42").is_ok());
        assert!(validate_session_id("").is_err());
        assert!(validate_session_id(&"a".repeat(MAX_SESSION_ID_LEN)).is_ok());
        assert!(validate_session_id(&"a".repeat(MAX_SESSION_ID_LEN + 1)).is_err());
        assert!(validate_session_id("bad\nid").is_err());
    }
}
