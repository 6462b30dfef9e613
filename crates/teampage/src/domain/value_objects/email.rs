//! Email format check

/// True when `input` has an `@` and a `.` somewhere after it
pub fn looks_like_email(input: &str) -> bool {
    match (input.find('@'), input.rfind('.')) {
        (Some(at), Some(dot)) => dot > at,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(looks_like_email("ada@x.com"));
        assert!(looks_like_email("first.last@example.co.uk"));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!looks_like_email("ada.x.com"));
        assert!(!looks_like_email(""));
    }

    #[test]
    fn test_rejects_dot_only_before_at() {
        assert!(!looks_like_email("a.da@xcom"));
        assert!(!looks_like_email("ada@"));
    }

    #[test]
    fn test_no_further_checks() {
        assert!(looks_like_email("@."));
        assert!(looks_like_email(" x@y.z "));
    }
}
