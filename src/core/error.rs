/// Failures while wiring page interactions.
///
/// None of these are fatal: handlers log them and leave the page as it is.
#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("browser API call failed: {0}")]
    Js(String),

    #[error("invalid site settings: {0}")]
    Settings(#[from] serde_json::Error),
}

impl InteractionError {
    pub fn missing(what: impl Into<String>) -> Self {
        InteractionError::MissingElement(what.into())
    }

    /// Absent elements are expected on partial pages and are not worth a warning
    pub fn is_missing_element(&self) -> bool {
        matches!(self, InteractionError::MissingElement(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            InteractionError::missing("#nav-toggle").to_string(),
            "element not found: #nav-toggle"
        );
        assert_eq!(
            InteractionError::Js("SyntaxError".to_string()).to_string(),
            "browser API call failed: SyntaxError"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err: InteractionError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, InteractionError::Settings(_)));
        assert!(!err.is_missing_element());
    }

    #[test]
    fn test_is_missing_element() {
        assert!(InteractionError::missing("x").is_missing_element());
    }
}
