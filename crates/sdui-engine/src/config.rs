//! Engine Configuration

/// Engine configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the document endpoint, joined onto the transport's base URL.
    pub document_path: String,
}

impl Config {
    /// Configuration fetching documents from `document_path`.
    pub fn new(document_path: impl Into<String>) -> Self {
        Self {
            document_path: document_path.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_path: "/api/config".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_path() {
        assert_eq!(Config::default().document_path, "/api/config");
        assert_eq!(Config::new("/ui/home").document_path, "/ui/home");
    }
}
