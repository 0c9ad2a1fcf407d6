use serde::Serialize;

/// Icons available for product categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryIcon {
    Factory,
    Package,
}

impl CategoryIcon {
    /// Icon code understood by the frontend icon table
    pub fn code(&self) -> &'static str {
        match self {
            CategoryIcon::Factory => "factory",
            CategoryIcon::Package => "package",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CategoryIcon::Factory.code(), "factory");
        assert_eq!(CategoryIcon::Package.code(), "package");
    }

    #[test]
    fn test_serde_uses_code() {
        for icon in [CategoryIcon::Factory, CategoryIcon::Package] {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.code()));
        }
    }
}
