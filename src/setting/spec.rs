use super::SettingError;

/// A parsed `name:parameter` provider declaration.
///
/// Only the first `:` separates the name, so `"file:C:/app.toml"` keeps
/// `C:/app.toml` as the parameter. A declaration without `:` has no
/// parameter at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSpec {
    pub name: String,
    pub parameter: Option<String>,
}

impl ProviderSpec {
    pub fn parse(raw: &str) -> Result<Self, SettingError> {
        let (name, parameter) = match raw.split_once(':') {
            Some((name, parameter)) => (name, Some(parameter.to_string())),
            None => (raw, None),
        };
        if name.is_empty() {
            return Err(SettingError::InvalidProviderSpec(raw.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            parameter,
        })
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_parameter() {
        let spec = ProviderSpec::parse("env:APP_").unwrap();
        assert_eq!(spec.name, "env");
        assert_eq!(spec.parameter(), Some("APP_"));
    }

    #[test]
    fn test_parse_without_colon_has_no_parameter() {
        let spec = ProviderSpec::parse("file").unwrap();
        assert_eq!(spec.name, "file");
        assert_eq!(spec.parameter(), None);
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let spec = ProviderSpec::parse("file:C:/app.toml").unwrap();
        assert_eq!(spec.name, "file");
        assert_eq!(spec.parameter(), Some("C:/app.toml"));
    }

    #[test]
    fn test_parse_trailing_colon_is_empty_parameter() {
        let spec = ProviderSpec::parse("env:").unwrap();
        assert_eq!(spec.parameter(), Some(""));
    }

    #[test]
    fn test_parse_empty_name() {
        assert!(matches!(
            ProviderSpec::parse(":x"),
            Err(SettingError::InvalidProviderSpec(_))
        ));
        assert!(matches!(
            ProviderSpec::parse(""),
            Err(SettingError::InvalidProviderSpec(_))
        ));
    }
}
