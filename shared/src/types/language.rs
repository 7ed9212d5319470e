//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language preference for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "vi")]
    Vietnamese,
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Vietnamese => "vi",
        }
    }

    /// Get language name in English
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Vietnamese => "Vietnamese",
        }
    }

    /// Get native language name
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Vietnamese => "Tiếng Việt",
        }
    }

    /// Get locale code, as sent in the Accept-Language header
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Vietnamese => "vi-VN",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "vi" | "vie" | "vietnamese" | "tiếng việt" => Ok(Language::Vietnamese),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_properties() {
        let en = Language::English;
        assert_eq!(en.code(), "en");
        assert_eq!(en.name(), "English");
        assert_eq!(en.locale(), "en-US");

        let vi = Language::Vietnamese;
        assert_eq!(vi.code(), "vi");
        assert_eq!(vi.native_name(), "Tiếng Việt");
        assert_eq!(vi.locale(), "vi-VN");
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("vi".parse::<Language>().unwrap(), Language::Vietnamese);
        assert_eq!("vietnamese".parse::<Language>().unwrap(), Language::Vietnamese);
        assert!("invalid".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::Vietnamese).unwrap();
        assert_eq!(json, "\"vi\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
