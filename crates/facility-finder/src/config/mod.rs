use std::str::FromStr;

use crate::{
    error::FacilityError,
    search::{CaseFolding, EmptyKeywordPolicy, SearchConfig},
};

/// Builder for creating search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder: Unicode folding, empty keyword matches everything
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Create a builder for form submissions: trimmed keyword, blank means no search
    pub fn form() -> Self {
        Self::new()
            .trim_keyword(true)
            .empty_keyword(EmptyKeywordPolicy::NoKeyword)
    }

    /// Set the lowercasing rule used for matching
    pub fn case_folding(mut self, folding: CaseFolding) -> Self {
        self.config.case_folding = folding;
        self
    }

    /// Set how an empty keyword is treated
    pub fn empty_keyword(mut self, policy: EmptyKeywordPolicy) -> Self {
        self.config.empty_keyword = policy;
        self
    }

    /// Strip surrounding whitespace from keywords
    pub fn trim_keyword(mut self, trim: bool) -> Self {
        self.config.trim_keyword = trim;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl FromStr for CaseFolding {
    type Err = FacilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            other => Err(FacilityError::ConfigError(format!(
                "Unknown case folding '{other}', expected 'unicode' or 'ascii'"
            ))),
        }
    }
}

impl FromStr for EmptyKeywordPolicy {
    type Err = FacilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "match-all" | "all" => Ok(Self::MatchAll),
            "no-keyword" | "none" => Ok(Self::NoKeyword),
            other => Err(FacilityError::ConfigError(format!(
                "Unknown empty keyword policy '{other}', expected 'match-all' or 'no-keyword'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfigBuilder::new().build();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.case_folding, CaseFolding::Unicode);
        assert_eq!(config.empty_keyword, EmptyKeywordPolicy::MatchAll);
        assert!(!config.trim_keyword);
    }

    #[test]
    fn test_form_preset() {
        let config = SearchConfigBuilder::form()
            .case_folding(CaseFolding::Ascii)
            .build();
        assert!(config.trim_keyword);
        assert_eq!(config.empty_keyword, EmptyKeywordPolicy::NoKeyword);
        assert_eq!(config.case_folding, CaseFolding::Ascii);
    }

    #[test]
    fn test_parse_case_folding() {
        assert_eq!("ASCII".parse::<CaseFolding>().unwrap(), CaseFolding::Ascii);
        assert_eq!("unicode".parse::<CaseFolding>().unwrap(), CaseFolding::Unicode);
        assert!(matches!(
            "turkish".parse::<CaseFolding>(),
            Err(FacilityError::ConfigError(_))
        ));
    }

    #[test]
    fn test_parse_empty_keyword_policy() {
        assert_eq!(
            "no_keyword".parse::<EmptyKeywordPolicy>().unwrap(),
            EmptyKeywordPolicy::NoKeyword
        );
        assert_eq!(
            "match-all".parse::<EmptyKeywordPolicy>().unwrap(),
            EmptyKeywordPolicy::MatchAll
        );
        assert!("maybe".parse::<EmptyKeywordPolicy>().is_err());
    }
}
