use facility_finder_data::FacilityRecord;
use tracing::{debug, instrument};

/// Lowercasing rule applied to both the keyword and the facility name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseFolding {
    /// Full Unicode lowercase mapping (`str::to_lowercase`)
    #[default]
    Unicode,
    /// ASCII letters only; other characters compare as-is
    Ascii,
}

impl CaseFolding {
    pub fn fold(self, text: &str) -> String {
        match self {
            Self::Unicode => text.to_lowercase(),
            Self::Ascii => text.to_ascii_lowercase(),
        }
    }
}

/// What an empty keyword means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EmptyKeywordPolicy {
    /// The empty string is a substring of every name, so every record matches
    #[default]
    MatchAll,
    /// Report [`SearchOutcome::NoKeyword`] instead of searching
    NoKeyword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub case_folding: CaseFolding,
    pub empty_keyword: EmptyKeywordPolicy,
    /// Strip surrounding whitespace from the keyword before matching
    pub trim_keyword: bool,
}

impl SearchConfig {
    pub fn builder() -> crate::SearchConfigBuilder {
        crate::SearchConfigBuilder::new()
    }
}

/// Result of a configured search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    Matches(Vec<&'a FacilityRecord>),
    /// The keyword was empty and the policy is [`EmptyKeywordPolicy::NoKeyword`]
    NoKeyword,
}

impl<'a> SearchOutcome<'a> {
    pub fn matches(&self) -> Option<&[&'a FacilityRecord]> {
        match self {
            Self::Matches(records) => Some(records),
            Self::NoKeyword => None,
        }
    }

    /// Matched records; empty when no keyword was provided.
    pub fn into_matches(self) -> Vec<&'a FacilityRecord> {
        match self {
            Self::Matches(records) => records,
            Self::NoKeyword => Vec::new(),
        }
    }

    pub fn is_no_keyword(&self) -> bool {
        matches!(self, Self::NoKeyword)
    }
}

/// Return the records whose name contains `keyword`, ignoring case.
///
/// Records keep their relative order. An empty keyword matches every record.
///
/// ```rust
/// use facility_finder::search_facilities;
/// use facility_finder::data::FacilityRecord;
///
/// let records = vec![
///     FacilityRecord::new(1, "Tennis Court"),
///     FacilityRecord::new(2, "Badminton Court"),
///     FacilityRecord::new(3, "Pool"),
/// ];
/// let matches = search_facilities(&records, "COURT");
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].name, "Tennis Court");
/// ```
pub fn search_facilities<'a>(records: &'a [FacilityRecord], keyword: &str) -> Vec<&'a FacilityRecord> {
    search_facilities_folded(records, keyword, CaseFolding::default())
}

pub fn search_facilities_folded<'a>(
    records: &'a [FacilityRecord],
    keyword: &str,
    folding: CaseFolding,
) -> Vec<&'a FacilityRecord> {
    let needle = folding.fold(keyword);
    records
        .iter()
        .filter(|record| folding.fold(&record.name).contains(needle.as_str()))
        .collect()
}

#[instrument(name = "Keyword search", level = "debug", skip(records, config), fields(records = records.len()))]
pub fn search_facilities_with_config<'a>(
    records: &'a [FacilityRecord],
    keyword: &str,
    config: &SearchConfig,
) -> SearchOutcome<'a> {
    let keyword = if config.trim_keyword {
        keyword.trim()
    } else {
        keyword
    };
    if keyword.is_empty() && config.empty_keyword == EmptyKeywordPolicy::NoKeyword {
        debug!("No keyword provided");
        return SearchOutcome::NoKeyword;
    }
    let matches = search_facilities_folded(records, keyword, config.case_folding);
    debug!(matches = matches.len(), "Search complete");
    SearchOutcome::Matches(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facility_finder_data::{FacilityId, TestDataConfig, test_records};
    use proptest::prelude::*;

    fn scenario() -> Vec<FacilityRecord> {
        test_records(&TestDataConfig::minimal())
    }

    fn ids(records: &[&FacilityRecord]) -> Vec<FacilityId> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_lowercase_keyword() {
        let records = scenario();
        let matches = search_facilities(&records, "court");
        assert_eq!(ids(&matches), [FacilityId::Number(1), FacilityId::Number(2)]);
    }

    #[test]
    fn test_uppercase_keyword() {
        let records = scenario();
        let matches = search_facilities(&records, "COURT");
        assert_eq!(ids(&matches), [FacilityId::Number(1), FacilityId::Number(2)]);
    }

    #[test]
    fn test_empty_keyword_matches_everything_in_order() {
        let records = scenario();
        let matches = search_facilities(&records, "");
        assert_eq!(
            ids(&matches),
            [
                FacilityId::Number(1),
                FacilityId::Number(2),
                FacilityId::Number(3)
            ]
        );
    }

    #[test]
    fn test_empty_store() {
        assert!(search_facilities(&[], "court").is_empty());
        assert!(search_facilities(&[], "").is_empty());
    }

    #[test]
    fn test_no_match() {
        let records = scenario();
        assert!(search_facilities(&records, "rink").is_empty());
    }

    #[test]
    fn test_mid_word_and_whitespace_keywords() {
        let records = scenario();
        assert_eq!(ids(&search_facilities(&records, "minto")), [FacilityId::Number(2)]);
        assert_eq!(
            ids(&search_facilities(&records, "s c")),
            [FacilityId::Number(1)],
            "Spaces are part of the substring"
        );
        assert!(search_facilities(&records, " pool").is_empty());
    }

    #[test]
    fn test_unicode_folding() {
        let records = vec![
            FacilityRecord::new(1, "CAFÉ TERRACE"),
            FacilityRecord::new(2, "Straße Hall"),
        ];
        assert_eq!(ids(&search_facilities(&records, "café")), [FacilityId::Number(1)]);
        assert_eq!(
            ids(&search_facilities_folded(&records, "café", CaseFolding::Ascii)),
            Vec::<FacilityId>::new(),
            "ASCII folding leaves É untouched"
        );
        assert_eq!(ids(&search_facilities(&records, "STRASSE")), Vec::<FacilityId>::new());
        assert_eq!(ids(&search_facilities(&records, "STRAßE")), [FacilityId::Number(2)]);
    }

    #[test]
    fn test_config_no_keyword_policy() {
        let records = scenario();
        let config = SearchConfig {
            empty_keyword: EmptyKeywordPolicy::NoKeyword,
            ..SearchConfig::default()
        };

        assert!(search_facilities_with_config(&records, "", &config).is_no_keyword());
        assert_eq!(
            search_facilities_with_config(&records, "   ", &config)
                .matches()
                .map(<[_]>::len),
            Some(0),
            "Whitespace is a keyword unless trimming is enabled"
        );
        assert_eq!(
            search_facilities_with_config(&records, "pool", &config)
                .into_matches()
                .len(),
            1
        );
    }

    #[test]
    fn test_config_trim() {
        let records = scenario();
        let config = SearchConfig {
            empty_keyword: EmptyKeywordPolicy::NoKeyword,
            trim_keyword: true,
            ..SearchConfig::default()
        };

        assert!(search_facilities_with_config(&records, "  \t", &config).is_no_keyword());
        assert_eq!(
            ids(&search_facilities_with_config(&records, " Court ", &config).into_matches()),
            [FacilityId::Number(1), FacilityId::Number(2)]
        );
    }

    #[test]
    fn test_config_default_matches_all_on_empty() {
        let records = scenario();
        let outcome = search_facilities_with_config(&records, "", &SearchConfig::default());
        assert_eq!(outcome.matches().map(<[_]>::len), Some(3));
    }

    fn arb_records() -> impl Strategy<Value = Vec<FacilityRecord>> {
        prop::collection::vec("[a-zA-Z ]{0,12}", 0..20).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| FacilityRecord::new(i64::try_from(i).unwrap(), name))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_matches_are_exactly_the_containing_records(
            records in arb_records(),
            keyword in "[a-zA-Z ]{0,3}",
        ) {
            let matches = search_facilities(&records, &keyword);
            let needle = keyword.to_lowercase();
            let expected: Vec<&FacilityRecord> = records
                .iter()
                .filter(|r| r.name.to_lowercase().contains(&needle))
                .collect();
            prop_assert_eq!(matches, expected);
        }

        #[test]
        fn prop_results_are_an_ordered_subsequence(
            records in arb_records(),
            keyword in "[a-zA-Z]{0,2}",
        ) {
            let matches = search_facilities(&records, &keyword);
            let mut remaining = records.iter();
            for matched in &matches {
                prop_assert!(
                    remaining.any(|r| std::ptr::eq(r, *matched)),
                    "Match out of order or not from the input"
                );
            }
        }

        #[test]
        fn prop_empty_keyword_returns_everything(records in arb_records()) {
            let matches = search_facilities(&records, "");
            prop_assert_eq!(matches.len(), records.len());
            prop_assert!(matches.iter().zip(&records).all(|(m, r)| std::ptr::eq(*m, r)));
        }

        #[test]
        fn prop_keyword_case_does_not_matter(
            records in arb_records(),
            keyword in "[a-zA-Z]{0,3}",
        ) {
            prop_assert_eq!(
                search_facilities(&records, &keyword.to_uppercase()),
                search_facilities(&records, &keyword.to_lowercase())
            );
        }
    }
}
