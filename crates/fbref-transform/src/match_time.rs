//! Cleanup of the match-time text taken from the page title.
//!
//! Format contract: the title segment after the dash reads like
//! `"Saturday August 12, 2023"` and may be followed by further text on the
//! same segment. The cleaned value ends right after the first configured
//! year token found in the text. Text containing none of the tokens is kept
//! verbatim, so seasons outside the configured years pass through untouched.

use fbref_model::DEFAULT_MATCH_TIME_YEARS;

/// Ordered year tokens; the first token present in the text wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTimeRule {
    years: Vec<String>,
}

impl Default for MatchTimeRule {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_TIME_YEARS.iter().map(ToString::to_string))
    }
}

impl MatchTimeRule {
    /// Builds a rule from year tokens; blank tokens are ignored.
    pub fn new<I, S>(years: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let years = years
            .into_iter()
            .map(Into::into)
            .map(|year| year.trim().to_string())
            .filter(|year| !year.is_empty())
            .collect();
        Self { years }
    }

    pub fn years(&self) -> &[String] {
        &self.years
    }

    /// Cuts `raw` right after the first occurrence of the first matching
    /// year token.
    pub fn clean(&self, raw: &str) -> String {
        for year in &self.years {
            if let Some(position) = raw.find(year.as_str()) {
                return raw[..position + year.len()].to_string();
            }
        }
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuts_after_year() {
        let rule = MatchTimeRule::default();
        assert_eq!(
            rule.clean("Saturday August 12, 2023 Premier League"),
            "Saturday August 12, 2023"
        );
        assert_eq!(rule.clean("Sunday May 19, 2024 (Matchweek 38)"), "Sunday May 19, 2024");
    }

    #[test]
    fn earlier_token_in_list_wins() {
        let rule = MatchTimeRule::default();
        assert_eq!(rule.clean("2024 rematch of 2023 final"), "2024 rematch of 2023");
    }

    #[test]
    fn unknown_year_is_left_alone() {
        let rule = MatchTimeRule::default();
        assert_eq!(rule.clean("Sunday May 22, 2022"), "Sunday May 22, 2022");
    }

    #[test]
    fn blank_tokens_are_ignored() {
        let rule = MatchTimeRule::new(["", " 2025 "]);
        assert_eq!(rule.years(), ["2025"]);
        assert_eq!(rule.clean("Saturday August 16, 2025, 15:00"), "Saturday August 16, 2025");
    }
}
