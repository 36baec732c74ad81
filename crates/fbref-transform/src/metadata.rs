//! Match metadata derived from the page title and score elements.
//!
//! Titles read `"<home> vs. <away> Match Report – <match time>"`.

use fbref_common::parse_i64;
use fbref_model::{MatchMetadata, MatchResult};

use crate::error::{Result, TransformError};
use crate::match_time::MatchTimeRule;

/// Ends the team section of the title.
pub const REPORT_MARKER: &str = " Match Report";

/// Separates home and away team names.
pub const TEAM_SEPARATOR: &str = " vs. ";

/// Dash delimiters around the match-time segment (en dash, em dash).
pub const TIME_SEPARATORS: [&str; 2] = [" \u{2013} ", " \u{2014} "];

/// Extracts teams, results and match time from one page.
///
/// Only the first two score values are read (home, then away).
pub fn extract_match_metadata(
    title: &str,
    scores: &[String],
    rule: &MatchTimeRule,
) -> Result<MatchMetadata> {
    let (home_team, away_team) = parse_teams(title)?;
    let match_time_raw = parse_match_time(title)?;

    let [home_score, away_score] = match scores {
        [home, away, ..] => [parse_score(home)?, parse_score(away)?],
        _ => {
            return Err(TransformError::metadata(
                &scores.join(", "),
                format!("expected two scores, found {}", scores.len()),
            ));
        }
    };
    let (home_result, away_result) = MatchResult::pair_from_scores(home_score, away_score);

    Ok(MatchMetadata {
        home_team,
        away_team,
        home_result,
        away_result,
        match_time: rule.clean(&match_time_raw),
        match_time_raw,
    })
}

/// Splits `"<home> vs. <away>"` out of the title.
pub fn parse_teams(title: &str) -> Result<(String, String)> {
    let Some(marker) = title.find(REPORT_MARKER) else {
        return Err(TransformError::metadata(
            title,
            format!("missing '{}'", REPORT_MARKER.trim()),
        ));
    };
    let teams = &title[..marker];
    let parts: Vec<&str> = teams.split(TEAM_SEPARATOR).collect();
    match parts.as_slice() {
        [home, away] if !home.trim().is_empty() && !away.trim().is_empty() => {
            Ok((home.trim().to_string(), away.trim().to_string()))
        }
        _ => Err(TransformError::metadata(
            title,
            format!("expected exactly two teams separated by '{}'", TEAM_SEPARATOR.trim()),
        )),
    }
}

/// Returns the segment between the first dash delimiter and the next one.
pub fn parse_match_time(title: &str) -> Result<String> {
    let Some((start, separator)) = find_separator(title) else {
        return Err(TransformError::metadata(title, "missing dash before match time"));
    };
    let rest = &title[start + separator.len()..];
    let segment = match find_separator(rest) {
        Some((end, _)) => &rest[..end],
        None => rest,
    };
    Ok(segment.to_string())
}

fn find_separator(text: &str) -> Option<(usize, &'static str)> {
    TIME_SEPARATORS
        .iter()
        .filter_map(|separator| text.find(separator).map(|index| (index, *separator)))
        .min_by_key(|(index, _)| *index)
}

fn parse_score(value: &str) -> Result<i64> {
    parse_i64(value).ok_or_else(|| TransformError::metadata(value, "score is not an integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(home: &str, away: &str) -> Vec<String> {
        vec![home.to_string(), away.to_string()]
    }

    #[test]
    fn extracts_full_metadata() {
        let metadata = extract_match_metadata(
            "Burnley vs. Manchester City Match Report – Friday August 11, 2023",
            &scores("0", "3"),
            &MatchTimeRule::default(),
        )
        .unwrap();
        assert_eq!(metadata.home_team, "Burnley");
        assert_eq!(metadata.away_team, "Manchester City");
        assert_eq!(metadata.home_result, MatchResult::Lose);
        assert_eq!(metadata.away_result, MatchResult::Win);
        assert_eq!(metadata.match_time, "Friday August 11, 2023");
    }

    #[test]
    fn match_time_stops_at_next_dash() {
        let time = parse_match_time("A vs. B Match Report – Saturday May 4, 2024 – Premier League")
            .unwrap();
        assert_eq!(time, "Saturday May 4, 2024");
    }

    #[test]
    fn em_dash_is_accepted() {
        let time = parse_match_time("A vs. B Match Report — Sunday May 5, 2024").unwrap();
        assert_eq!(time, "Sunday May 5, 2024");
    }

    #[test]
    fn missing_report_marker_fails() {
        let error = parse_teams("Arsenal vs. Nottingham Forest – Saturday August 12, 2023");
        assert!(matches!(error, Err(TransformError::MetadataParse { .. })));
    }

    #[test]
    fn three_teams_fail() {
        assert!(parse_teams("A vs. B vs. C Match Report – x").is_err());
    }

    #[test]
    fn missing_dash_fails() {
        assert!(parse_match_time("A vs. B Match Report").is_err());
    }

    #[test]
    fn non_numeric_score_fails() {
        let error = extract_match_metadata(
            "A vs. B Match Report – Sunday May 19, 2024",
            &scores("2", "?"),
            &MatchTimeRule::default(),
        )
        .unwrap_err();
        assert!(error.to_string().contains("score is not an integer"));
    }
}
