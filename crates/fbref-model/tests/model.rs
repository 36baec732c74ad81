//! Tests for fbref-model types.

use fbref_model::{
    Category, FailurePolicy, HarvestOptions, MatchResult, OutputFormat, SlotPair, TableLayout,
};

#[test]
fn layout_deserializes_from_toml() {
    let text = r#"
expected_table_count = 20

[slots]
summary = { home = 3, away = 10 }
passing = { home = 4, away = 11 }
pass_type = { home = 5, away = 12 }
defensive_action = { home = 6, away = 13 }
possession = { home = 7, away = 14 }
miscellaneous_stats = { home = 8, away = 15 }
goalkeeper = { home = 9, away = 16 }
"#;
    let layout: TableLayout = toml::from_str(text).expect("parse layout");
    assert_eq!(layout.expected_table_count, Some(20));
    assert_eq!(layout.slot(Category::PassType), Some(SlotPair::new(5, 12)));
    assert_eq!(layout, TableLayout::default().with_expected_table_count(Some(20)));
    layout.validate().expect("valid layout");
}

#[test]
fn options_serialize_round_trip() {
    let options = HarvestOptions::new().with_failure_policy(FailurePolicy::Skip);
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: HarvestOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round.failure_policy, FailurePolicy::Skip);
    assert_eq!(round.output_format, OutputFormat::Xlsx);
    assert_eq!(round.match_time_years, vec!["2023", "2024"]);
    assert_eq!(round.layout, TableLayout::default());
}

#[test]
fn result_labels() {
    let labels: Vec<String> = [MatchResult::Win, MatchResult::Lose, MatchResult::Draw]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, vec!["Win", "Lose", "Draw"]);
}

#[test]
fn categories_serialize_snake_case() {
    let json = serde_json::to_string(&Category::MiscellaneousStats).expect("serialize");
    assert_eq!(json, "\"miscellaneous_stats\"");
}
