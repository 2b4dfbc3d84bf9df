use htoprc_core::{parse, score, score_breakdown, Configuration, ScoreRule};

#[test]
fn default_scores_zero() {
    assert_eq!(score(&Configuration::default()), 0);
    assert!(score_breakdown(&Configuration::default()).is_empty());
}

#[test]
fn all_rules_add_up() {
    let text = "color_scheme=5\ntree_view=1\ncolumn_meters_0=CPU\ncolumn_meters_1=Tasks\n\
                header_layout=four_25_25_25_25\nfields=0 1 2 3 4 5 6 7 8 9";
    let result = parse(text);
    assert_eq!(result.score, 10 + 5 + 5 + 5 + 3 + 3);
    assert_eq!(result.score, 31);
    assert_eq!(
        score_breakdown(&result.config),
        vec![
            ScoreRule::CustomColorScheme,
            ScoreRule::TreeView,
            ScoreRule::LeftMeters,
            ScoreRule::RightMeters,
            ScoreRule::ManyColumns,
            ScoreRule::CustomHeaderLayout,
        ]
    );
}

#[test]
fn each_rule_alone() {
    let cases = [
        ("color_scheme=1", 10),
        ("tree_view=1", 5),
        ("column_meters_0=CPU", 5),
        ("column_meters_1=CPU", 5),
        ("fields=0 1 2 3 4 5 6 7 8", 3),
        ("header_layout=one_100", 3),
    ];
    for (text, expected) in cases {
        assert_eq!(parse(text).score, expected, "{text}");
    }
}

#[test]
fn exactly_eight_columns_do_not_count() {
    assert_eq!(parse("fields=0 1 2 3 4 5 6 7").score, 0);
}

#[test]
fn default_values_written_explicitly_score_nothing() {
    assert_eq!(parse("color_scheme=0\nheader_layout=two_50_50\ntree_view=0").score, 0);
}

#[test]
fn empty_meter_column_scores_nothing() {
    assert_eq!(parse("column_meters_0=\ncolumn_meter_modes_0=1").score, 0);
}

#[test]
fn upper_meter_columns_do_not_score() {
    assert_eq!(parse("column_meters_2=Clock\ncolumn_meters_3=Hostname").score, 0);
}

#[test]
fn stock_htop_file() {
    // two meter columns + 12 process columns
    let result = parse(include_str!("fixtures/htop-3.2.htoprc"));
    assert_eq!(result.score, 5 + 5 + 3);
}

#[test]
fn points_match_table() {
    let total: u32 = [
        ScoreRule::CustomColorScheme,
        ScoreRule::TreeView,
        ScoreRule::LeftMeters,
        ScoreRule::RightMeters,
        ScoreRule::ManyColumns,
        ScoreRule::CustomHeaderLayout,
    ]
    .into_iter()
    .map(ScoreRule::points)
    .sum();
    assert_eq!(total, 31);
}
