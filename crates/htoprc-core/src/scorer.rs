//! Customization score: how far a configuration strays from stock htop.
//!
//! Each rule is independent and additive; no rule cancels another.
//!
//! | rule | points |
//! |------|--------|
//! | color scheme is not the default | 10 |
//! | tree view enabled | 5 |
//! | any left-column meters | 5 |
//! | any right-column meters | 5 |
//! | more than 8 process-list columns | 3 |
//! | header layout is not the default | 3 |

use serde::Serialize;

use crate::types::{Configuration, HeaderLayout};

/// A scoring rule that contributed to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    CustomColorScheme,
    TreeView,
    LeftMeters,
    RightMeters,
    ManyColumns,
    CustomHeaderLayout,
}

impl ScoreRule {
    pub fn points(self) -> u32 {
        match self {
            Self::CustomColorScheme => 10,
            Self::TreeView | Self::LeftMeters | Self::RightMeters => 5,
            Self::ManyColumns | Self::CustomHeaderLayout => 3,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CustomColorScheme => "non-default color scheme",
            Self::TreeView => "tree view enabled",
            Self::LeftMeters => "left header meters configured",
            Self::RightMeters => "right header meters configured",
            Self::ManyColumns => "more than 8 process columns",
            Self::CustomHeaderLayout => "non-default header layout",
        }
    }
}

/// Column count above which `ManyColumns` applies.
const MANY_COLUMNS: usize = 8;

/// The rules that fire for `config`, in table order.
pub fn score_breakdown(config: &Configuration) -> Vec<ScoreRule> {
    let defaults = Configuration::default();
    let checks = [
        (
            ScoreRule::CustomColorScheme,
            config.color_scheme != defaults.color_scheme,
        ),
        (ScoreRule::TreeView, config.tree_view),
        (ScoreRule::LeftMeters, !config.left_meters.is_empty()),
        (ScoreRule::RightMeters, !config.right_meters.is_empty()),
        (ScoreRule::ManyColumns, config.columns.len() > MANY_COLUMNS),
        (
            ScoreRule::CustomHeaderLayout,
            config.header_layout != HeaderLayout::default(),
        ),
    ];
    checks
        .into_iter()
        .filter_map(|(rule, fired)| fired.then_some(rule))
        .collect()
}

/// Sum of the points of every rule that fires.
pub fn score(config: &Configuration) -> u32 {
    score_breakdown(config)
        .into_iter()
        .map(ScoreRule::points)
        .sum()
}
