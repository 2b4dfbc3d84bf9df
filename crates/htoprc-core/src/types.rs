//! The typed htoprc configuration model.
//!
//! A `Configuration` is built once per `parse` call and is treated as an
//! immutable value afterwards. Defaults come from `Configuration::default()`,
//! which builds a fresh value on every call.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseError, ParseWarning};
use crate::version::FormatVersion;

/// Display mode of a header meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeterMode {
    #[default]
    Bar,
    Text,
    Graph,
    Led,
}

impl MeterMode {
    /// Map htop's numeric mode (1..=4). Anything else, including 0, is `Bar`.
    pub fn from_number(n: i64) -> Self {
        match n {
            2 => Self::Text,
            3 => Self::Graph,
            4 => Self::Led,
            _ => Self::Bar,
        }
    }

    pub fn as_number(self) -> i64 {
        match self {
            Self::Bar => 1,
            Self::Text => 2,
            Self::Graph => 3,
            Self::Led => 4,
        }
    }
}

/// A header meter: a type label (`CPU`, `Memory`, ...) and its display mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meter {
    #[serde(rename = "type")]
    pub meter_type: String,
    pub mode: MeterMode,
}

impl Meter {
    pub fn new(meter_type: impl Into<String>, mode: MeterMode) -> Self {
        Self {
            meter_type: meter_type.into(),
            mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `"1"` is ascending; every other value is descending.
    pub fn from_value(value: &str) -> Self {
        if value == "1" {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_value(self) -> &'static str {
        match self {
            Self::Asc => "1",
            Self::Desc => "-1",
        }
    }
}

/// Arrangement of the header meter columns.
///
/// Names htop does not know (yet) are carried verbatim in `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeaderLayout {
    One100,
    #[default]
    Two5050,
    Two3367,
    Two6733,
    Three333433,
    Three252550,
    Three255025,
    Three502525,
    Three402040,
    Four25252525,
    Custom(String),
}

impl HeaderLayout {
    const NAMED: [(&'static str, HeaderLayout); 10] = [
        ("one_100", Self::One100),
        ("two_50_50", Self::Two5050),
        ("two_33_67", Self::Two3367),
        ("two_67_33", Self::Two6733),
        ("three_33_34_33", Self::Three333433),
        ("three_25_25_50", Self::Three252550),
        ("three_25_50_25", Self::Three255025),
        ("three_50_25_25", Self::Three502525),
        ("three_40_20_40", Self::Three402040),
        ("four_25_25_25_25", Self::Four25252525),
    ];

    pub fn from_name(name: &str) -> Self {
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, layout)| layout.clone())
            .unwrap_or_else(|| Self::Custom(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Custom(name) => name,
            known => Self::NAMED
                .iter()
                .find(|(_, layout)| layout == known)
                .map(|(n, _)| *n)
                .unwrap_or_default(),
        }
    }

    /// Number of meter columns the layout shows, if known.
    pub fn column_count(&self) -> Option<usize> {
        match self {
            Self::One100 => Some(1),
            Self::Two5050 | Self::Two3367 | Self::Two6733 => Some(2),
            Self::Three333433
            | Self::Three252550
            | Self::Three255025
            | Self::Three502525
            | Self::Three402040 => Some(3),
            Self::Four25252525 => Some(4),
            Self::Custom(_) => None,
        }
    }
}

impl From<String> for HeaderLayout {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<HeaderLayout> for String {
    fn from(layout: HeaderLayout) -> Self {
        layout.as_str().to_string()
    }
}

impl fmt::Display for HeaderLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named process-list view declared with `screen:<name>=<columns>`.
///
/// `None` means the option never appeared inside the screen block, which is
/// different from it being set to `asc` or `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenDefinition {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_view: Option<bool>,
    /// Other dotted options of this screen (`.tree_sort_key`, ...), raw and in order.
    /// Keys are stored without the leading dot.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_options: Vec<(String, String)>,
}

impl ScreenDefinition {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            ..Self::default()
        }
    }
}

/// Raw `column_meters_N` / `column_meter_modes_N` values for columns that are
/// not promoted to `left_meters`/`right_meters`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawMeterColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modes: Option<String>,
}

/// Raw `key=value` pairs kept verbatim, in first-seen order. Holds both the
/// unrecognized options and the legacy meter keys.
///
/// Behaves like a map: inserting an existing key replaces its value but keeps
/// its position. Uses a `Vec` rather than pulling in an ordered-map crate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawOptions {
    entries: Vec<(String, String)>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (k, v) in iter {
            options.insert(k, v);
        }
        options
    }
}

impl Serialize for RawOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct RawOptionsVisitor;

impl<'de> Visitor<'de> for RawOptionsVisitor {
    type Value = RawOptions;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of option names to raw string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut options = RawOptions::new();
        while let Some((k, v)) = access.next_entry::<String, String>()? {
            options.insert(k, v);
        }
        Ok(options)
    }
}

impl<'de> Deserialize<'de> for RawOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawOptionsVisitor)
    }
}

/// A fully parsed htoprc file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    // Version
    pub htop_version: Option<String>,
    pub config_reader_min_version: Option<i64>,

    // Process list columns (`fields`)
    pub columns: Vec<i64>,

    // Sorting
    pub sort_key: i64,
    pub sort_direction: SortDirection,
    pub tree_sort_key: i64,
    pub tree_sort_direction: SortDirection,

    // Threads
    pub hide_kernel_threads: bool,
    pub hide_userland_threads: bool,
    pub hide_running_in_container: bool,
    pub show_thread_names: bool,
    pub highlight_threads: bool,

    // Display
    pub shadow_other_users: bool,
    pub show_program_path: bool,
    pub highlight_base_name: bool,
    pub highlight_deleted_exe: bool,
    pub shadow_distribution_path_prefix: bool,
    pub highlight_megabytes: bool,
    pub highlight_changes: bool,
    pub highlight_changes_delay_secs: i64,
    pub update_process_names: bool,
    pub enable_mouse: bool,
    pub delay: i64,

    // Color and layout
    pub color_scheme: i64,
    pub header_layout: HeaderLayout,

    // Tree view
    pub tree_view: bool,
    pub tree_view_always_by_pid: bool,
    pub all_branches_collapsed: bool,

    // Command display
    pub find_comm_in_cmdline: bool,
    pub strip_exe_from_cmdline: bool,
    pub show_merged_command: bool,

    // Header
    pub header_margin: bool,
    pub screen_tabs: bool,

    // CPU and meters
    pub detailed_cpu_time: bool,
    pub cpu_count_from_one: bool,
    pub show_cpu_usage: bool,
    pub show_cpu_frequency: bool,
    pub show_cpu_temperature: bool,
    pub degree_fahrenheit: bool,
    pub account_guest_in_cpu_meter: bool,

    // Function bar
    pub hide_function_bar: i64,

    // Composite
    pub left_meters: Vec<Meter>,
    pub right_meters: Vec<Meter>,
    pub extra_meter_columns: BTreeMap<usize, RawMeterColumn>,
    /// Format v2 `left_meters*` / `right_meter_modes*` keys. Never promoted to
    /// `left_meters`/`right_meters`.
    pub legacy_meters: RawOptions,
    pub screens: Vec<ScreenDefinition>,
    pub unknown_options: RawOptions,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            htop_version: None,
            config_reader_min_version: None,
            columns: Vec::new(),
            sort_key: 46,
            sort_direction: SortDirection::Desc,
            tree_sort_key: 0,
            tree_sort_direction: SortDirection::Asc,
            hide_kernel_threads: true,
            hide_userland_threads: false,
            hide_running_in_container: false,
            show_thread_names: false,
            highlight_threads: true,
            shadow_other_users: false,
            show_program_path: true,
            highlight_base_name: false,
            highlight_deleted_exe: true,
            shadow_distribution_path_prefix: false,
            highlight_megabytes: true,
            highlight_changes: false,
            highlight_changes_delay_secs: 5,
            update_process_names: false,
            enable_mouse: true,
            delay: 15,
            color_scheme: 0,
            header_layout: HeaderLayout::default(),
            tree_view: false,
            tree_view_always_by_pid: false,
            all_branches_collapsed: false,
            find_comm_in_cmdline: true,
            strip_exe_from_cmdline: true,
            show_merged_command: false,
            header_margin: true,
            screen_tabs: false,
            detailed_cpu_time: false,
            cpu_count_from_one: false,
            show_cpu_usage: true,
            show_cpu_frequency: false,
            show_cpu_temperature: false,
            degree_fahrenheit: false,
            account_guest_in_cpu_meter: false,
            hide_function_bar: 0,
            left_meters: Vec::new(),
            right_meters: Vec::new(),
            extra_meter_columns: BTreeMap::new(),
            legacy_meters: RawOptions::new(),
            screens: Vec::new(),
            unknown_options: RawOptions::new(),
        }
    }
}

/// Everything `parse` reports about one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub config: Configuration,
    pub warnings: Vec<ParseWarning>,
    pub errors: Vec<ParseError>,
    pub version: FormatVersion,
    pub score: u32,
}
