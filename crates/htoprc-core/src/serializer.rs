//! htoprc serializer: `Configuration` back into `key=value` text.
//!
//! Output order is fixed so that diffs between serialized files stay small:
//!
//! 1. version fields (`htop_version`, `config_reader_min_version`)
//! 2. scalar options in `ScalarKey::ALL` order (columns, sorting, threads,
//!    display, color/layout, tree view, command display, header, CPU, function bar)
//! 3. `column_meters_0/1` + `column_meter_modes_0/1`, then raw columns 2 and 3,
//!    then legacy `left_meters*` / `right_meters*` keys verbatim
//! 4. `screen:` blocks with their present dotted options
//! 5. preserved unknown options
//!
//! Lines are `\n`-terminated. An empty document serializes to `""`.

use serde::{Deserialize, Serialize};

use crate::classifier::ScalarKey;
use crate::types::{Configuration, Meter, RawMeterColumn, ScreenDefinition};

/// Knobs for [`serialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SerializeOptions {
    /// Emit `htop_version` / `config_reader_min_version` when present.
    pub include_version: bool,
    /// Skip scalars equal to their default and empty meter blocks.
    pub only_non_defaults: bool,
    /// Append preserved unknown options.
    pub include_unknown: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            include_version: true,
            only_non_defaults: false,
            include_unknown: true,
        }
    }
}

/// Serialize a configuration to htoprc text.
///
/// ```
/// use htoprc_core::{parse, serialize, SerializeOptions};
///
/// let config = parse("color_scheme=5\ntree_view=1").config;
/// let options = SerializeOptions { only_non_defaults: true, ..Default::default() };
/// assert_eq!(serialize(&config, &options), "color_scheme=5\ntree_view=1\n");
/// ```
pub fn serialize(config: &Configuration, options: &SerializeOptions) -> String {
    let mut out = String::new();
    write_scalars(config, options, &mut out);
    write_meters(config, options, &mut out);
    for screen in &config.screens {
        write_screen(screen, &mut out);
    }
    if options.include_unknown {
        for (key, value) in config.unknown_options.iter() {
            push_line(&mut out, key, value);
        }
    }
    out
}

fn write_scalars(config: &Configuration, options: &SerializeOptions, out: &mut String) {
    let defaults = Configuration::default();
    for key in ScalarKey::ALL {
        let is_version = matches!(key, ScalarKey::HtopVersion | ScalarKey::ConfigReaderMinVersion);
        if is_version && !options.include_version {
            continue;
        }
        let value = config.scalar(key);
        if options.only_non_defaults && !is_version && value == defaults.scalar(key) {
            continue;
        }
        if let Some(rendered) = value.render() {
            push_line(out, key.name(), &rendered);
        }
    }
}

fn write_meters(config: &Configuration, options: &SerializeOptions, out: &mut String) {
    for (column, meters) in [(0, &config.left_meters), (1, &config.right_meters)] {
        if options.only_non_defaults && meters.is_empty() {
            continue;
        }
        write_meter_column(column, meters, out);
    }
    for (column, raw) in &config.extra_meter_columns {
        write_raw_meter_column(*column, raw, out);
    }
    for (key, value) in config.legacy_meters.iter() {
        push_line(out, key, value);
    }
}

fn write_meter_column(column: usize, meters: &[Meter], out: &mut String) {
    let names: Vec<&str> = meters.iter().map(|m| m.meter_type.as_str()).collect();
    let modes: Vec<String> = meters.iter().map(|m| m.mode.as_number().to_string()).collect();
    push_line(out, &format!("column_meters_{column}"), &names.join(" "));
    push_line(out, &format!("column_meter_modes_{column}"), &modes.join(" "));
}

fn write_raw_meter_column(column: usize, raw: &RawMeterColumn, out: &mut String) {
    if let Some(meters) = &raw.meters {
        push_line(out, &format!("column_meters_{column}"), meters);
    }
    if let Some(modes) = &raw.modes {
        push_line(out, &format!("column_meter_modes_{column}"), modes);
    }
}

/// `screen:<name>=<cols>`, then `.sort_key`, `.sort_direction`, `.tree_view`
/// for fields that are present, then any other dotted options.
fn write_screen(screen: &ScreenDefinition, out: &mut String) {
    push_line(out, &format!("screen:{}", screen.name), &screen.columns.join(" "));
    if let Some(sort_key) = &screen.sort_key {
        push_line(out, ".sort_key", sort_key);
    }
    if let Some(direction) = screen.sort_direction {
        push_line(out, ".sort_direction", direction.as_value());
    }
    if let Some(tree_view) = screen.tree_view {
        push_line(out, ".tree_view", if tree_view { "1" } else { "0" });
    }
    for (key, value) in &screen.extra_options {
        push_line(out, &format!(".{key}"), value);
    }
}

fn push_line(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push('=');
    out.push_str(value);
    out.push('\n');
}
