//! htoprc parser: scan, classify and apply every line, then assemble meters,
//! detect the format version and score the result.
//!
//! # Screen context
//!
//! Dot-prefixed lines (`.sort_key=...`) belong to the most recently declared
//! `screen:` block. The scan carries an explicit [`ScreenContext`]:
//!
//! - `NoScreen` (initial): scoped lines are dropped, no warning
//! - `InScreen(i)`: scoped lines update `config.screens[i]`
//!
//! Every `screen:` line opens a new screen, even while another is open.
//! Screens never nest.

use tracing::{debug, trace};

use crate::classifier::{classify, Classification, OptionKind};
use crate::coerce;
use crate::error::ParseWarning;
use crate::meters::MeterCollector;
use crate::scanner::{scan, Entry};
use crate::scorer::score;
use crate::types::{Configuration, ParseResult, ScreenDefinition, SortDirection};
use crate::version::FormatVersion;

/// Which screen, if any, dotted options currently attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenContext {
    #[default]
    NoScreen,
    /// Index into `Configuration::screens`.
    InScreen(usize),
}

/// Parse htoprc text. Never fails: unknown keys are preserved and reported
/// as warnings, malformed values are normalized.
///
/// ```
/// use htoprc_core::{parse, FormatVersion};
///
/// let result = parse("config_reader_min_version=3\ncolor_scheme=5\nfoo=bar");
/// assert_eq!(result.config.color_scheme, 5);
/// assert_eq!(result.version, FormatVersion::V3);
/// assert_eq!(result.config.unknown_options.get("foo"), Some("bar"));
/// assert_eq!(result.warnings.len(), 1);
/// ```
pub fn parse(text: &str) -> ParseResult {
    let mut parser = Parser::default();
    for entry in scan(text) {
        parser.apply(entry);
    }
    parser.finish()
}

#[derive(Default)]
struct Parser {
    config: Configuration,
    warnings: Vec<ParseWarning>,
    meters: MeterCollector,
    screen: ScreenContext,
}

impl Parser {
    fn apply(&mut self, entry: Entry<'_>) {
        let Entry { line, key, value } = entry;
        match classify(key) {
            Classification::Known(kind) => self.apply_known(line, key, kind, value),
            Classification::Unknown => {
                debug!(line, key, "unknown htoprc option preserved");
                self.config.unknown_options.insert(key, value);
                self.warnings.push(ParseWarning::unknown_option(line, key));
            }
        }
    }

    fn apply_known(&mut self, line: usize, key: &str, kind: OptionKind<'_>, value: &str) {
        match kind {
            OptionKind::Scalar(scalar) => self.config.apply_scalar(scalar, value),
            OptionKind::ScreenDeclaration(name) => self.open_screen(line, name, value),
            OptionKind::ScreenScoped(option) => self.apply_scoped(line, option, value),
            OptionKind::MeterNames(column) => self.meters.names(column, value),
            OptionKind::MeterModes(column) => self.meters.modes(column, value),
            OptionKind::LegacyMeter => {
                trace!(line, key, "legacy meter option kept raw");
                self.config.legacy_meters.insert(key, value);
            }
        }
    }

    fn open_screen(&mut self, line: usize, name: &str, value: &str) {
        trace!(line, name, "screen declared");
        self.config
            .screens
            .push(ScreenDefinition::new(name, coerce::name_list(value)));
        self.screen = ScreenContext::InScreen(self.config.screens.len() - 1);
    }

    fn apply_scoped(&mut self, line: usize, option: &str, value: &str) {
        let screen = match self.screen {
            ScreenContext::InScreen(index) => &mut self.config.screens[index],
            ScreenContext::NoScreen => {
                debug!(line, option, "scoped option before any screen, dropped");
                return;
            }
        };
        match option {
            "sort_key" => screen.sort_key = Some(value.to_string()),
            "sort_direction" => screen.sort_direction = Some(SortDirection::from_value(value)),
            "tree_view" => screen.tree_view = Some(coerce::flag(value)),
            other => match screen.extra_options.iter_mut().find(|(k, _)| k == other) {
                Some((_, existing)) => *existing = value.to_string(),
                None => screen
                    .extra_options
                    .push((other.to_string(), value.to_string())),
            },
        }
    }

    fn finish(self) -> ParseResult {
        let Parser {
            mut config,
            warnings,
            meters,
            ..
        } = self;
        meters.assemble_into(&mut config);
        let version = FormatVersion::detect(config.config_reader_min_version);
        let score = score(&config);
        debug!(
            warnings = warnings.len(),
            ?version,
            score,
            screens = config.screens.len(),
            "htoprc parsed"
        );
        ParseResult {
            config,
            warnings,
            errors: Vec::new(),
            version,
            score,
        }
    }
}
