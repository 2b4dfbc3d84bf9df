//! Option classifier: decides what a key means, from the key string alone.
//!
//! Resolution order, most specific first:
//!
//! 1. exact static scalar name (`delay`, `color_scheme`, ...)
//! 2. `screen:<name>` screen declaration
//! 3. `.<option>` screen-scoped option
//! 4. `column_meters_<N>` / `column_meter_modes_<N>` for `N` in `0..=3`
//! 5. legacy `left_meters*` / `right_meters*` (and their `_meter_modes`)
//!
//! Whether a scoped option actually applies depends on scan state (is a
//! screen open?), which is the parser's business, not the classifier's.

/// Highest `column_meters_<N>` index accepted (four-column layouts).
pub const MAX_METER_COLUMN: usize = 3;

/// Every recognized top-level scalar option.
///
/// `ScalarKey::ALL` is in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKey {
    HtopVersion,
    ConfigReaderMinVersion,
    Fields,
    SortKey,
    SortDirection,
    TreeSortKey,
    TreeSortDirection,
    HideKernelThreads,
    HideUserlandThreads,
    HideRunningInContainer,
    ShowThreadNames,
    HighlightThreads,
    ShadowOtherUsers,
    ShowProgramPath,
    HighlightBaseName,
    HighlightDeletedExe,
    ShadowDistributionPathPrefix,
    HighlightMegabytes,
    HighlightChanges,
    HighlightChangesDelaySecs,
    UpdateProcessNames,
    EnableMouse,
    Delay,
    ColorScheme,
    HeaderLayout,
    TreeView,
    TreeViewAlwaysByPid,
    AllBranchesCollapsed,
    FindCommInCmdline,
    StripExeFromCmdline,
    ShowMergedCommand,
    HeaderMargin,
    ScreenTabs,
    DetailedCpuTime,
    CpuCountFromOne,
    ShowCpuUsage,
    ShowCpuFrequency,
    ShowCpuTemperature,
    DegreeFahrenheit,
    AccountGuestInCpuMeter,
    HideFunctionBar,
}

impl ScalarKey {
    pub const ALL: [ScalarKey; 41] = [
        Self::HtopVersion,
        Self::ConfigReaderMinVersion,
        Self::Fields,
        Self::SortKey,
        Self::SortDirection,
        Self::TreeSortKey,
        Self::TreeSortDirection,
        Self::HideKernelThreads,
        Self::HideUserlandThreads,
        Self::HideRunningInContainer,
        Self::ShowThreadNames,
        Self::HighlightThreads,
        Self::ShadowOtherUsers,
        Self::ShowProgramPath,
        Self::HighlightBaseName,
        Self::HighlightDeletedExe,
        Self::ShadowDistributionPathPrefix,
        Self::HighlightMegabytes,
        Self::HighlightChanges,
        Self::HighlightChangesDelaySecs,
        Self::UpdateProcessNames,
        Self::EnableMouse,
        Self::Delay,
        Self::ColorScheme,
        Self::HeaderLayout,
        Self::TreeView,
        Self::TreeViewAlwaysByPid,
        Self::AllBranchesCollapsed,
        Self::FindCommInCmdline,
        Self::StripExeFromCmdline,
        Self::ShowMergedCommand,
        Self::HeaderMargin,
        Self::ScreenTabs,
        Self::DetailedCpuTime,
        Self::CpuCountFromOne,
        Self::ShowCpuUsage,
        Self::ShowCpuFrequency,
        Self::ShowCpuTemperature,
        Self::DegreeFahrenheit,
        Self::AccountGuestInCpuMeter,
        Self::HideFunctionBar,
    ];

    /// The option name as written in the file.
    pub fn name(self) -> &'static str {
        match self {
            Self::HtopVersion => "htop_version",
            Self::ConfigReaderMinVersion => "config_reader_min_version",
            Self::Fields => "fields",
            Self::SortKey => "sort_key",
            Self::SortDirection => "sort_direction",
            Self::TreeSortKey => "tree_sort_key",
            Self::TreeSortDirection => "tree_sort_direction",
            Self::HideKernelThreads => "hide_kernel_threads",
            Self::HideUserlandThreads => "hide_userland_threads",
            Self::HideRunningInContainer => "hide_running_in_container",
            Self::ShowThreadNames => "show_thread_names",
            Self::HighlightThreads => "highlight_threads",
            Self::ShadowOtherUsers => "shadow_other_users",
            Self::ShowProgramPath => "show_program_path",
            Self::HighlightBaseName => "highlight_base_name",
            Self::HighlightDeletedExe => "highlight_deleted_exe",
            Self::ShadowDistributionPathPrefix => "shadow_distribution_path_prefix",
            Self::HighlightMegabytes => "highlight_megabytes",
            Self::HighlightChanges => "highlight_changes",
            Self::HighlightChangesDelaySecs => "highlight_changes_delay_secs",
            Self::UpdateProcessNames => "update_process_names",
            Self::EnableMouse => "enable_mouse",
            Self::Delay => "delay",
            Self::ColorScheme => "color_scheme",
            Self::HeaderLayout => "header_layout",
            Self::TreeView => "tree_view",
            Self::TreeViewAlwaysByPid => "tree_view_always_by_pid",
            Self::AllBranchesCollapsed => "all_branches_collapsed",
            Self::FindCommInCmdline => "find_comm_in_cmdline",
            Self::StripExeFromCmdline => "strip_exe_from_cmdline",
            Self::ShowMergedCommand => "show_merged_command",
            Self::HeaderMargin => "header_margin",
            Self::ScreenTabs => "screen_tabs",
            Self::DetailedCpuTime => "detailed_cpu_time",
            Self::CpuCountFromOne => "cpu_count_from_one",
            Self::ShowCpuUsage => "show_cpu_usage",
            Self::ShowCpuFrequency => "show_cpu_frequency",
            Self::ShowCpuTemperature => "show_cpu_temperature",
            Self::DegreeFahrenheit => "degree_fahrenheit",
            Self::AccountGuestInCpuMeter => "account_guest_in_cpu_meter",
            Self::HideFunctionBar => "hide_function_bar",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == key)
    }
}

/// Format v2 meter keys. Any key starting with one of these is known.
const LEGACY_METER_PREFIXES: [&str; 4] = [
    "left_meters",
    "left_meter_modes",
    "right_meters",
    "right_meter_modes",
];

/// What a recognized key is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind<'a> {
    Scalar(ScalarKey),
    /// `screen:<name>`; carries the name after the prefix.
    ScreenDeclaration(&'a str),
    /// `.<option>`; carries the option without the dot.
    ScreenScoped(&'a str),
    MeterNames(usize),
    MeterModes(usize),
    /// `left_meters*`, `right_meter_modes*`, ...; kept raw, never interpreted.
    LegacyMeter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    Known(OptionKind<'a>),
    Unknown,
}

impl Classification<'_> {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

/// Classify a key. Pure: the same key always yields the same answer.
pub fn classify(key: &str) -> Classification<'_> {
    if let Some(scalar) = ScalarKey::from_key(key) {
        return Classification::Known(OptionKind::Scalar(scalar));
    }
    if let Some(name) = key.strip_prefix("screen:") {
        return Classification::Known(OptionKind::ScreenDeclaration(name));
    }
    if let Some(option) = key.strip_prefix('.') {
        return Classification::Known(OptionKind::ScreenScoped(option));
    }
    if let Some(column) = key.strip_prefix("column_meter_modes_").and_then(meter_column) {
        return Classification::Known(OptionKind::MeterModes(column));
    }
    if let Some(column) = key.strip_prefix("column_meters_").and_then(meter_column) {
        return Classification::Known(OptionKind::MeterNames(column));
    }
    if LEGACY_METER_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
        return Classification::Known(OptionKind::LegacyMeter);
    }
    Classification::Unknown
}

/// Parse the `<N>` suffix of a meter column key; only plain digits in range.
fn meter_column(suffix: &str) -> Option<usize> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix
        .parse::<usize>()
        .ok()
        .filter(|&n| n <= MAX_METER_COLUMN)
}
