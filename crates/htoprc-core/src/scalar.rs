//! Typed access to the scalar fields of a `Configuration` by `ScalarKey`.
//!
//! The parser writes through `ScalarSlot` and the serializer reads through
//! `ScalarValue`, so neither needs its own per-option string matching.

use crate::classifier::ScalarKey;
use crate::coerce;
use crate::types::{Configuration, HeaderLayout, SortDirection};

/// Mutable view of one scalar field.
pub(crate) enum ScalarSlot<'a> {
    Flag(&'a mut bool),
    Integer(&'a mut i64),
    OptionalInteger(&'a mut Option<i64>),
    OptionalText(&'a mut Option<String>),
    IntegerList(&'a mut Vec<i64>),
    Direction(&'a mut SortDirection),
    Layout(&'a mut HeaderLayout),
}

/// Read-only view of one scalar field.
#[derive(Debug, PartialEq)]
pub(crate) enum ScalarValue<'a> {
    Flag(bool),
    Integer(i64),
    OptionalInteger(Option<i64>),
    OptionalText(Option<&'a str>),
    IntegerList(&'a [i64]),
    Direction(SortDirection),
    Layout(&'a HeaderLayout),
}

impl ScalarValue<'_> {
    /// Render as it appears after `key=`. `None` when the field is absent
    /// and the line should not be written at all.
    pub(crate) fn render(&self) -> Option<String> {
        Some(match self {
            Self::Flag(b) => (if *b { "1" } else { "0" }).to_string(),
            Self::Integer(n) => n.to_string(),
            Self::OptionalInteger(n) => (*n)?.to_string(),
            Self::OptionalText(s) => (*s)?.to_string(),
            Self::IntegerList(list) => list
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Direction(d) => d.as_value().to_string(),
            Self::Layout(layout) => layout.as_str().to_string(),
        })
    }
}

impl Configuration {
    /// Coerce `raw` and store it in the field behind `key`.
    ///
    /// An integer that does not coerce resets the field to its default (or
    /// to absent, for optional integers).
    pub(crate) fn apply_scalar(&mut self, key: ScalarKey, raw: &str) {
        match self.slot_mut(key) {
            ScalarSlot::Flag(slot) => *slot = coerce::flag(raw),
            ScalarSlot::Integer(slot) => match coerce::integer(raw) {
                Some(n) => *slot = n,
                None => {
                    if let ScalarValue::Integer(n) = Configuration::default().scalar(key) {
                        *slot = n;
                    }
                }
            },
            ScalarSlot::OptionalInteger(slot) => *slot = coerce::integer(raw),
            ScalarSlot::OptionalText(slot) => *slot = Some(raw.to_string()),
            ScalarSlot::IntegerList(slot) => *slot = coerce::integer_list(raw),
            ScalarSlot::Direction(slot) => *slot = SortDirection::from_value(raw),
            ScalarSlot::Layout(slot) => *slot = HeaderLayout::from_name(raw),
        }
    }

    pub(crate) fn scalar(&self, key: ScalarKey) -> ScalarValue<'_> {
        use ScalarValue as V;
        match key {
            ScalarKey::HtopVersion => V::OptionalText(self.htop_version.as_deref()),
            ScalarKey::ConfigReaderMinVersion => V::OptionalInteger(self.config_reader_min_version),
            ScalarKey::Fields => V::IntegerList(&self.columns),
            ScalarKey::SortKey => V::Integer(self.sort_key),
            ScalarKey::SortDirection => V::Direction(self.sort_direction),
            ScalarKey::TreeSortKey => V::Integer(self.tree_sort_key),
            ScalarKey::TreeSortDirection => V::Direction(self.tree_sort_direction),
            ScalarKey::HideKernelThreads => V::Flag(self.hide_kernel_threads),
            ScalarKey::HideUserlandThreads => V::Flag(self.hide_userland_threads),
            ScalarKey::HideRunningInContainer => V::Flag(self.hide_running_in_container),
            ScalarKey::ShowThreadNames => V::Flag(self.show_thread_names),
            ScalarKey::HighlightThreads => V::Flag(self.highlight_threads),
            ScalarKey::ShadowOtherUsers => V::Flag(self.shadow_other_users),
            ScalarKey::ShowProgramPath => V::Flag(self.show_program_path),
            ScalarKey::HighlightBaseName => V::Flag(self.highlight_base_name),
            ScalarKey::HighlightDeletedExe => V::Flag(self.highlight_deleted_exe),
            ScalarKey::ShadowDistributionPathPrefix => {
                V::Flag(self.shadow_distribution_path_prefix)
            }
            ScalarKey::HighlightMegabytes => V::Flag(self.highlight_megabytes),
            ScalarKey::HighlightChanges => V::Flag(self.highlight_changes),
            ScalarKey::HighlightChangesDelaySecs => V::Integer(self.highlight_changes_delay_secs),
            ScalarKey::UpdateProcessNames => V::Flag(self.update_process_names),
            ScalarKey::EnableMouse => V::Flag(self.enable_mouse),
            ScalarKey::Delay => V::Integer(self.delay),
            ScalarKey::ColorScheme => V::Integer(self.color_scheme),
            ScalarKey::HeaderLayout => V::Layout(&self.header_layout),
            ScalarKey::TreeView => V::Flag(self.tree_view),
            ScalarKey::TreeViewAlwaysByPid => V::Flag(self.tree_view_always_by_pid),
            ScalarKey::AllBranchesCollapsed => V::Flag(self.all_branches_collapsed),
            ScalarKey::FindCommInCmdline => V::Flag(self.find_comm_in_cmdline),
            ScalarKey::StripExeFromCmdline => V::Flag(self.strip_exe_from_cmdline),
            ScalarKey::ShowMergedCommand => V::Flag(self.show_merged_command),
            ScalarKey::HeaderMargin => V::Flag(self.header_margin),
            ScalarKey::ScreenTabs => V::Flag(self.screen_tabs),
            ScalarKey::DetailedCpuTime => V::Flag(self.detailed_cpu_time),
            ScalarKey::CpuCountFromOne => V::Flag(self.cpu_count_from_one),
            ScalarKey::ShowCpuUsage => V::Flag(self.show_cpu_usage),
            ScalarKey::ShowCpuFrequency => V::Flag(self.show_cpu_frequency),
            ScalarKey::ShowCpuTemperature => V::Flag(self.show_cpu_temperature),
            ScalarKey::DegreeFahrenheit => V::Flag(self.degree_fahrenheit),
            ScalarKey::AccountGuestInCpuMeter => V::Flag(self.account_guest_in_cpu_meter),
            ScalarKey::HideFunctionBar => V::Integer(self.hide_function_bar),
        }
    }

    fn slot_mut(&mut self, key: ScalarKey) -> ScalarSlot<'_> {
        use ScalarSlot as S;
        match key {
            ScalarKey::HtopVersion => S::OptionalText(&mut self.htop_version),
            ScalarKey::ConfigReaderMinVersion => S::OptionalInteger(&mut self.config_reader_min_version),
            ScalarKey::Fields => S::IntegerList(&mut self.columns),
            ScalarKey::SortKey => S::Integer(&mut self.sort_key),
            ScalarKey::SortDirection => S::Direction(&mut self.sort_direction),
            ScalarKey::TreeSortKey => S::Integer(&mut self.tree_sort_key),
            ScalarKey::TreeSortDirection => S::Direction(&mut self.tree_sort_direction),
            ScalarKey::HideKernelThreads => S::Flag(&mut self.hide_kernel_threads),
            ScalarKey::HideUserlandThreads => S::Flag(&mut self.hide_userland_threads),
            ScalarKey::HideRunningInContainer => S::Flag(&mut self.hide_running_in_container),
            ScalarKey::ShowThreadNames => S::Flag(&mut self.show_thread_names),
            ScalarKey::HighlightThreads => S::Flag(&mut self.highlight_threads),
            ScalarKey::ShadowOtherUsers => S::Flag(&mut self.shadow_other_users),
            ScalarKey::ShowProgramPath => S::Flag(&mut self.show_program_path),
            ScalarKey::HighlightBaseName => S::Flag(&mut self.highlight_base_name),
            ScalarKey::HighlightDeletedExe => S::Flag(&mut self.highlight_deleted_exe),
            ScalarKey::ShadowDistributionPathPrefix => {
                S::Flag(&mut self.shadow_distribution_path_prefix)
            }
            ScalarKey::HighlightMegabytes => S::Flag(&mut self.highlight_megabytes),
            ScalarKey::HighlightChanges => S::Flag(&mut self.highlight_changes),
            ScalarKey::HighlightChangesDelaySecs => {
                S::Integer(&mut self.highlight_changes_delay_secs)
            }
            ScalarKey::UpdateProcessNames => S::Flag(&mut self.update_process_names),
            ScalarKey::EnableMouse => S::Flag(&mut self.enable_mouse),
            ScalarKey::Delay => S::Integer(&mut self.delay),
            ScalarKey::ColorScheme => S::Integer(&mut self.color_scheme),
            ScalarKey::HeaderLayout => S::Layout(&mut self.header_layout),
            ScalarKey::TreeView => S::Flag(&mut self.tree_view),
            ScalarKey::TreeViewAlwaysByPid => S::Flag(&mut self.tree_view_always_by_pid),
            ScalarKey::AllBranchesCollapsed => S::Flag(&mut self.all_branches_collapsed),
            ScalarKey::FindCommInCmdline => S::Flag(&mut self.find_comm_in_cmdline),
            ScalarKey::StripExeFromCmdline => S::Flag(&mut self.strip_exe_from_cmdline),
            ScalarKey::ShowMergedCommand => S::Flag(&mut self.show_merged_command),
            ScalarKey::HeaderMargin => S::Flag(&mut self.header_margin),
            ScalarKey::ScreenTabs => S::Flag(&mut self.screen_tabs),
            ScalarKey::DetailedCpuTime => S::Flag(&mut self.detailed_cpu_time),
            ScalarKey::CpuCountFromOne => S::Flag(&mut self.cpu_count_from_one),
            ScalarKey::ShowCpuUsage => S::Flag(&mut self.show_cpu_usage),
            ScalarKey::ShowCpuFrequency => S::Flag(&mut self.show_cpu_frequency),
            ScalarKey::ShowCpuTemperature => S::Flag(&mut self.show_cpu_temperature),
            ScalarKey::DegreeFahrenheit => S::Flag(&mut self.degree_fahrenheit),
            ScalarKey::AccountGuestInCpuMeter => S::Flag(&mut self.account_guest_in_cpu_meter),
            ScalarKey::HideFunctionBar => S::Integer(&mut self.hide_function_bar),
        }
    }
}
