//! Meter assembler: turns collected `column_meters_N` / `column_meter_modes_N`
//! values into `Meter` sequences once the whole file has been scanned.

use std::collections::BTreeMap;

use crate::coerce;
use crate::types::{Configuration, Meter, MeterMode, RawMeterColumn};

/// Raw `column_meters_N` / `column_meter_modes_N` values seen during the scan,
/// last occurrence wins.
#[derive(Debug, Default)]
pub(crate) struct MeterCollector {
    columns: BTreeMap<usize, RawMeterColumn>,
}

impl MeterCollector {
    pub(crate) fn names(&mut self, column: usize, value: &str) {
        self.columns.entry(column).or_default().meters = Some(value.to_string());
    }

    pub(crate) fn modes(&mut self, column: usize, value: &str) {
        self.columns.entry(column).or_default().modes = Some(value.to_string());
    }

    /// Fill `left_meters` (column 0), `right_meters` (column 1) and
    /// `extra_meter_columns` (whatever columns remain).
    pub(crate) fn assemble_into(mut self, config: &mut Configuration) {
        let left = self.columns.remove(&0).unwrap_or_default();
        let right = self.columns.remove(&1).unwrap_or_default();
        config.left_meters = assemble(&left);
        config.right_meters = assemble(&right);
        config.extra_meter_columns = self.columns;
    }
}

/// Zip meter names with mode numbers. The name list decides the length:
/// missing modes become `Bar`, surplus modes are ignored.
pub fn assemble(raw: &RawMeterColumn) -> Vec<Meter> {
    let names = raw.meters.as_deref().map(coerce::name_list).unwrap_or_default();
    let modes = raw.modes.as_deref().map(coerce::integer_list).unwrap_or_default();
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let mode = modes
                .get(i)
                .copied()
                .map(MeterMode::from_number)
                .unwrap_or_default();
            Meter::new(name, mode)
        })
        .collect()
}
