//! Edits a user makes to their record before it is saved.

use crate::{Symbol, TimePeriod, UserRecord};

pub fn set_time_period(record: &mut UserRecord, period: TimePeriod) {
    record.timeperiod = period;
}

/// Appends each symbol not already tracked, keeping existing order.
///
/// Returns how many were added.
pub fn track_symbols(record: &mut UserRecord, symbols: &[Symbol]) -> usize {
    let mut added = 0;
    for symbol in symbols {
        if record.symbols.iter().any(|stored| symbol.matches(stored)) {
            continue;
        }
        record.symbols.push(symbol.as_str().to_owned());
        added += 1;
    }
    added
}

/// Removes every stored entry matching one of `symbols`.
///
/// Returns how many entries were removed.
pub fn untrack_symbols(record: &mut UserRecord, symbols: &[Symbol]) -> usize {
    let before = record.symbols.len();
    record
        .symbols
        .retain(|stored| !symbols.iter().any(|symbol| symbol.matches(stored)));
    before - record.symbols.len()
}
