//! Date Utilities
//!
//! Todos carry their start date as `DD/MM/YYYY` text, the browser date input
//! speaks ISO `YYYY-MM-DD`.

use chrono::NaiveDate;

pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";
const INPUT_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` from the date input -> `DD/MM/YYYY`. Empty input clears the date.
pub fn input_to_display(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT)
        .ok()
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
}

/// `DD/MM/YYYY` -> `YYYY-MM-DD` for pre-filling the date input
pub fn display_to_input(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_FORMAT)
        .ok()
        .map(|date| date.format(INPUT_FORMAT).to_string())
}
