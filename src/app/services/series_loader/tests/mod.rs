//! Test utilities for series loader testing

use chrono::{NaiveDate, NaiveDateTime};

// Test modules
mod column_mapping_tests;
mod record_parser_tests;

/// A small well-formed export in the default column layout
pub fn sample_export() -> String {
    "Data/Hora;AVRMS;AIRMS;AFP\n\
     01/01/2024 08:00:00;380.1;5.2;0.92\n\
     01/01/2024 08:01:00;379.8;5.1;0.91\n\
     01/01/2024 08:02:00;381.0;0.4;0.20\n"
        .to_string()
}

pub fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}
