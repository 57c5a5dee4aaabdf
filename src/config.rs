use chrono::NaiveDate;

/// Published CSV export of the backing sheet. Fixed literal by design: this
/// deployment has no CLI flags, env vars, or config file for it.
pub const SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSutWVZQUCnCrOxgWT7iPR_0imz1-L_KpfRhUwJmMEgK02nbQbLBUfS43hca8sPYMuM2obtlvrYSR-o/pub?gid=0&single=true&output=csv";

/// Apps Script web app that mutates the backing sheet.
pub const UPDATE_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbw0t1PkJlzxMc8_8OLFJCs4PKN_karmorNTaVujWqYPPGIdObxvAw4I6ui_2KyrGGB5/exec";

/// Inclusive calendar window of the weekly schedule grid.
pub fn schedule_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 13).expect("valid schedule start date")
}

pub fn schedule_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 17).expect("valid schedule end date")
}
