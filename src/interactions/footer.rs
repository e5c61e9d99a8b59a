use chrono::{DateTime, Datelike, Local, TimeZone};
use web_sys::Document;

use crate::error::InitError;

pub fn year_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.year().to_string()
}

/// Fills `#currentYear` from the browser clock.
pub fn init(document: &Document) -> Result<(), InitError> {
    let el = document
        .get_element_by_id("currentYear")
        .ok_or(InitError::MissingElement("#currentYear"))?;
    el.set_text_content(Some(&year_text(&Local::now())));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn renders_four_digit_year() {
        let now = Utc.with_ymd_and_hms(2031, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(year_text(&now), "2031");
    }
}
