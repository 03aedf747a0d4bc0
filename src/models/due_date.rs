// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;

use super::AddTaskError;

/// Format shown in the date input placeholder and on every task card.
pub const DUE_DATE_FORMAT: &str = "%m/%d/%Y";

// value format of html date inputs
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

// chrono's %Y also takes short and signed years, so each format says where
// its year sits and that part must be exactly four digits
const ACCEPTED_FORMATS: [(&str, fn(&str) -> Option<&str>); 2] =
    [(DUE_DATE_FORMAT, trailing_year), (ISO_DATE_FORMAT, leading_year)];

/// Parses the text of the due date input.
///
/// Accepts `mm/dd/yyyy` and `yyyy-mm-dd`, ignoring surrounding whitespace.
pub fn parse_due_date(text: &str) -> Result<NaiveDate, AddTaskError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(AddTaskError::MissingDueDate);
    }

    ACCEPTED_FORMATS
        .iter()
        .filter(|(_, year)| year(text).is_some_and(is_four_digit_year))
        .find_map(|(format, _)| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| AddTaskError::InvalidDueDate(text.into()))
}

fn trailing_year(text: &str) -> Option<&str> {
    text.rsplit('/').next()
}

fn leading_year(text: &str) -> Option<&str> {
    text.split('-').next()
}

fn is_four_digit_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|byte| byte.is_ascii_digit())
}

pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_us_format() {
        assert_eq!(parse_due_date("05/30/2023"), Ok(date(2023, 5, 30)));
        assert_eq!(parse_due_date("  12/01/2024 "), Ok(date(2024, 12, 1)));
    }

    #[test]
    fn test_parse_iso_format() {
        assert_eq!(parse_due_date("2023-05-30"), Ok(date(2023, 5, 30)));
    }

    #[test]
    fn test_parse_missing() {
        assert_eq!(parse_due_date(""), Err(AddTaskError::MissingDueDate));
        assert_eq!(parse_due_date("   "), Err(AddTaskError::MissingDueDate));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            parse_due_date("tomorrow"),
            Err(AddTaskError::InvalidDueDate("tomorrow".into()))
        );
        assert_eq!(
            parse_due_date("02/30/2023"),
            Err(AddTaskError::InvalidDueDate("02/30/2023".into()))
        );
        assert_eq!(
            parse_due_date("30/05/2023"),
            Err(AddTaskError::InvalidDueDate("30/05/2023".into()))
        );
    }

    #[test]
    fn test_parse_requires_four_digit_year() {
        assert_eq!(
            parse_due_date("05/30/23"),
            Err(AddTaskError::InvalidDueDate("05/30/23".into()))
        );
        assert_eq!(
            parse_due_date("05/30/+12345"),
            Err(AddTaskError::InvalidDueDate("05/30/+12345".into()))
        );
        assert_eq!(
            parse_due_date("23-05-30"),
            Err(AddTaskError::InvalidDueDate("23-05-30".into()))
        );
        assert_eq!(
            parse_due_date("-2023-05-30"),
            Err(AddTaskError::InvalidDueDate("-2023-05-30".into()))
        );
        assert_eq!(parse_due_date("05/30/0999"), Ok(date(999, 5, 30)));
    }

    #[test]
    fn test_format() {
        assert_eq!(format_due_date(date(2023, 5, 30)), "05/30/2023");
        assert_eq!(format_due_date(date(2024, 1, 2)), "01/02/2024");
    }
}
