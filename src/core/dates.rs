use chrono::NaiveDate;

/// Storage and input format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
}

/// Render a date the way it is stored
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
