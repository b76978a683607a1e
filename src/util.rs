use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use pulldown_cmark::escape::escape_html;
use std::fs::File;
use std::path::Path;

pub fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!("Opening {} file `{}`: {}", kind, path.display(), e)),
        Ok(file) => Ok(file),
    }
}

/// Escapes text for embedding in HTML, including attribute values quoted
/// with double quotes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // Writing into a String cannot fail.
    let _ = escape_html(&mut out, s);
    out
}

/// Formats a `YYYY-MM-DD` date for display, e.g. `November 20, 2025`. Dates
/// that don't parse are shown as-is rather than failing the page.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_owned(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-11-20"), "November 20, 2025");
        assert_eq!(format_date("2025-10-15"), "October 15, 2025");
        assert_eq!(format_date("2025-01-01"), "January 1, 2025");
    }

    #[test]
    fn test_format_date_unparseable() {
        assert_eq!(format_date("someday"), "someday");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Q&A <talk>"), "Q&amp;A &lt;talk&gt;");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape("plain"), "plain");
    }
}
