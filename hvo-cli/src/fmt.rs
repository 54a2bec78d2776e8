use std::{
    borrow::Cow,
    fmt::{Debug, Display, Formatter},
};

pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// `YYYY-MM-DD` → `DD.MM.YYYY`.
///
/// Missing input renders as a dash, anything that is not three dash-separated numbers as is.
#[must_use]
pub fn format_date(iso_date: Option<&str>) -> Cow<'_, str> {
    let Some(iso_date) = iso_date.filter(|iso_date| !iso_date.is_empty()) else {
        return Cow::Borrowed("–");
    };
    let parts: Vec<&str> = iso_date.split('-').collect();
    match parts.as_slice() {
        [year, month, day] if [year, month, day].iter().all(|part| is_number(part)) => {
            Cow::Owned(format!("{day}.{month}.{year}"))
        }
        _ => Cow::Borrowed(iso_date),
    }
}

fn is_number(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-02-24")), "24.02.2025");
        assert_eq!(format_date(Some("")), "–");
        assert_eq!(format_date(None), "–");
        assert_eq!(format_date(Some("not-a-date")), "not-a-date");
        assert_eq!(format_date(Some("notadate")), "notadate");
        assert_eq!(format_date(Some("2025-02")), "2025-02");
        assert_eq!(format_date(Some("2025--24")), "2025--24");
    }

    #[test]
    fn test_formatted_percentage() {
        assert_eq!(FormattedPercentage(0.924_528).to_string(), "92.5%");
    }
}
