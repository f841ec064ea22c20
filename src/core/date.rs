//! Newspaper dateline in Brazilian Portuguese
//!
//! Produces the long form used by `pt-BR` locales, e.g.
//! `segunda-feira, 19 de outubro de 2026`.

use chrono::{Datelike, Weekday};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Weekday name as written in pt-BR
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

/// Month name for a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// Long-form pt-BR date: weekday, day, month and year
pub fn format_long_pt_br(date: impl Datelike) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()).unwrap_or_default(),
        date.year()
    )
}

/// Today's dateline in the local timezone
pub fn today_long_pt_br() -> String {
    format_long_pt_br(chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_long_pt_br() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_long_pt_br(date), "segunda-feira, 19 de outubro de 2026");
    }

    #[test]
    fn test_single_digit_day_is_not_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(format_long_pt_br(date), "sábado, 2 de março de 2024");
    }

    #[test]
    fn test_every_weekday_name() {
        // 2024-08-26 is a Monday
        let names: Vec<String> = (26..=31)
            .chain(std::iter::once(1))
            .map(|day| {
                let month = if day == 1 { 9 } else { 8 };
                let date = NaiveDate::from_ymd_opt(2024, month, day).unwrap();
                weekday_name(date.weekday()).to_string()
            })
            .collect();
        assert_eq!(
            names,
            vec![
                "segunda-feira",
                "terça-feira",
                "quarta-feira",
                "quinta-feira",
                "sexta-feira",
                "sábado",
                "domingo"
            ]
        );
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("janeiro"));
        assert_eq!(month_name(3), Some("março"));
        assert_eq!(month_name(12), Some("dezembro"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_today_is_not_empty() {
        let today = today_long_pt_br();
        assert!(today.contains(" de "));
    }
}
