use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn weekday_str(d: NaiveDate) -> &'static str {
    match d.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}

pub fn month_name(mm: &str) -> &'static str {
    match mm {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "Unknown",
    }
}

/// Human title for a period filter, used as the `list` header.
pub fn describe_period(period: &Option<String>) -> String {
    let p = match period {
        None => return "Saved scores".to_string(),
        Some(p) if p.eq_ignore_ascii_case("all") => return "Saved scores".to_string(),
        Some(p) => p,
    };

    if let Some((start, end)) = p.split_once(':') {
        return format!("Saved scores from {} to {}", start.trim(), end.trim());
    }

    match p.len() {
        // YYYY
        4 => format!("Saved scores for year {}", p),

        // YYYY-MM
        7 => {
            let parts: Vec<&str> = p.split('-').collect();
            if parts.len() == 2 {
                format!("Saved scores for {} {}", month_name(parts[1]), parts[0])
            } else {
                "Saved scores".to_string()
            }
        }

        // YYYY-MM-DD
        10 => format!("Saved scores for {}", p),

        _ => "Saved scores".to_string(),
    }
}
