use super::model::Notice;
use chrono::NaiveDateTime;
use itertools::Itertools;

const DEADLINE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// One rendered row of the list
#[derive(Debug, Clone, PartialEq)]
pub struct NoticeRow<'a> {
    pub notice: &'a Notice,
    pub expired: bool,
}

/// Filtered and sorted list, with its counters
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    pub items: Vec<NoticeRow<'a>>,
    pub total: usize,
    pub expired: usize,
}

/**
   Instant at which the notice ends: its end day joined with its schedule.
   None when either is missing or they don't form a valid timestamp.
*/
pub fn deadline(notice: &Notice) -> Option<NaiveDateTime> {
    if notice.end_date.is_empty() || notice.schedule.is_empty() {
        return None;
    }

    let timestamp = format!("{}T{}", notice.end_day(), notice.schedule.trim());

    DEADLINE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&timestamp, format).ok())
}

pub fn is_expired(notice: &Notice, now: NaiveDateTime) -> bool {
    deadline(notice).is_some_and(|deadline| now > deadline)
}

pub fn matches_search(notice: &Notice, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    format!("{} {} {}", notice.name, notice.place, notice.details)
        .to_lowercase()
        .contains(&search.to_lowercase())
}

/// Ascending by deadline; notices without one keep their order at the end
pub fn sort_by_deadline<'a>(notices: impl IntoIterator<Item = &'a Notice>) -> Vec<&'a Notice> {
    notices
        .into_iter()
        .sorted_by_key(|notice| {
            let deadline = deadline(notice);
            (deadline.is_none(), deadline)
        })
        .collect()
}

pub fn build_view<'a>(notices: &'a [Notice], search: &str, now: NaiveDateTime) -> ListView<'a> {
    let items: Vec<NoticeRow> =
        sort_by_deadline(notices.iter().filter(|notice| matches_search(notice, search)))
            .into_iter()
            .map(|notice| NoticeRow {
                notice,
                expired: is_expired(notice, now),
            })
            .collect();

    ListView {
        total: items.len(),
        expired: items.iter().filter(|row| row.expired).count(),
        items,
    }
}
