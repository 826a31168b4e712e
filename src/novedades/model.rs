const DATE_LENGTH: usize = 10;

/// A notice ("actividad") as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub name: String,
    pub place: String,
    pub schedule: String,
    pub end_date: String,
    pub details: String,
}

impl Notice {
    pub fn new(
        id: String,
        name: String,
        place: String,
        schedule: String,
        end_date: String,
        details: String,
    ) -> Self {
        Self {
            id,
            name,
            place,
            schedule,
            end_date,
            details,
        }
    }

    /// Date portion of the end date (the backend may send a full ISO timestamp)
    pub fn end_day(&self) -> &str {
        truncate_date(&self.end_date)
    }
}

/// Editable state of the create form and of the edit modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeForm {
    pub name: String,
    pub place: String,
    pub schedule: String,
    pub end_date: String,
    pub details: String,
}

impl NoticeForm {
    pub fn from_notice(notice: &Notice) -> Self {
        Self {
            name: notice.name.clone(),
            place: notice.place.clone(),
            schedule: notice.schedule.clone(),
            end_date: notice.end_day().to_string(),
            details: notice.details.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn truncate_date(date: &str) -> &str {
    match date.char_indices().nth(DATE_LENGTH) {
        Some((index, _)) => &date[..index],
        None => date,
    }
}
