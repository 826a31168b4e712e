use crate::config::model::RenderConfig;
use crate::novedades::view::{ListView, NoticeRow};
use itertools::Itertools;

const TITLE: &str = "Gestor de novedades";
const STRIKETHROUGH: &str = "\x1b[9m";
const RESET: &str = "\x1b[0m";
const EXPIRED_TAG: &str = "(finalizada)";
const EMPTY_LIST: &str = "No hay novedades.";

pub fn render_row(row: &NoticeRow, config: &RenderConfig) -> String {
    let notice = row.notice;
    let line = [
        notice.name.as_str(),
        notice.place.as_str(),
        notice.schedule.as_str(),
        notice.end_day(),
        notice.details.as_str(),
    ]
    .iter()
    .join(" - ");

    match (row.expired, config.colors) {
        (false, _) => format!("[{}] {}", notice.id, line),
        (true, true) => format!(
            "[{}] {}{}{} {}",
            notice.id, STRIKETHROUGH, line, RESET, EXPIRED_TAG
        ),
        (true, false) => format!("[{}] {} {}", notice.id, line, EXPIRED_TAG),
    }
}

pub fn render_summary(view: &ListView) -> String {
    format!("Total: {} | Finalizadas: {}", view.total, view.expired)
}

pub fn render_list(view: &ListView, config: &RenderConfig) -> String {
    let mut lines = vec![TITLE.to_string(), String::new()];

    if view.items.is_empty() {
        lines.push(EMPTY_LIST.to_string());
    } else {
        lines.extend(view.items.iter().map(|row| render_row(row, config)));
    }

    lines.push(String::new());
    lines.push(render_summary(view));

    lines.join("\n")
}
