use super::*;

fn ts_minute_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]Z",
        )
        .expect("valid time format")
    })
}

fn ts_date_format() -> &'static [FormatItem<'static>] {
    static FMT: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();
    FMT.get_or_init(|| {
        time::format_description::parse(
            "[year]-[month repr:numerical padding:zero]-[day padding:zero]",
        )
        .expect("valid time format")
    })
}

fn parse_rfc3339(ts: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(ts, &Rfc3339).ok()
}

fn fmt_date(ts: &str) -> Option<String> {
    parse_rfc3339(ts)?.format(ts_date_format()).ok()
}

/// Rough age for list rows. Content older than about a week reads better as a
/// plain date, so that falls through to the absolute form.
fn fmt_age(ts: &str, now: OffsetDateTime) -> Option<String> {
    let dt = parse_rfc3339(ts)?;
    let secs = (now - dt).whole_seconds();
    if secs < 0 {
        // Clock skew between the server and this machine.
        return None;
    }

    if secs < 90 {
        return Some("just now".to_string());
    }
    let mins = secs / 60;
    if mins < 90 {
        return Some(format!("{}m ago", mins));
    }
    let hours = mins / 60;
    if hours < 36 {
        return Some(format!("{}h ago", hours));
    }
    let days = hours / 24;
    if days <= 7 {
        return Some(format!("{}d ago", days));
    }
    None
}

/// `createdAt` stamps in list rows: age while recent, date after that.
pub(in crate::tui_shell) fn fmt_ts_list(ts: &str, ctx: &RenderCtx) -> String {
    let absolute = || fmt_date(ts).unwrap_or_else(|| ts.to_string());
    match ctx.ts_mode {
        TimestampMode::Relative => fmt_age(ts, ctx.now).unwrap_or_else(absolute),
        TimestampMode::Absolute => absolute(),
    }
}

/// Minute-precision stamp for the header and the command log.
pub(in crate::tui_shell) fn fmt_ts_ui(ts: &str) -> String {
    parse_rfc3339(ts)
        .and_then(|dt| dt.format(ts_minute_format()).ok())
        .unwrap_or_else(|| ts.to_string())
}

pub(in crate::tui_shell) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
