//! ICS serialization.

use std::io::Write;

use chrono::{DateTime, NaiveDateTime, Utc};

use super::calendar::{Calendar, CalendarMeta};
use crate::error::CalExportResult;
use crate::event::CalendarEvent;
use crate::text::{escape_text, fold_line};

const STAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Accumulates folded, CRLF-terminated content lines.
struct ContentLines {
    out: String,
}

impl ContentLines {
    fn new() -> Self {
        ContentLines { out: String::new() }
    }

    fn line(&mut self, line: &str) {
        self.out.push_str(&fold_line(line));
    }

    fn prop(&mut self, name: &str, value: &str) {
        self.line(&format!("{name}:{value}"));
    }

    /// Skip empty values.
    fn prop_opt(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.prop(name, value);
        }
    }

    fn text_opt(&mut self, name: &str, value: &str) {
        if !value.is_empty() {
            self.prop(name, &escape_text(value));
        }
    }
}

impl Calendar {
    /// Serialize with `DTSTAMP` set to the current time.
    pub fn encode<W: Write>(&self, writer: W) -> CalExportResult<()> {
        self.encode_at(writer, Utc::now())
    }

    pub fn encode_at<W: Write>(&self, mut writer: W, dtstamp: DateTime<Utc>) -> CalExportResult<()> {
        writer.write_all(self.to_ics_string_at(dtstamp).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn to_ics_string(&self) -> String {
        self.to_ics_string_at(Utc::now())
    }

    /// Same input and `dtstamp` always produce the same bytes.
    pub fn to_ics_string_at(&self, dtstamp: DateTime<Utc>) -> String {
        let mut lines = ContentLines::new();

        lines.line("BEGIN:VCALENDAR");
        write_header(&mut lines, &self.meta);
        for event in &self.events {
            write_event(&mut lines, event, dtstamp);
        }
        lines.line("END:VCALENDAR");

        tracing::debug!(events = self.events.len(), bytes = lines.out.len(), "encoded calendar");
        lines.out
    }
}

fn write_header(lines: &mut ContentLines, meta: &CalendarMeta) {
    lines.prop_opt("VERSION", &meta.version);
    lines.text_opt("PRODID", &meta.prod_id);
    lines.prop_opt("URL", &meta.url);
    lines.text_opt("NAME", &meta.name);
    lines.text_opt("X-WR-CALNAME", &meta.name);
    lines.text_opt("DESCRIPTION", &meta.description);
    lines.text_opt("X-WR-CALDESC", &meta.description);
    lines.prop_opt("TIMEZONE-ID", &meta.timezone);
    lines.prop_opt("X-WR-TIMEZONE", &meta.timezone);
    lines.prop_opt("REFRESH-INTERVAL;VALUE=DURATION", &meta.refresh_interval);
    lines.prop_opt("X-PUBLISHED-TTL", &meta.refresh_interval);
    lines.prop_opt("COLOR", &meta.color);
    lines.prop_opt("CALSCALE", &meta.cal_scale);
    lines.prop_opt("METHOD", &meta.method);
}

fn write_event(lines: &mut ContentLines, event: &CalendarEvent, dtstamp: DateTime<Utc>) {
    lines.line("BEGIN:VEVENT");
    lines.prop("DTSTAMP", &dtstamp.format(STAMP_FORMAT).to_string());
    lines.prop("UID", &event.id);

    if event.is_zoned() {
        lines.prop("TZID", &event.time_zone_id);
    }

    lines.prop("SUMMARY", &escape_text(&event.summary));
    lines.text_opt("DESCRIPTION", &event.description);
    lines.text_opt("LOCATION", &event.location);

    lines.line(&datetime_property("DTSTART", &event.start, event));
    lines.line(&datetime_property("DTEND", &event.end, event));
    lines.line("END:VEVENT");
}

/// Build a DTSTART/DTEND line.
///
/// Timed values carry either a `TZID` parameter with a local time or a
/// `Z`-suffixed UTC time, never both. Dates carry neither.
fn datetime_property(name: &str, time: &NaiveDateTime, event: &CalendarEvent) -> String {
    if event.all_day {
        return format!("{name};VALUE=DATE:{}", time.format(DATE_FORMAT));
    }

    let local = time.format(DATE_TIME_FORMAT);
    if event.is_zoned() {
        format!("{name};TZID={};VALUE=DATE-TIME:{local}", event.time_zone_id)
    } else {
        format!("{name};VALUE=DATE-TIME:{local}Z")
    }
}
