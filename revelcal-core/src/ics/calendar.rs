//! Calendar container and header metadata.

use crate::config::ExportConfig;
use crate::event::CalendarEvent;

/// Calendar-level properties. Empty fields are not written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarMeta {
    pub version: String,
    pub prod_id: String,
    pub url: String,
    /// Written as both `NAME` and `X-WR-CALNAME`.
    pub name: String,
    /// Written as both `DESCRIPTION` and `X-WR-CALDESC`.
    pub description: String,
    /// Written as both `TIMEZONE-ID` and `X-WR-TIMEZONE`.
    pub timezone: String,
    /// ISO 8601 duration, e.g. `PT12H`.
    pub refresh_interval: String,
    pub color: String,
    pub cal_scale: String,
    pub method: String,
}

impl CalendarMeta {
    pub fn from_config(config: &ExportConfig) -> Self {
        CalendarMeta {
            version: "2.0".into(),
            prod_id: config.prod_id.clone(),
            url: config.calendar_url(),
            name: config.calendar_name.clone(),
            description: config.calendar_description.clone(),
            timezone: config.timezone.clone(),
            refresh_interval: config.refresh_interval.clone(),
            color: String::new(),
            cal_scale: "GREGORIAN".into(),
            method: "PUBLISH".into(),
        }
    }
}

/// A `VCALENDAR` with its events, in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    pub meta: CalendarMeta,
    pub events: Vec<CalendarEvent>,
}

impl Calendar {
    pub fn new(meta: CalendarMeta) -> Self {
        Calendar {
            meta,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: CalendarEvent) -> &mut Self {
        self.events.push(event);
        self
    }
}
