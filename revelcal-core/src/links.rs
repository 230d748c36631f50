//! "Add to calendar" links for third-party web calendars.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::address::resolve_address;
use crate::config::{ExportConfig, LinkTimePolicy};
use crate::event::details_text;
use crate::export::ics_file_name;
use crate::text::{plus_for_spaces, query_escape};
use crate::trip::Trip;

const GOOGLE_BASE: &str = "https://www.google.com/calendar/render?action=TEMPLATE";
const YAHOO_BASE: &str = "https://calendar.yahoo.com/?v=60&view=d&type=20";
const LINK_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Ready-to-render links for one trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarLinks {
    pub google: String,
    pub yahoo: String,
    /// Site-relative path of the exported `.ics` file.
    pub ics: String,
}

impl CalendarLinks {
    pub fn into_map(self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([("google", self.google), ("yahoo", self.yahoo), ("ics", self.ics)])
    }
}

#[derive(Debug, Clone)]
pub struct LinkBuilder<'a> {
    config: &'a ExportConfig,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        LinkBuilder { config }
    }

    pub fn build(&self, trip: &Trip) -> CalendarLinks {
        let address = resolve_address(&trip.venues);

        CalendarLinks {
            google: self.google(trip, &address),
            yahoo: self.yahoo(trip, &address),
            ics: self.ics_path(trip),
        }
    }

    /// Free text uses space-to-plus only.
    pub fn google(&self, trip: &Trip, address: &str) -> String {
        let mut uri = String::from(GOOGLE_BASE);
        uri.push_str(&format!("&text={}", plus_for_spaces(&trip.title)));
        uri.push_str(&format!(
            "&dates={}/{}",
            self.link_time(&trip.start),
            self.link_time(&trip.end)
        ));
        uri.push_str(&format!(
            "&details={}",
            plus_for_spaces(&details_text(self.config, &trip.slug))
        ));

        if !address.is_empty() {
            uri.push_str(&format!("&location={}", plus_for_spaces(address)));
        }

        uri.push_str(&format!("&ctz={}&sf=true&output=xml", self.config.google_ctz));
        uri
    }

    /// Free text uses standard query escaping.
    pub fn yahoo(&self, trip: &Trip, address: &str) -> String {
        let mut uri = String::from(YAHOO_BASE);
        uri.push_str(&format!("&title={}", query_escape(&trip.title)));
        uri.push_str(&format!("&st={}", self.link_time(&trip.start)));
        uri.push_str(&format!("&et={}", self.link_time(&trip.end)));
        uri.push_str(&format!(
            "&desc={}",
            query_escape(&details_text(self.config, &trip.slug))
        ));

        if !address.is_empty() {
            uri.push_str(&format!("&in_loc={}", query_escape(address)));
        }

        uri
    }

    /// `/<ics_dir>/<id>.ics`, matching where the file sink writes.
    pub fn ics_path(&self, trip: &Trip) -> String {
        format!("{}/{}", self.config.ics_url_prefix(), ics_file_name(trip))
    }

    fn link_time(&self, time: &NaiveDateTime) -> String {
        match (self.config.link_times, self.config.tz()) {
            (LinkTimePolicy::Utc, Some(tz)) => match tz.from_local_datetime(time).earliest() {
                Some(zoned) => zoned.naive_utc().format(LINK_TIME_FORMAT).to_string(),
                None => {
                    tracing::warn!(%time, %tz, "local time does not exist, using it verbatim");
                    time.format(LINK_TIME_FORMAT).to_string()
                }
            },
            _ => time.format(LINK_TIME_FORMAT).to_string(),
        }
    }
}
