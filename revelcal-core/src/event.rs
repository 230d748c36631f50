//! Consumer-neutral calendar event built from a trip.

use chrono::NaiveDateTime;

use crate::address::resolve_address;
use crate::config::ExportConfig;
use crate::trip::Trip;

/// A single exported event. Built fresh for each export and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Stable UID so clients treat re-exports as updates.
    pub id: String,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Timezone label for `start`/`end`. Empty or `UTC` means UTC.
    pub time_zone_id: String,
    pub all_day: bool,
}

impl CalendarEvent {
    /// Whether times carry a `TZID` rather than a `Z` suffix.
    pub fn is_zoned(&self) -> bool {
        !self.time_zone_id.is_empty() && self.time_zone_id != "UTC"
    }
}

/// Maps trips to [`CalendarEvent`]s using the operator configuration.
#[derive(Debug, Clone)]
pub struct EventBuilder<'a> {
    config: &'a ExportConfig,
}

impl<'a> EventBuilder<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        EventBuilder { config }
    }

    /// Times are copied verbatim; no timezone conversion happens here.
    pub fn build(&self, trip: &Trip) -> CalendarEvent {
        CalendarEvent {
            id: format!("{}{}", self.config.uid_prefix, trip.id),
            summary: trip.title.clone(),
            description: details_text(self.config, &trip.slug),
            location: resolve_address(&trip.venues),
            start: trip.start,
            end: trip.end,
            time_zone_id: self.config.timezone.clone(),
            all_day: false,
        }
    }
}

/// Description shared by the ICS body and the third-party links.
pub(crate) fn details_text(config: &ExportConfig, slug: &str) -> String {
    format!("For details, visit: {}", config.trip_url(slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Venue;
    use chrono::NaiveDate;

    fn fall_foliage() -> Trip {
        let day = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        Trip {
            id: 42,
            slug: "fall-foliage".into(),
            title: "Fall Foliage Tour".into(),
            start: day.and_hms_opt(8, 0, 0).unwrap(),
            end: day.and_hms_opt(20, 0, 0).unwrap(),
            venues: vec![Venue {
                name: "Town Hall".into(),
                address: "1 Main St".into(),
                city: "Springfield".into(),
                state: "NY".into(),
                zip: "12345".into(),
                is_primary: true,
                ..Venue::default()
            }],
            ..Trip::default()
        }
    }

    #[test]
    fn build_fills_every_field() {
        let config = ExportConfig::default();
        let trip = fall_foliage();
        let event = EventBuilder::new(&config).build(&trip);

        assert_eq!(event.id, "REVBUS42");
        assert_eq!(event.summary, "Fall Foliage Tour");
        assert_eq!(
            event.description,
            "For details, visit: http://www.revelbus.com/trip/fall-foliage"
        );
        assert_eq!(event.location, "Town Hall, 1 Main St, Springfield, NY, 12345");
        assert_eq!(event.start, trip.start);
        assert_eq!(event.end, trip.end);
        assert_eq!(event.time_zone_id, "America/New_York");
        assert!(!event.all_day);
        assert!(event.is_zoned());
    }

    #[test]
    fn build_passes_bad_data_through() {
        let config = ExportConfig::default();
        let mut trip = Trip {
            id: 9,
            ..Trip::default()
        };
        trip.start = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let event = EventBuilder::new(&config).build(&trip);
        assert_eq!(event.location, "");
        assert_eq!(event.description, "For details, visit: http://www.revelbus.com/trip/");
        assert_eq!(event.end, NaiveDateTime::default());
        assert!(event.end < event.start);
    }

    #[test]
    fn utc_timezone_is_not_zoned() {
        let config = ExportConfig {
            timezone: "UTC".into(),
            ..ExportConfig::default()
        };
        let event = EventBuilder::new(&config).build(&fall_foliage());
        assert!(!event.is_zoned());
    }
}
