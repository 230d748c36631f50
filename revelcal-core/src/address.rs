//! Resolve a trip's display address from its venues.

use crate::trip::Venue;

impl Venue {
    /// `"<name>, <address>, <city>, <state>, <zip>"`
    pub fn display_address(&self) -> String {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.zip.as_str(),
        ]
        .join(", ")
    }
}

/// The primary venue's address, else the first venue's, else empty.
///
/// The first-in-list fallback keeps repeated exports stable when no venue
/// has been flagged primary.
pub fn resolve_address(venues: &[Venue]) -> String {
    venues
        .iter()
        .find(|v| v.is_primary)
        .or_else(|| venues.first())
        .map(Venue::display_address)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(name: &str, is_primary: bool) -> Venue {
        Venue {
            name: name.into(),
            address: format!("{name} St"),
            city: "Springfield".into(),
            state: "NY".into(),
            zip: "12345".into(),
            is_primary,
            ..Venue::default()
        }
    }

    #[test]
    fn primary_venue_wins_over_list_order() {
        let venues = vec![venue("A", false), venue("B", true), venue("C", false)];
        assert_eq!(resolve_address(&venues), "B, B St, Springfield, NY, 12345");
    }

    #[test]
    fn first_primary_is_used_when_several_are_flagged() {
        let venues = vec![venue("A", false), venue("B", true), venue("C", true)];
        assert_eq!(resolve_address(&venues), venues[1].display_address());
    }

    #[test]
    fn falls_back_to_first_venue_without_primary() {
        let venues = vec![venue("A", false), venue("B", false)];
        assert_eq!(resolve_address(&venues), "A, A St, Springfield, NY, 12345");
    }

    #[test]
    fn no_venues_resolves_to_empty() {
        assert_eq!(resolve_address(&[]), "");
    }

    #[test]
    fn empty_fields_keep_their_separators() {
        let v = Venue {
            name: "Depot".into(),
            ..Venue::default()
        };
        assert_eq!(v.display_address(), "Depot, , , , ");
    }
}
