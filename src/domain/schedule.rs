use super::models::Event;

/// The next `limit` events by start time
pub fn upcoming(events: &[Event], limit: usize) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| a.datetime.cmp(&b.datetime));
    sorted.truncate(limit);
    sorted
}

/// Case-insensitive substring match over type, club, location and datetime.
/// Original order is preserved; an empty query matches everything.
pub fn search_events<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return events.iter().collect();
    }

    events
        .iter()
        .filter(|e| e.search_text().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn event(title: &str, datetime: &str, club: &str) -> Event {
        Event {
            event_type: "Americano".to_string(),
            title: title.to_string(),
            datetime: NaiveDateTime::parse_from_str(datetime, "%Y-%m-%dT%H:%M").unwrap(),
            club: club.to_string(),
            location: "Madrid".to_string(),
            price_eur: 12.0,
            spots_left: 4,
            spots_total: 16,
        }
    }

    #[test]
    fn test_upcoming_sorts_ascending_and_truncates() {
        let events = vec![
            event("later", "2026-10-01T10:00", "Padel Norte"),
            event("soonest", "2026-09-01T10:00", "Padel Sur"),
            event("middle", "2026-09-15T10:00", "Padel Norte"),
        ];
        let next = upcoming(&events, 2);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0].title, "soonest");
        assert_eq!(next[1].title, "middle");
    }

    #[test]
    fn test_search_empty_query_returns_all_in_order() {
        let events = vec![
            event("b", "2026-10-01T10:00", "Padel Norte"),
            event("a", "2026-09-01T10:00", "Padel Sur"),
        ];
        let all = search_events(&events, "");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "b");
    }

    #[test]
    fn test_search_matches_club_case_insensitively() {
        let events = vec![
            event("a", "2026-09-01T10:00", "Padel Sur"),
            event("b", "2026-10-01T10:00", "Padel Norte"),
        ];
        let hits = search_events(&events, "NORTE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "b");
    }

    #[test]
    fn test_search_without_hits_is_empty_not_error() {
        let events = vec![event("a", "2026-09-01T10:00", "Padel Sur")];
        assert!(search_events(&events, "snooker").is_empty());
    }
}
