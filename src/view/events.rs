use crate::domain::schedule;
use crate::store::Snapshot;

use super::ViewContext;
use super::models::{EventItem, EventsView};

pub fn build(snapshot: &Snapshot, query: &str, ctx: &ViewContext) -> EventsView {
    let mut hits = schedule::search_events(&snapshot.events, query);
    hits.sort_by(|a, b| a.datetime.cmp(&b.datetime));

    let items: Vec<EventItem> = hits.into_iter().map(EventItem::from_event).collect();
    let no_results = items.is_empty();

    EventsView {
        theme: ctx.theme.clone(),
        year: ctx.year,
        query: query.to_string(),
        items,
        no_results,
    }
}
