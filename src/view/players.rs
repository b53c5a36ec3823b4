use crate::domain::roster::{self, SortKey};
use crate::store::Snapshot;

use super::ViewContext;
use super::models::{PlayerRow, PlayersView};

pub fn build(snapshot: &Snapshot, query: &str, sort: Option<&str>, ctx: &ViewContext) -> PlayersView {
    let key = SortKey::parse(sort);

    let ranked = roster::decorate_all(&snapshot.players, &snapshot.levels);
    let mut rows = roster::filter_players(ranked, query);
    roster::sort_players(&mut rows, key);

    let rows = rows
        .iter()
        .enumerate()
        .map(|(i, r)| PlayerRow::from_ranked(i + 1, r))
        .collect();

    PlayersView {
        theme: ctx.theme.clone(),
        year: ctx.year,
        query: query.to_string(),
        sort: key.as_str().to_string(),
        rows,
    }
}
