use padel_pass::config::settings::AppConfig;
use padel_pass::store::Store;
use padel_pass::view::{self, ViewContext};

fn load() -> (padel_pass::store::Snapshot, AppConfig, ViewContext) {
    let snapshot = Store::new("data")
        .load_snapshot()
        .expect("bundled fixtures should load");
    let config = AppConfig::new();
    let ctx = ViewContext::new(None, &snapshot.club, &config);
    (snapshot, config, ctx)
}

#[test]
fn home_page_builds_from_fixtures() {
    let (snapshot, config, ctx) = load();
    let home = view::home::build(&snapshot, &config, &ctx);

    assert_eq!(home.stats.players, snapshot.players.len());
    assert_eq!(home.stats.events, snapshot.events.len());
    assert_eq!(home.stats.matches, snapshot.matches.len());
    assert!(home.top_players.len() <= config.view.top_players_limit);
    assert!(home.upcoming.len() <= config.view.upcoming_limit);

    // top players sorted by points descending
    for pair in home.top_players.windows(2) {
        assert!(pair[0].points >= pair[1].points);
    }

    let featured = home.featured.expect("non-empty roster has a featured player");
    assert_eq!(featured.player_id, home.top_players[0].id);
    assert!(!home.missions.is_empty());
    assert!(home.missions.iter().all(|m| !m.done));
}

#[test]
fn pass_page_falls_back_to_first_player_for_unknown_id() {
    let (snapshot, _, ctx) = load();
    let pass = view::pass::build(&snapshot, Some("nobody"), &ctx).unwrap();

    assert_eq!(pass.selected.player_id, snapshot.players[0].id);
    assert_eq!(pass.levels.len(), snapshot.levels.len());

    let current_rows = pass.levels.iter().filter(|l| l.current).count();
    assert_eq!(current_rows, 1);
    for card in &pass.levels {
        assert_eq!(card.unlocked, pass.selected.points >= card.required_total);
    }
}

#[test]
fn events_page_filters_and_signals_no_results() {
    let (snapshot, _, ctx) = load();

    let all = view::events::build(&snapshot, "", &ctx);
    assert_eq!(all.items.len(), snapshot.events.len());
    assert!(!all.no_results);
    for pair in all.items.windows(2) {
        assert!(pair[0].datetime <= pair[1].datetime);
    }

    let none = view::events::build(&snapshot, "snooker", &ctx);
    assert!(none.items.is_empty());
    assert!(none.no_results);

    let norte = view::events::build(&snapshot, "norte", &ctx);
    assert!(!norte.items.is_empty());
    assert!(norte.items.iter().all(|e| e.club.to_lowercase().contains("norte")));
}

#[test]
fn players_page_sorts_by_requested_key() {
    let (snapshot, _, ctx) = load();

    let by_winrate = view::players::build(&snapshot, "", Some("winrate_desc"), &ctx);
    assert_eq!(by_winrate.sort, "winrate_desc");
    for pair in by_winrate.rows.windows(2) {
        assert!(pair[0].win_rate >= pair[1].win_rate);
    }

    let filtered = view::players::build(&snapshot, "padel sur", None, &ctx);
    assert!(!filtered.rows.is_empty());
    assert!(filtered.rows.len() < snapshot.players.len());

    // rank is the position after sorting
    let ranks: Vec<usize> = by_winrate.rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, (1..=by_winrate.rows.len()).collect::<Vec<_>>());
}

#[test]
fn player_profile_builds_recent_matches_and_missions() {
    let (snapshot, config, ctx) = load();
    let profile = view::player::build(&snapshot, Some("robert"), &config, &ctx).unwrap();

    assert_eq!(profile.head.id, "robert");
    assert!(profile.recent.len() <= config.view.recent_matches_limit);
    assert!(!profile.no_matches);
    for pair in profile.recent.windows(2) {
        assert!(pair[0].datetime >= pair[1].datetime);
    }

    // fixture: robert completed two of the three missions
    let done = profile.missions.iter().filter(|m| m.done).count();
    assert_eq!(done, 2);

    assert_eq!(profile.achievements.len(), config.view.achievement_slots);
    assert!(profile.achievements[0].filled);
    assert!(!profile.achievements[1].filled);

    // opponents label never contains the player's own name
    for item in &profile.recent {
        assert!(!item.opponents.contains("Robert"));
    }
}

#[test]
fn profile_for_player_without_matches_signals_no_data() {
    let (snapshot, config, ctx) = load();
    let profile = view::player::build(&snapshot, Some("ines"), &config, &ctx).unwrap();

    assert!(profile.recent.is_empty());
    assert!(profile.no_matches);
    assert_eq!(profile.stats.win_rate, 0.0);
    assert_eq!(profile.stats.match_count, 0);
}
