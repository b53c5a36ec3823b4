use super::models::LevelRow;

/// Position between the current level's floor and the next level's threshold
#[derive(Debug, Clone, PartialEq)]
pub struct LevelProgress {
    pub current: u32,
    pub current_floor: i64,
    pub next_target: i64,
    pub progress: f64,
    pub is_max: bool,
}

/// Level held at a cumulative point total.
///
/// The largest level whose threshold is covered by `points`; when no row
/// qualifies the table's minimum level applies, and an empty table degrades
/// to level 1. Assumes rows sorted ascending (the validation boundary
/// guarantees this).
pub fn level_of(levels: &[LevelRow], points: i64) -> u32 {
    let mut current = levels.first().map_or(1, |row| row.level);
    for row in levels {
        if points >= row.required_total {
            current = row.level;
        }
    }
    current
}

/// Progress from the current level toward the next one
pub fn progress_to_next(levels: &[LevelRow], points: i64) -> LevelProgress {
    let current = level_of(levels, points);
    let current_floor = levels
        .iter()
        .find(|row| row.level == current)
        .map_or(0, |row| row.required_total);

    match levels.iter().find(|row| row.level == current + 1) {
        Some(next) => {
            let next_target = next.required_total;
            let span = next_target - current_floor;
            // Duplicate thresholds make the span zero; report the level as
            // fully progressed instead of dividing by zero.
            let progress = if span <= 0 {
                1.0
            } else {
                ((points - current_floor) as f64 / span as f64).clamp(0.0, 1.0)
            };
            LevelProgress {
                current,
                current_floor,
                next_target,
                progress,
                is_max: false,
            }
        }
        None => LevelProgress {
            current,
            current_floor,
            next_target: current_floor,
            progress: 1.0,
            is_max: true,
        },
    }
}
