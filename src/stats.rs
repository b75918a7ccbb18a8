//! Pure statistics over the (habits, logs) snapshot.
//!
//! Nothing here touches storage or the clock: `today` is always an explicit
//! parameter, so every function is deterministic under test. Rates are
//! percentages; per-habit rates carry one decimal place, per-day breakdown
//! rates are whole numbers.

use crate::models::{Habit, LogEntry};
use chrono::NaiveDate;
use serde::Serialize;

/// Per-habit statistics over the full log history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitStats {
    pub total_days: usize,
    pub completed_days: usize,
    pub completion_rate: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

/// Streaks of consecutive completed days for one habit.
///
/// The current streak counts back from the most recent completed day and is
/// non-zero only while that day is `today` or yesterday: logging may lag by
/// one day before the streak reads as broken. The longest streak is the best
/// consecutive run anywhere in the history and is never smaller than the
/// current one.
pub fn streak_for(logs: &[LogEntry], habit_id: &str, today: NaiveDate) -> Streak {
    let mut dates: Vec<NaiveDate> = logs
        .iter()
        .filter(|log| log.habit_id == habit_id && log.completed)
        .map(|log| log.date)
        .collect();
    // Most recent first; insertion order is meaningless here.
    dates.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&newest) = dates.first() else {
        return Streak {
            current: 0,
            longest: 0,
        };
    };

    let active = newest == today || today.pred_opt().is_some_and(|y| newest == y);

    let mut current = 0;
    if active {
        current = 1;
        for pair in dates.windows(2) {
            if let [later, earlier] = pair {
                if (*later - *earlier).num_days() == 1 {
                    current += 1;
                } else {
                    break;
                }
            }
        }
    }

    let mut longest = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if let [later, earlier] = pair {
            if (*later - *earlier).num_days() == 1 {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 1;
            }
        }
    }

    Streak {
        current,
        longest: longest.max(current),
    }
}

/// Completion counts, rate, and streaks for one habit.
pub fn habit_stats(logs: &[LogEntry], habit_id: &str, today: NaiveDate) -> HabitStats {
    let total_days = logs.iter().filter(|log| log.habit_id == habit_id).count();
    let completed_days = logs
        .iter()
        .filter(|log| log.habit_id == habit_id && log.completed)
        .count();
    let streak = streak_for(logs, habit_id, today);

    HabitStats {
        total_days,
        completed_days,
        completion_rate: round1(percentage(completed_days, total_days)),
        current_streak: streak.current,
        longest_streak: streak.longest,
    }
}

/// Aggregate statistics across every habit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStats {
    pub completed_today: usize,
    pub total_today: usize,
    pub today_completion: f64,
    pub total_habits: usize,
    pub total_logs: usize,
    pub overall_completion: f64,
}

/// Today's and all-time aggregate completion. Every habit is expected once
/// per day; the habit's cadence label does not adjust the expectation.
pub fn overall_stats(habits: &[Habit], logs: &[LogEntry], today: NaiveDate) -> OverallStats {
    let completed_today = logs
        .iter()
        .filter(|log| log.date == today && log.completed)
        .count();
    let total_today = habits.len();

    let all_completed = logs.iter().filter(|log| log.completed).count();
    let total_logs = logs.len();

    OverallStats {
        completed_today,
        total_today,
        today_completion: round1(percentage(completed_today, total_today)),
        total_habits: habits.len(),
        total_logs,
        overall_completion: round1(percentage(all_completed, total_logs)),
    }
}

/// One day's completion within a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRate {
    pub date: NaiveDate,
    pub completed: usize,
    pub total: usize,
    pub rate: f64,
}

/// Per-day completion rates over `dates` (whole-number percentages).
/// `total_per_day` is the number of expected completions each day.
pub fn daily_breakdown(dates: &[NaiveDate], logs: &[LogEntry], total_per_day: usize) -> Vec<DayRate> {
    dates
        .iter()
        .map(|&date| {
            let completed = logs
                .iter()
                .filter(|log| log.date == date && log.completed)
                .count();
            DayRate {
                date,
                completed,
                total: total_per_day,
                rate: percentage(completed, total_per_day).round(),
            }
        })
        .collect()
}

/// Highest-rate day; ties go to the earliest entry in the supplied order.
pub fn best_day(days: &[DayRate]) -> Option<&DayRate> {
    days.iter()
        .reduce(|best, day| if day.rate > best.rate { day } else { best })
}

/// Lowest-rate day; ties go to the earliest entry in the supplied order.
pub fn worst_day(days: &[DayRate]) -> Option<&DayRate> {
    days.iter()
        .reduce(|worst, day| if day.rate < worst.rate { day } else { worst })
}

/// Completion rate across a date window, expecting every habit once per
/// day within it.
pub fn window_completion(habits: &[Habit], logs: &[LogEntry], window: &[NaiveDate]) -> f64 {
    let completed = logs
        .iter()
        .filter(|log| log.completed && window.contains(&log.date))
        .count();
    let expected = habits.len() * window.len();
    round1(percentage(completed, expected))
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HabitDraft, LogEntry};
    use chrono::Days;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(habit_id: &str, date: NaiveDate, completed: bool) -> LogEntry {
        LogEntry::new(habit_id, date, completed, "")
    }

    fn habit(name: &str) -> Habit {
        Habit::new(HabitDraft {
            name: name.to_string(),
            ..HabitDraft::default()
        })
    }

    #[test]
    fn test_no_logs_yields_zeroes() {
        let stats = habit_stats(&[], "h1", date(2026, 8, 7));
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.completed_days, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 0);
    }

    #[test]
    fn test_streak_counts_consecutive_days_back_from_today() {
        let today = date(2026, 8, 7);
        let logs = vec![
            entry("h1", today, true),
            entry("h1", date(2026, 8, 6), true),
            entry("h1", date(2026, 8, 5), true),
        ];
        let streak = streak_for(&logs, "h1", today);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn test_streak_survives_one_day_of_lag() {
        let today = date(2026, 8, 7);
        // Most recent completion was yesterday: still active.
        let logs = vec![
            entry("h1", date(2026, 8, 6), true),
            entry("h1", date(2026, 8, 5), true),
        ];
        assert_eq!(streak_for(&logs, "h1", today).current, 2);
    }

    #[test]
    fn test_streak_inactive_after_two_missed_days() {
        let today = date(2026, 8, 7);
        let logs = vec![
            entry("h1", date(2026, 8, 5), true),
            entry("h1", date(2026, 8, 4), true),
            entry("h1", date(2026, 8, 3), true),
        ];
        let streak = streak_for(&logs, "h1", today);
        assert_eq!(streak.current, 0);
        // The historical run still counts.
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        let today = date(2026, 8, 7);
        let logs = vec![
            entry("h1", today, true),
            entry("h1", date(2026, 8, 6), true),
            entry("h1", date(2026, 8, 5), true),
            // gap on the 4th
            entry("h1", date(2026, 8, 3), true),
            entry("h1", date(2026, 8, 2), true),
            entry("h1", date(2026, 8, 1), true),
            entry("h1", date(2026, 7, 31), true),
        ];
        let streak = streak_for(&logs, "h1", today);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 4);
    }

    #[test]
    fn test_streak_ignores_incomplete_and_other_habits() {
        let today = date(2026, 8, 7);
        let logs = vec![
            entry("h1", today, true),
            entry("h1", date(2026, 8, 6), false),
            entry("h2", date(2026, 8, 6), true),
        ];
        let streak = streak_for(&logs, "h1", today);
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 1);
    }

    #[test]
    fn test_streak_unsorted_input() {
        let today = date(2026, 8, 7);
        // Insertion order deliberately scrambled; ordering must be calendar order.
        let logs = vec![
            entry("h1", date(2026, 8, 5), true),
            entry("h1", today, true),
            entry("h1", date(2026, 8, 6), true),
        ];
        assert_eq!(streak_for(&logs, "h1", today).current, 3);
    }

    #[test]
    fn test_longest_never_below_current() {
        let today = date(2026, 8, 7);
        for span in 1..6u64 {
            let logs: Vec<LogEntry> = (0..span)
                .map(|i| entry("h1", today.checked_sub_days(Days::new(i)).unwrap(), true))
                .collect();
            let streak = streak_for(&logs, "h1", today);
            assert!(streak.longest >= streak.current);
        }
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let today = date(2026, 3, 1);
        let logs = vec![
            entry("h1", today, true),
            entry("h1", date(2026, 2, 28), true),
            entry("h1", date(2026, 2, 27), true),
        ];
        assert_eq!(streak_for(&logs, "h1", today).current, 3);
    }

    #[test]
    fn test_drink_water_scenario() {
        // Logged days 1-3 completed, day 4 skipped (a completed=false log),
        // day 5 completed.
        let logs = vec![
            entry("h1", date(2026, 8, 1), true),
            entry("h1", date(2026, 8, 2), true),
            entry("h1", date(2026, 8, 3), true),
            LogEntry::new("h1", date(2026, 8, 4), false, "Skipped"),
            entry("h1", date(2026, 8, 5), true),
        ];

        // Viewed from day 5: the day-5 completion is "today".
        let stats = habit_stats(&logs, "h1", date(2026, 8, 5));
        assert_eq!(stats.total_days, 5);
        assert_eq!(stats.completed_days, 4);
        assert_eq!(stats.completion_rate, 80.0);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 3);

        // Viewed a week later the streak is inactive.
        let stats = habit_stats(&logs, "h1", date(2026, 8, 12));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 3);
    }

    #[test]
    fn test_completion_rate_rounds_to_one_decimal() {
        let logs = vec![
            entry("h1", date(2026, 8, 1), true),
            entry("h1", date(2026, 8, 2), false),
            entry("h1", date(2026, 8, 3), false),
        ];
        let stats = habit_stats(&logs, "h1", date(2026, 8, 7));
        // 1/3 = 33.333... -> 33.3
        assert_eq!(stats.completion_rate, 33.3);
    }

    #[test]
    fn test_overall_stats_counts_todays_logs_against_habit_count() {
        let today = date(2026, 8, 7);
        let habits = vec![habit("a"), habit("b"), habit("c"), habit("d")];
        let logs = vec![
            entry(&habits[0].id, today, true),
            entry(&habits[1].id, today, true),
            entry(&habits[2].id, today, false),
            entry(&habits[0].id, date(2026, 8, 6), true),
        ];

        let overall = overall_stats(&habits, &logs, today);
        assert_eq!(overall.completed_today, 2);
        assert_eq!(overall.total_today, 4);
        assert_eq!(overall.today_completion, 50.0);
        assert_eq!(overall.total_habits, 4);
        assert_eq!(overall.total_logs, 4);
        assert_eq!(overall.overall_completion, 75.0);
    }

    #[test]
    fn test_overall_stats_empty() {
        let overall = overall_stats(&[], &[], date(2026, 8, 7));
        assert_eq!(overall.today_completion, 0.0);
        assert_eq!(overall.overall_completion, 0.0);
    }

    #[test]
    fn test_daily_breakdown_rates() {
        let dates = [date(2026, 8, 5), date(2026, 8, 6), date(2026, 8, 7)];
        let logs = vec![
            entry("h1", date(2026, 8, 5), true),
            entry("h2", date(2026, 8, 5), true),
            entry("h1", date(2026, 8, 6), true),
            entry("h2", date(2026, 8, 6), false),
        ];

        let days = daily_breakdown(&dates, &logs, 3);
        let rates: Vec<f64> = days.iter().map(|d| d.rate).collect();
        // 2/3 -> 67, 1/3 -> 33, 0/3 -> 0
        assert_eq!(rates, vec![67.0, 33.0, 0.0]);
    }

    #[test]
    fn test_daily_breakdown_zero_total() {
        let days = daily_breakdown(&[date(2026, 8, 7)], &[], 0);
        assert_eq!(days.first().map(|d| d.rate), Some(0.0));
    }

    #[test]
    fn test_best_and_worst_day_tie_break_on_first() {
        let dates = [
            date(2026, 8, 4),
            date(2026, 8, 5),
            date(2026, 8, 6),
            date(2026, 8, 7),
        ];
        let logs = vec![
            entry("h1", date(2026, 8, 4), true),
            entry("h1", date(2026, 8, 6), true),
        ];
        let days = daily_breakdown(&dates, &logs, 1);

        // Two days at 100 and two at 0; first occurrence wins each way.
        assert_eq!(best_day(&days).map(|d| d.date), Some(date(2026, 8, 4)));
        assert_eq!(worst_day(&days).map(|d| d.date), Some(date(2026, 8, 5)));
    }

    #[test]
    fn test_best_day_empty() {
        assert!(best_day(&[]).is_none());
        assert!(worst_day(&[]).is_none());
    }

    #[test]
    fn test_window_completion() {
        let habits = vec![habit("a"), habit("b")];
        let window = [date(2026, 8, 6), date(2026, 8, 7)];
        let logs = vec![
            entry(&habits[0].id, date(2026, 8, 6), true),
            entry(&habits[0].id, date(2026, 8, 7), true),
            entry(&habits[1].id, date(2026, 8, 7), true),
            // outside the window
            entry(&habits[1].id, date(2026, 8, 1), true),
        ];
        // 3 completed of 4 expected
        assert_eq!(window_completion(&habits, &logs, &window), 75.0);
    }
}
