//! Canned motivational text: deterministic template selection over the
//! current snapshot. There is no learned behavior; the "insight" is which
//! template gets picked.

use crate::constants::INSIGHT_WINDOW_DAYS;
use crate::dates;
use crate::models::{FocusArea, Habit, LogEntry, Profile, Routine};
use crate::stats;
use chrono::NaiveDate;

/// Source of randomness for template selection. Callers supply one, so
/// selection is deterministic whenever the source is fixed or seeded.
pub trait RandomSource {
    /// An index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

const MOTIVATIONAL_QUOTES: &[&str] = &[
    "Every small step counts. You're building something amazing!",
    "Consistency is the key to success. Keep going!",
    "Your future self will thank you for the habits you build today.",
    "Progress, not perfection. You're doing great!",
    "One day at a time. You've got this!",
    "The best time to start was yesterday. The next best time is now.",
    "Small habits, big results. Stay committed!",
    "You're stronger than you think. Keep pushing forward!",
    "Success is the sum of small efforts repeated daily.",
    "Believe in yourself. You're making it happen!",
];

fn routine_messages(routine: Routine) -> &'static [&'static str] {
    match routine {
        Routine::Morning => &[
            "Good morning! Start your day strong with your habits.",
            "Rise and shine! Your morning routine sets the tone for success.",
            "A productive morning leads to a productive day!",
        ],
        Routine::Flexible => &[
            "Find your rhythm today. Your habits, your schedule!",
            "Flexibility is your strength. Make today count!",
            "Adapt and thrive. You're in control!",
        ],
        Routine::Night => &[
            "Evening is your power time. Finish strong!",
            "Night owl mode activated. Let's build those habits!",
            "End your day with purpose and intention.",
        ],
    }
}

fn focus_messages(focus: FocusArea) -> &'static [&'static str] {
    match focus {
        FocusArea::Productivity => &[
            "Your productivity streak is inspiring!",
            "Efficient habits lead to extraordinary results.",
            "You're building a productivity powerhouse!",
        ],
        FocusArea::Health => &[
            "Your health is your wealth. Keep investing!",
            "Every healthy choice is a step toward a better you.",
            "Your body and mind thank you for these habits!",
        ],
        FocusArea::Learning => &[
            "Knowledge compounds. Keep learning daily!",
            "Your curiosity is your superpower!",
            "Every day is a chance to grow smarter!",
        ],
        FocusArea::SelfCare => &[
            "Taking care of yourself isn't selfish, it's essential.",
            "You deserve the care you give yourself.",
            "Self-care is the foundation of everything else!",
        ],
    }
}

fn choose<'a>(pool: &[&'a str], source: &mut dyn RandomSource) -> Option<&'a str> {
    if pool.is_empty() {
        return None;
    }
    pool.get(source.pick(pool.len()) % pool.len()).copied()
}

/// Daily motivational line. Without a profile the base quote pool is used;
/// with one, the pool widens to routine- and focus-specific messages.
pub fn daily_motivation(profile: Option<&Profile>, source: &mut dyn RandomSource) -> &'static str {
    let base = choose(MOTIVATIONAL_QUOTES, source)
        .unwrap_or("Every small step counts. You're building something amazing!");

    let Some(profile) = profile else {
        return base;
    };

    let mut pool = vec![base];
    pool.extend_from_slice(routine_messages(profile.routine));
    pool.extend_from_slice(focus_messages(profile.focus));
    choose(&pool, source).unwrap_or(base)
}

/// Threshold ladder keyed on the current streak length.
pub fn streak_insight(streak: u32) -> &'static str {
    if streak >= 30 {
        "🏆 Incredible! 30+ day streak! You're a habit master!"
    } else if streak >= 21 {
        "🎉 21 days! Scientists say it takes 21 days to form a habit. You did it!"
    } else if streak >= 14 {
        "💎 Two weeks strong! You're in the habit formation zone!"
    } else if streak >= 7 {
        "🌟 One week streak! The momentum is building!"
    } else if streak >= 3 {
        "🔥 Three days in a row! Keep the fire burning!"
    } else if streak >= 1 {
        "✨ Great start! Every streak begins with day one!"
    } else {
        "🌱 Ready to start your streak? Today is day one!"
    }
}

/// Contextual encouragement from the completion rate and recent misses.
pub fn encouragement(completion_rate: f64, missed_days: u32) -> &'static str {
    if completion_rate >= 90.0 {
        "You're absolutely crushing it! Your consistency is remarkable!"
    } else if completion_rate >= 75.0 {
        "Excellent work! You're building strong, lasting habits!"
    } else if completion_rate >= 50.0 {
        "You're making solid progress. Keep building on this foundation!"
    } else if missed_days > 3 {
        "Life happens! Don't be too hard on yourself. Start fresh today!"
    } else {
        "Every day is a new opportunity. You've got this!"
    }
}

/// A canned habit suggestion for onboarding and empty states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitSuggestion {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

const PRODUCTIVITY_SUGGESTIONS: &[HabitSuggestion] = &[
    HabitSuggestion { name: "Morning Planning", icon: "📝", description: "Plan your day every morning" },
    HabitSuggestion { name: "Deep Work Session", icon: "🎯", description: "1 hour of focused work" },
    HabitSuggestion { name: "Email Inbox Zero", icon: "📧", description: "Clear your inbox daily" },
    HabitSuggestion { name: "Learn Something New", icon: "📚", description: "15 minutes of learning" },
];

const HEALTH_SUGGESTIONS: &[HabitSuggestion] = &[
    HabitSuggestion { name: "Morning Exercise", icon: "🏃", description: "30 minutes of physical activity" },
    HabitSuggestion { name: "Drink Water", icon: "💧", description: "8 glasses throughout the day" },
    HabitSuggestion { name: "Healthy Meal Prep", icon: "🥗", description: "Prepare nutritious meals" },
    HabitSuggestion { name: "Evening Stretch", icon: "🧘", description: "10 minutes of stretching" },
];

const LEARNING_SUGGESTIONS: &[HabitSuggestion] = &[
    HabitSuggestion { name: "Read Daily", icon: "📖", description: "Read for 30 minutes" },
    HabitSuggestion { name: "Practice a Skill", icon: "🎨", description: "Dedicate time to skill building" },
    HabitSuggestion { name: "Watch Educational Content", icon: "🎓", description: "Learn from videos/courses" },
    HabitSuggestion { name: "Journal Learnings", icon: "✍️", description: "Write down what you learned" },
];

const SELF_CARE_SUGGESTIONS: &[HabitSuggestion] = &[
    HabitSuggestion { name: "Meditation", icon: "🧘‍♀️", description: "10 minutes of mindfulness" },
    HabitSuggestion { name: "Gratitude Journal", icon: "🙏", description: "Write 3 things you're grateful for" },
    HabitSuggestion { name: "Digital Detox Hour", icon: "📵", description: "1 hour without screens" },
    HabitSuggestion { name: "Quality Sleep", icon: "😴", description: "8 hours of restful sleep" },
];

/// Suggestions matched to the profile's focus area; Productivity is the
/// fallback when no profile exists.
pub fn habit_suggestions(profile: Option<&Profile>) -> &'static [HabitSuggestion] {
    match profile.map(|p| p.focus) {
        Some(FocusArea::Health) => HEALTH_SUGGESTIONS,
        Some(FocusArea::Learning) => LEARNING_SUGGESTIONS,
        Some(FocusArea::SelfCare) => SELF_CARE_SUGGESTIONS,
        Some(FocusArea::Productivity) | None => PRODUCTIVITY_SUGGESTIONS,
    }
}

/// Last-7-days analysis: star habit, rate feedback, most consistent
/// weekday, neglected habit nudge. Fully deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyReview {
    pub completion_rate: f64,
    pub insights: Vec<String>,
    pub summary: String,
    pub encouragement: &'static str,
}

pub fn weekly_review(habits: &[Habit], logs: &[LogEntry], today: NaiveDate) -> WeeklyReview {
    if logs.is_empty() {
        return WeeklyReview {
            completion_rate: 0.0,
            insights: Vec::new(),
            summary: "Start logging your habits to get personalized insights!".to_string(),
            encouragement: "Every week is a fresh start. You're making progress!",
        };
    }

    let window = dates::last_n_days(today, INSIGHT_WINDOW_DAYS);
    let weekly: Vec<&LogEntry> = logs
        .iter()
        .filter(|log| window.contains(&log.date))
        .collect();
    let completion_rate = stats::window_completion(habits, logs, &window);

    let mut insights = Vec::new();

    // Star habit: most completions this week.
    let star = habits
        .iter()
        .map(|habit| {
            let completions = weekly
                .iter()
                .filter(|log| log.habit_id == habit.id && log.completed)
                .count();
            (habit, completions)
        })
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best });
    if let Some((habit, completions)) = star {
        if completions > 0 {
            insights.push(format!(
                "🌟 \"{}\" is your star habit this week with {completions} completions!",
                habit.name
            ));
        }
    }

    // Completion-rate feedback.
    if completion_rate >= 80.0 {
        insights.push(format!(
            "🔥 Amazing! You're at {completion_rate:.0}% completion this week. Keep this momentum!"
        ));
    } else if completion_rate >= 60.0 {
        insights.push(format!(
            "💪 Good progress at {completion_rate:.0}% completion. You're building consistency!"
        ));
    } else if completion_rate >= 40.0 {
        insights.push(format!(
            "📈 You're at {completion_rate:.0}% this week. Small improvements lead to big results!"
        ));
    } else if completion_rate > 0.0 {
        insights.push(format!(
            "🌱 Starting fresh? {completion_rate:.0}% is a beginning. Every journey starts with a single step!"
        ));
    }

    // Most consistent weekday within the window.
    let best_weekday = window
        .iter()
        .filter_map(|&date| {
            let total = weekly.iter().filter(|log| log.date == date).count();
            if total == 0 {
                return None;
            }
            let completed = weekly
                .iter()
                .filter(|log| log.date == date && log.completed)
                .count();
            Some((dates::weekday_name(date), completed as f64 / total as f64))
        })
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best });
    if let Some((weekday, _)) = best_weekday {
        insights.push(format!(
            "📅 {weekday}s are your most consistent days. Try scheduling important habits then!"
        ));
    }

    // A habit that went untouched all week, unless they all did.
    let missed: Vec<&Habit> = habits
        .iter()
        .filter(|habit| {
            !weekly
                .iter()
                .any(|log| log.habit_id == habit.id && log.completed)
        })
        .collect();
    if !missed.is_empty() && missed.len() < habits.len() {
        if let Some(first) = missed.first() {
            insights.push(format!(
                "💡 \"{}\" needs some attention. Start with just one completion this week!",
                first.name
            ));
        }
    }

    let summary = if insights.is_empty() {
        "Keep tracking to unlock insights!".to_string()
    } else {
        insights.join("\n\n")
    };

    WeeklyReview {
        completion_rate,
        insights,
        summary,
        encouragement: if completion_rate >= 70.0 {
            "Outstanding week! You're building incredible momentum."
        } else {
            "Every week is a fresh start. You're making progress!"
        },
    }
}
