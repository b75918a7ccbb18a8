use crate::constants::*;
use crate::error::AppError;

/// Validate a habit name. Returns the trimmed name if valid.
pub fn validate_habit_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput {
            field: "name",
            reason: "cannot be empty".into(),
        });
    }
    if name.chars().count() > MAX_HABIT_NAME_LEN {
        return Err(AppError::InvalidInput {
            field: "name",
            reason: format!("cannot exceed {MAX_HABIT_NAME_LEN} characters"),
        });
    }
    Ok(name)
}

/// Validate a reminder time (HH:MM, 24-hour format).
pub fn validate_reminder_time(time: &str) -> Result<(), AppError> {
    let err = |reason: &str| AppError::InvalidInput {
        field: "reminder_time",
        reason: reason.into(),
    };

    let Some((hours, minutes)) = time.split_once(':') else {
        return Err(err("must be in HH:MM format"));
    };
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(err("must be in HH:MM format"));
    }

    let hours: u32 = hours.parse().map_err(|_| err("invalid hours"))?;
    let minutes: u32 = minutes.parse().map_err(|_| err("invalid minutes"))?;

    if hours >= 24 {
        return Err(err("hours must be 00-23"));
    }
    if minutes >= 60 {
        return Err(err("minutes must be 00-59"));
    }

    Ok(())
}

/// Validate the free-text goal on a habit. Returns the trimmed goal.
pub fn validate_goal(goal: &str) -> Result<&str, AppError> {
    let goal = goal.trim();
    if goal.chars().count() > MAX_GOAL_LEN {
        return Err(AppError::InvalidInput {
            field: "goal",
            reason: format!("cannot exceed {MAX_GOAL_LEN} characters"),
        });
    }
    Ok(goal)
}

/// Validate the free-text notes on a log entry.
pub fn validate_notes(notes: &str) -> Result<(), AppError> {
    if notes.chars().count() > MAX_NOTES_LEN {
        return Err(AppError::InvalidInput {
            field: "notes",
            reason: format!("cannot exceed {MAX_NOTES_LEN} characters"),
        });
    }
    Ok(())
}
