use serde::{Deserialize, Serialize};

/// When the user prefers to work on their habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Routine {
    Morning,
    #[default]
    Flexible,
    Night,
}

/// What the user wants their habits to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusArea {
    #[default]
    Productivity,
    Health,
    Learning,
    #[serde(rename = "Self-care")]
    SelfCare,
}

/// Onboarding profile. Absent until first-run setup completes; replaced
/// wholesale on edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    pub routine: Routine,
    pub focus: FocusArea,
}
