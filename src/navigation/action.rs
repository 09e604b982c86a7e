//! Callback-token decoding.
//!
//! Tokens arrive as opaque strings baked into previously sent inline
//! keyboards. They are decoded exactly once here into a tagged [`Action`];
//! everything downstream matches on the enum instead of re-parsing strings.

use crate::timetable::Section;

/// One discrete user action, decoded from a command or callback token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Entry action: render the section-selection menu.
    Start,
    /// Record the section in the session and render the view-mode menu.
    SelectSection(Section),
    /// Render the full six-day timetable for the selected section.
    ViewWeek,
    /// Render the current weekday's timetable for the selected section.
    ViewToday,
    /// Render the period-selection menu.
    ViewPeriodMenu,
    /// Render one period's detail for the current weekday.
    SelectPeriod(usize),
}

impl Action {
    /// Decodes a callback token. Unknown tokens (including a `section_`
    /// payload naming an undeclared section) yield `None` and are ignored
    /// by the caller, which tolerates stale buttons from an older render.
    pub fn decode(token: &str) -> Option<Action> {
        match token {
            "view_week" => return Some(Action::ViewWeek),
            "view_today" => return Some(Action::ViewToday),
            "view_period" => return Some(Action::ViewPeriodMenu),
            "back_to_sections" => return Some(Action::Start),
            _ => {}
        }
        if let Some(id) = token.strip_prefix("section_") {
            return Section::parse(id).map(Action::SelectSection);
        }
        if let Some(index) = token.strip_prefix("period_") {
            return index.parse().ok().map(Action::SelectPeriod);
        }
        None
    }

    /// The callback token this action round-trips through.
    pub fn token(&self) -> String {
        match self {
            Action::Start => "back_to_sections".to_string(),
            Action::SelectSection(section) => format!("section_{}", section.id()),
            Action::ViewWeek => "view_week".to_string(),
            Action::ViewToday => "view_today".to_string(),
            Action::ViewPeriodMenu => "view_period".to_string(),
            Action::SelectPeriod(index) => format!("period_{index}"),
        }
    }
}
