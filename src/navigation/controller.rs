//! The navigation state machine: owns per-conversation session records and
//! renders each menu or content view as a transport-independent [`Reply`].

use std::sync::Arc;

use dashmap::DashMap;

use crate::navigation::Action;
use crate::services::clock::{weekday_name, Clock};
use crate::timetable::{Day, Section, TimetableStore};

/// Identifies one conversation with the transport (the Telegram chat id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId(pub i64);

/// Ephemeral per-conversation state. Created on first interaction,
/// overwritten on re-selection, never persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub section: Option<Section>,
}

/// One selectable next action offered with a rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub token: String,
}

impl Button {
    fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// A rendered response: text plus the ordered actions to offer next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub buttons: Vec<Button>,
}

/// Walks a conversation through the section → view-mode → content menus.
/// Session records are scoped per conversation; the transport serializes
/// actions within one conversation, so no record sees concurrent writes.
pub struct Navigator {
    store: TimetableStore,
    clock: Arc<dyn Clock>,
    sessions: DashMap<ConversationId, SessionState>,
}

impl Navigator {
    pub fn new(store: TimetableStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            sessions: DashMap::new(),
        }
    }

    /// Applies one decoded action for one conversation and returns the next
    /// render. Re-issuing the same action reproduces the same reply from
    /// the same session state and clock weekday.
    pub fn handle(&self, conversation: ConversationId, action: Action) -> Reply {
        match action {
            Action::Start => self.start_menu(),
            Action::SelectSection(section) => {
                self.sessions.entry(conversation).or_default().section = Some(section);
                self.section_menu(section)
            }
            Action::ViewWeek => match self.selected_section(conversation) {
                Some(section) => self.week_view(section),
                None => guard_notice(),
            },
            Action::ViewToday => match self.selected_section(conversation) {
                Some(section) => self.today_view(section),
                None => guard_notice(),
            },
            // The period menu's back button targets the section menu, so it
            // needs a selection as well.
            Action::ViewPeriodMenu => match self.selected_section(conversation) {
                Some(section) => self.period_menu(section),
                None => guard_notice(),
            },
            Action::SelectPeriod(index) => match self.selected_section(conversation) {
                Some(section) => self.period_detail(section, index),
                None => guard_notice(),
            },
        }
    }

    fn selected_section(&self, conversation: ConversationId) -> Option<Section> {
        self.sessions.get(&conversation).and_then(|s| s.section)
    }

    fn start_menu(&self) -> Reply {
        let buttons = self
            .store
            .sections()
            .iter()
            .map(|&section| Button::new(section.id(), Action::SelectSection(section).token()))
            .collect();
        Reply {
            text: "🎓 Welcome to Department Timetable Bot!\n\nPlease select your section:"
                .to_string(),
            buttons,
        }
    }

    fn section_menu(&self, section: Section) -> Reply {
        Reply {
            text: format!("📚 Section: {section}\n\nWhat would you like to view?"),
            buttons: vec![
                Button::new("📅 Full Week Timetable", Action::ViewWeek.token()),
                Button::new("📋 Today's Timetable", Action::ViewToday.token()),
                Button::new("🕐 Specific Period", Action::ViewPeriodMenu.token()),
                Button::new("🔙 Back to Sections", Action::Start.token()),
            ],
        }
    }

    fn week_view(&self, section: Section) -> Reply {
        let mut text = format!("📅 {section} - Full Week Timetable\n\n");
        for day in Day::ALL {
            text.push_str(&format!("{day}:\n"));
            for (index, subject) in self.store.day_schedule(section, day).iter().enumerate() {
                let label = self.store.period_label(index);
                let slot = self.store.time_slot(&label, index);
                text.push_str(&format!("  {label} ({slot}): {subject}\n"));
            }
            text.push('\n');
        }
        Reply {
            text,
            buttons: vec![back_to_section_menu(section)],
        }
    }

    fn today_view(&self, section: Section) -> Reply {
        let weekday = self.clock.current_weekday();
        let text = match Day::from_weekday(weekday) {
            None => format!(
                "📋 {section} - {}\n\nNo classes today! 🎉",
                weekday_name(weekday)
            ),
            Some(day) => {
                let mut text = format!("📋 {section} - {day}\n\n");
                for (index, subject) in self.store.day_schedule(section, day).iter().enumerate() {
                    let label = self.store.period_label(index);
                    let slot = self.store.time_slot(&label, index);
                    text.push_str(&format!("{label} ({slot}): {subject}\n"));
                }
                text
            }
        };
        Reply {
            text,
            buttons: vec![back_to_section_menu(section)],
        }
    }

    fn period_menu(&self, section: Section) -> Reply {
        let mut buttons: Vec<Button> = (0..self.store.period_count())
            .map(|index| {
                Button::new(
                    self.store.period_label(index),
                    Action::SelectPeriod(index).token(),
                )
            })
            .collect();
        buttons.push(back_to_section_menu(section));
        Reply {
            text: "🕐 Select a period to view:".to_string(),
            buttons,
        }
    }

    fn period_detail(&self, section: Section, index: usize) -> Reply {
        let weekday = self.clock.current_weekday();
        let label = self.store.period_label(index);
        let slot = self.store.time_slot(&label, index);
        let (day_name, subject) = match Day::from_weekday(weekday) {
            Some(day) => (day.name(), self.store.subject_at(section, day, index)),
            None => (weekday_name(weekday), "No classes today!"),
        };

        let mut text = format!(
            "🕐 {section} - {label}\n\n📅 Day: {day_name}\n⏰ Time: {slot}\n📚 Subject: {subject}\n"
        );
        if section.uses_subject_codes() {
            if let Some(full_name) = self.store.subject_full_name(subject) {
                text.push_str(&format!("📖 Full Name: {full_name}"));
            }
        }

        Reply {
            text,
            buttons: vec![
                Button::new("🔙 Back to Periods", Action::ViewPeriodMenu.token()),
                Button::new("🏠 Main Menu", Action::SelectSection(section).token()),
            ],
        }
    }
}

fn back_to_section_menu(section: Section) -> Button {
    Button::new("🔙 Back", Action::SelectSection(section).token())
}

fn guard_notice() -> Reply {
    Reply {
        text: "Please select a section first.".to_string(),
        buttons: Vec::new(),
    }
}
