//! Read-only timetable store: sections, teaching days, period metadata and
//! per-day subject sequences. Built once at startup and never mutated.

mod data;

use std::collections::HashMap;
use std::fmt;

use chrono::Weekday;

/// Sentinel returned for a period index beyond a day's schedule.
pub const NO_CLASS: &str = "No class";

/// An academic section with its own weekly timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Cs1,
    Cs2,
    Cs3,
    Cs4,
    Ai,
    Ds,
}

impl Section {
    /// Declared sections in menu order.
    pub const ALL: [Section; 6] = [
        Section::Cs1,
        Section::Cs2,
        Section::Cs3,
        Section::Cs4,
        Section::Ai,
        Section::Ds,
    ];

    /// Stable identifier used in display text and callback tokens.
    pub fn id(self) -> &'static str {
        match self {
            Section::Cs1 => "CS1",
            Section::Cs2 => "CS2",
            Section::Cs3 => "CS3",
            Section::Cs4 => "CS4",
            Section::Ai => "AI",
            Section::Ds => "DS",
        }
    }

    /// Parses a section identifier; unknown ids are rejected rather than
    /// mapped to a fallback, since navigation must never carry an
    /// undeclared section.
    pub fn parse(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Whether this section's timetable entries are abbreviated subject
    /// codes with registered full names.
    pub fn uses_subject_codes(self) -> bool {
        matches!(self, Section::Cs4)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A teaching day. Sunday has no schedule and is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// Teaching days in week order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Returns `None` for Sunday.
    pub fn from_weekday(weekday: Weekday) -> Option<Day> {
        match weekday {
            Weekday::Mon => Some(Day::Monday),
            Weekday::Tue => Some(Day::Tuesday),
            Weekday::Wed => Some(Day::Wednesday),
            Weekday::Thu => Some(Day::Thursday),
            Weekday::Fri => Some(Day::Friday),
            Weekday::Sat => Some(Day::Saturday),
            Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// In-memory timetable lookups. One instance is built at startup and shared
/// behind the navigator.
#[derive(Debug)]
pub struct TimetableStore {
    time_slots: HashMap<&'static str, &'static str>,
    subject_info: HashMap<&'static str, &'static str>,
}

impl TimetableStore {
    pub fn new() -> Self {
        Self {
            time_slots: data::TIME_SLOTS.into_iter().collect(),
            subject_info: data::SUBJECT_INFO.into_iter().collect(),
        }
    }

    /// Declared sections in declaration order.
    pub fn sections(&self) -> &'static [Section] {
        &Section::ALL
    }

    /// Ordered subjects for one section/day. The slice length varies per
    /// section/day; trailing periods without an entry have no class.
    pub fn day_schedule(&self, section: Section, day: Day) -> &'static [&'static str] {
        data::schedule(section, day)
    }

    /// Subject at a period index, or [`NO_CLASS`] when the index is beyond
    /// the day's schedule.
    pub fn subject_at(&self, section: Section, day: Day, index: usize) -> &'static str {
        self.day_schedule(section, day)
            .get(index)
            .copied()
            .unwrap_or(NO_CLASS)
    }

    /// Number of globally declared periods.
    pub fn period_count(&self) -> usize {
        data::PERIODS.len()
    }

    /// Display label for a period index; undeclared indexes synthesize a
    /// numbered label so future periods render without a data change.
    pub fn period_label(&self, index: usize) -> String {
        data::PERIODS
            .get(index)
            .map(|label| (*label).to_string())
            .unwrap_or_else(|| format!("Period {}", index + 1))
    }

    /// Wall-clock range for a period label; undeclared labels synthesize an
    /// incrementing hour range from the period index.
    pub fn time_slot(&self, label: &str, index: usize) -> String {
        self.time_slots
            .get(label)
            .map(|slot| (*slot).to_string())
            .unwrap_or_else(|| format!("{}:00 - {}:00", 9 + index, 10 + index))
    }

    /// Full descriptive name for an abbreviated subject code. Most subjects
    /// have no registered expansion; a miss is a normal outcome.
    pub fn subject_full_name(&self, code: &str) -> Option<&'static str> {
        self.subject_info.get(code).copied()
    }
}

impl Default for TimetableStore {
    fn default() -> Self {
        Self::new()
    }
}
