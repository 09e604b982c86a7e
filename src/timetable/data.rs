//! Static timetable data for the SCMS School of Engineering and Technology.
//!
//! Row lengths intentionally vary per section/day (they mirror the
//! institution's published timetable); lookups must treat a missing trailing
//! period as "no class" rather than an error.

use super::{Day, Section};

/// Global period labels shared by every section and day.
pub(crate) const PERIODS: [&str; 8] = [
    "Period 1",
    "Period 2",
    "Period 3",
    "Period 4",
    "Lunch Break",
    "Period 5",
    "Period 6",
    "Period 7",
];

/// Wall-clock ranges for the declared period labels.
pub(crate) const TIME_SLOTS: [(&str, &str); 8] = [
    ("Period 1", "8:45 - 9:35"),
    ("Period 2", "9:35 - 10:25"),
    ("Period 3", "10:35 - 11:30"),
    ("Period 4", "11:30 - 12:20"),
    ("Lunch Break", "12:20 - 1:05"),
    ("Period 5", "1:05 - 1:55"),
    ("Period 6", "2:05 - 2:55"),
    ("Period 7", "2:55 - 3:45"),
];

/// Full names for CS4's abbreviated subject codes.
pub(crate) const SUBJECT_INFO: [(&str, &str); 8] = [
    ("MPMC", "Microprocessors and Microcontrollers (CST 307)"),
    ("SS", "System Software (CST 305)"),
    ("CN", "Computer Networks (CST 303)"),
    ("FLAT", "Formal Languages and Automata Theory (CST 301)"),
    ("MSS", "Management of Software Systems (CST 309)"),
    ("DM", "Disaster Management (MCN301)"),
    ("SS/DMS Lab", "System Software and Database Management Systems Lab"),
    ("No Classes", "No Classes Scheduled"),
];

pub(crate) fn schedule(section: Section, day: Day) -> &'static [&'static str] {
    use Day::*;
    use Section::*;

    match (section, day) {
        (Cs1, Monday) => &["Math", "Physics", "Programming", "Break", "Database", "Network", "Lab"],
        (Cs1, Tuesday) => &["Database", "Math", "OS", "Break", "Programming", "Physics", "Lab"],
        (Cs1, Wednesday) => &["Network", "Database", "Math", "Break", "OS", "Programming", "Lab"],
        (Cs1, Thursday) => &["Programming", "Network", "Physics", "Break", "Math", "Database", "Lab"],
        (Cs1, Friday) => &["OS", "Programming", "Network", "Break", "Physics", "Math", "Lab"],
        (Cs1, Saturday) => &["Physics", "OS", "Database", "Break", "Network", "Programming", "Lab"],

        (Cs2, Monday) => &["Database", "Programming", "Math", "Break", "Physics", "OS", "Lab"],
        (Cs2, Tuesday) => &["Math", "Database", "Network", "Break", "Programming", "Physics", "Lab"],
        (Cs2, Wednesday) => &["Programming", "Math", "Database", "Break", "Network", "OS", "Lab"],
        (Cs2, Thursday) => &["Physics", "Programming", "Math", "Break", "Database", "Network", "Lab"],
        (Cs2, Friday) => &["Network", "Physics", "OS", "Break", "Math", "Database", "Lab"],
        (Cs2, Saturday) => &["OS", "Network", "Programming", "Break", "Physics", "Math", "Lab"],

        (Cs3, Monday) => &["AI", "Database", "Programming", "Break", "Math", "Network", "Lab"],
        (Cs3, Tuesday) => &["Programming", "AI", "Math", "Break", "Database", "OS", "Lab"],
        (Cs3, Wednesday) => &["Math", "Programming", "AI", "Break", "Network", "Database", "Lab"],
        (Cs3, Thursday) => &["Database", "Math", "Programming", "Break", "AI", "Network", "Lab"],
        (Cs3, Friday) => &["Network", "Database", "AI", "Break", "Programming", "Math", "Lab"],
        (Cs3, Saturday) => &["OS", "Network", "Database", "Break", "AI", "Programming", "Lab"],

        (Cs4, Monday) => &["MPMC", "SS", "CN", "FLAT", "Lunch Break", "SS/DMS Lab", "Lab"],
        (Cs4, Tuesday) => &["MPMC", "CN", "DM", "MPMC", "Lunch Break", "SS", "MSS", "SS"],
        (Cs4, Wednesday) => &["FLAT", "MSS", "FLAT", "MPMC", "Lunch Break", "DM", "MPMC", "CN"],
        (Cs4, Thursday) => &["CN", "SS/DMS Lab", "Lunch Break", "FLAT", "CN", "DM"],
        (Cs4, Friday) => &["SS", "MPMC", "FLAT", "SS", "Lunch Break", "MSS", "CN", "FLAT"],
        (Cs4, Saturday) => &[
            "No Classes",
            "No Classes",
            "No Classes",
            "No Classes",
            "No Classes",
            "No Classes",
            "No Classes",
        ],

        (Ai, Monday) => &["ML", "Deep Learning", "Math", "Break", "Statistics", "Programming", "Lab"],
        (Ai, Tuesday) => &["Statistics", "ML", "Deep Learning", "Break", "Math", "Programming", "Lab"],
        (Ai, Wednesday) => &["Programming", "Statistics", "ML", "Break", "Deep Learning", "Math", "Lab"],
        (Ai, Thursday) => &["Deep Learning", "Programming", "Statistics", "Break", "ML", "Math", "Lab"],
        (Ai, Friday) => &["Math", "Deep Learning", "Programming", "Break", "Statistics", "ML", "Lab"],
        (Ai, Saturday) => &["ML", "Math", "Deep Learning", "Break", "Programming", "Statistics", "Lab"],

        (Ds, Monday) => &["Statistics", "Data Mining", "Programming", "Break", "Math", "Visualization", "Lab"],
        (Ds, Tuesday) => &["Programming", "Statistics", "Data Mining", "Break", "Visualization", "Math", "Lab"],
        (Ds, Wednesday) => &["Math", "Programming", "Statistics", "Break", "Data Mining", "Visualization", "Lab"],
        (Ds, Thursday) => &["Data Mining", "Math", "Programming", "Break", "Statistics", "Visualization", "Lab"],
        (Ds, Friday) => &["Visualization", "Data Mining", "Math", "Break", "Programming", "Statistics", "Lab"],
        (Ds, Saturday) => &["Statistics", "Visualization", "Data Mining", "Break", "Math", "Programming", "Lab"],
    }
}
