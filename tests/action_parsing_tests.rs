use timetable_bot::navigation::Action;
use timetable_bot::timetable::Section;

#[test]
fn decodes_view_mode_tokens() {
    assert_eq!(Action::decode("view_week"), Some(Action::ViewWeek));
    assert_eq!(Action::decode("view_today"), Some(Action::ViewToday));
    assert_eq!(Action::decode("view_period"), Some(Action::ViewPeriodMenu));
    assert_eq!(Action::decode("back_to_sections"), Some(Action::Start));
}

#[test]
fn decodes_section_tokens_for_every_declared_section() {
    for section in Section::ALL {
        let token = format!("section_{}", section.id());
        assert_eq!(Action::decode(&token), Some(Action::SelectSection(section)));
    }
}

#[test]
fn decodes_period_tokens() {
    assert_eq!(Action::decode("period_0"), Some(Action::SelectPeriod(0)));
    assert_eq!(Action::decode("period_7"), Some(Action::SelectPeriod(7)));
}

#[test]
fn rejects_unknown_tokens() {
    assert_eq!(Action::decode(""), None);
    assert_eq!(Action::decode("start"), None);
    assert_eq!(Action::decode("view_month"), None);
    assert_eq!(Action::decode("section_"), None);
    assert_eq!(Action::decode("section_CS9"), None);
    assert_eq!(Action::decode("section_cs1"), None);
    assert_eq!(Action::decode("period_"), None);
    assert_eq!(Action::decode("period_x"), None);
    assert_eq!(Action::decode("period_-1"), None);
    assert_eq!(Action::decode("settings:timezone"), None);
}

#[test]
fn tokens_round_trip_through_decode() {
    let actions = [
        Action::Start,
        Action::SelectSection(Section::Cs4),
        Action::ViewWeek,
        Action::ViewToday,
        Action::ViewPeriodMenu,
        Action::SelectPeriod(5),
    ];
    for action in actions {
        assert_eq!(Action::decode(&action.token()), Some(action));
    }
}
