// tests/layout.rs
//
// Row/column arithmetic of layout::layout.
//
use timetable_grid::layout::{layout, week_base_row, LayoutResult, StyleTag};
use timetable_grid::schedule::{group, RawSessionRow, Schedule};

fn row(weekday: u8, pair: u8, time: &str, date: &str, subject: &str) -> RawSessionRow {
    RawSessionRow {
        weekday,
        pair_number: pair,
        pair_time: time.into(),
        date: date.into(),
        lesson_type: "Lecture".into(),
        subject: subject.into(),
        teacher: "A".into(),
        address: "101".into(),
    }
}

fn build(rows: &[RawSessionRow]) -> (Schedule, LayoutResult) {
    let s = group(rows).unwrap();
    let l = layout(&s);
    (s, l)
}

fn value(l: &LayoutResult, r: u32, c: u16) -> Option<(&str, StyleTag)> {
    l.cell(r, c).map(|p| (p.value.as_str(), p.style))
}

#[test]
fn two_pairs_on_monday() {
    let rows = vec![
        row(1, 1, "9:00", "2020-02-03", "Math"),
        row(1, 2, "10:40", "2020-02-03", "Physics"),
    ];
    let (s, l) = build(&rows);
    assert_eq!(s.weeks()[0].days[0].dates[0].sessions.len(), 2);

    assert_eq!(value(&l, 1, 1), Some(("Понедельник, 2020-02-03", StyleTag::WeekdayHeader)));
    assert_eq!(value(&l, 2, 1), Some(("1 9:00", StyleTag::PairHeader)));
    assert_eq!(value(&l, 3, 1), Some(("Lecture", StyleTag::None)));
    assert_eq!(value(&l, 4, 1), Some(("Math", StyleTag::None)));
    assert_eq!(value(&l, 5, 1), Some(("A", StyleTag::None)));
    assert_eq!(value(&l, 6, 1), Some(("101", StyleTag::None)));
    assert_eq!(value(&l, 7, 1), Some(("2 10:40", StyleTag::PairHeader)));
    assert_eq!(value(&l, 9, 1), Some(("Physics", StyleTag::None)));
    assert_eq!(l.final_row, 11);
}

#[test]
fn pair_rows_are_addressed_by_number() {
    // Only pair 3: header at cursor + 10, details right below
    let (_, l) = build(&[row(2, 3, "13:00", "2020-02-04", "Chem")]);
    let cursor = 2; // header at 1, sessions start one row below
    assert_eq!(value(&l, cursor + 10, 2), Some(("3 13:00", StyleTag::PairHeader)));
    for r in cursor + 11..=cursor + 14 {
        assert_eq!(l.cell(r, 2).map(|p| p.style), Some(StyleTag::None));
    }
    assert!(l.cell(cursor, 2).is_none());
    assert_eq!(l.final_row, cursor + 14);
}

#[test]
fn weeks_use_disjoint_bands() {
    let rows = vec![
        row(1, 5, "18:00", "2020-02-03", "a"),
        row(6, 5, "18:00", "2020-02-08", "b"),
        row(1, 1, "9:00", "2020-02-10", "c"),
        row(1, 1, "9:00", "2020-02-17", "d"),
    ];
    // weekdays 1,6,1,1: boundaries before rows 2 only (1 → 1 does not advance)
    let (s, l) = build(&rows);
    assert_eq!(s.weeks().len(), 2);

    assert_eq!(week_base_row(0), 1);
    assert_eq!(week_base_row(1), 27);
    assert_eq!(week_base_row(2), 53);

    // Week 0 content ends before week 1 begins
    let week0_max = l.placements.iter().filter(|p| p.row < 27).map(|p| p.row).max().unwrap();
    assert!(week0_max <= 26);
    assert_eq!(week0_max, 1 + 1 + 4 * 5 + 4);
    assert_eq!(value(&l, 27, 1).map(|v| v.1), Some(StyleTag::WeekdayHeader));
}

#[test]
fn band_ranges_never_overlap() {
    for a in 0..10usize {
        for b in (a + 1)..10 {
            let (ra, rb) = (week_base_row(a), week_base_row(b));
            assert!(ra + 26 <= rb, "weeks {a} and {b} overlap");
        }
    }
}

#[test]
fn second_date_on_same_weekday_shifts_one_row() {
    // Two Mondays without an intervening later weekday land in one week
    let rows = vec![
        row(1, 1, "9:00", "2020-02-03", "a"),
        row(1, 1, "9:00", "2020-02-10", "b"),
    ];
    let (_, l) = build(&rows);

    // first date: header 1, pair 1 at 2; second date: header 2, pair 1 at 3
    assert_eq!(l.placements[0].row, 1);
    assert_eq!(l.placements[1].row, 2);
    let second_header = l
        .placements
        .iter()
        .find(|p| p.value == "Понедельник, 2020-02-10")
        .unwrap();
    assert_eq!(second_header.row, 2);
    assert_eq!(value(&l, 2, 1), Some(("Понедельник, 2020-02-10", StyleTag::WeekdayHeader)));
    assert_eq!(value(&l, 3, 1), Some(("1 9:00", StyleTag::PairHeader)));
}

#[test]
fn duplicate_pair_numbers_last_write_wins() {
    let rows = vec![
        row(5, 2, "10:40", "2020-02-07", "first"),
        row(5, 2, "10:40", "2020-02-07", "second"),
    ];
    let (_, l) = build(&rows);

    // Both sessions emitted, same five rows
    assert_eq!(l.placements.len(), 1 + 5 + 5);
    assert_eq!(value(&l, 9, 5), Some(("second", StyleTag::None)));
    assert_eq!(l.resolved().len(), 1 + 5);
}

#[test]
fn columns_follow_weekdays() {
    let (_, l) = build(&[row(4, 1, "9:00", "2020-02-06", "x")]);
    assert!(l.placements.iter().all(|p| p.column == 4));
    assert_eq!((l.first_column, l.last_column), (1, 6));

    let (_, l) = build(&[row(7, 1, "9:00", "2020-02-09", "x")]);
    assert_eq!(l.last_column, 7);
    assert_eq!(value(&l, 1, 7).map(|v| v.0), Some("Воскресенье, 2020-02-09"));
}

#[test]
fn empty_schedule_places_nothing() {
    let l = layout(&Schedule::default());
    assert!(l.is_empty());
    assert_eq!(l.final_row, 0);
    assert_eq!((l.first_column, l.last_column), (1, 6));
}

#[test]
fn repeated_runs_are_identical() {
    let rows = vec![
        row(1, 1, "9:00", "2020-02-03", "a"),
        row(3, 4, "15:00", "2020-02-05", "b"),
        row(1, 2, "10:40", "2020-02-10", "c"),
    ];
    let (s1, l1) = build(&rows);
    let (s2, l2) = build(&rows);
    assert_eq!(s1, s2);
    assert_eq!(l1, l2);
}
