// src/schedule/types.rs
use serde::Serialize;

/// Day of the week as numbered by the timetable site (Monday = 1 … Sunday = 7).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=7 => Some(Self::ALL[usize::from(n) - 1]),
            _ => None,
        }
    }

    #[inline]
    pub fn number(self) -> u8 { self as u8 }

    /// Display name used in the sheet's day headers.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Понедельник",
            Weekday::Tuesday => "Вторник",
            Weekday::Wednesday => "Среда",
            Weekday::Thursday => "Четверг",
            Weekday::Friday => "Пятница",
            Weekday::Saturday => "Суббота",
            Weekday::Sunday => "Воскресенье",
        }
    }
}

/// One `<tr class="pair">` as read from the page, before any validation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RawSessionRow {
    pub weekday: u8,
    pub pair_number: u8,
    pub pair_time: String,
    /// `YYYY-MM-DD`-shaped display text, never parsed as a date.
    pub date: String,
    pub lesson_type: String,
    pub subject: String,
    pub teacher: String,
    pub address: String,
}

/// A lesson filed under its week, weekday and date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Session {
    pub pair_number: u8,
    pub pair_time: String,
    pub lesson_type: String,
    pub subject: String,
    pub teacher: String,
    pub address: String,
}

impl From<&RawSessionRow> for Session {
    fn from(row: &RawSessionRow) -> Self {
        Self {
            pair_number: row.pair_number,
            pair_time: row.pair_time.clone(),
            lesson_type: row.lesson_type.clone(),
            subject: row.subject.clone(),
            teacher: row.teacher.clone(),
            address: row.address.clone(),
        }
    }
}

/// Sessions sharing one date, in table order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateBlock {
    pub date: String,
    pub sessions: Vec<Session>,
}

/// One weekday within a week; dates keep the order they were first seen in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Day {
    pub weekday: Weekday,
    pub dates: Vec<DateBlock>,
}

impl Day {
    fn date_mut(&mut self, date: &str) -> &mut DateBlock {
        let ix = match self.dates.iter().position(|d| d.date == date) {
            Some(ix) => ix,
            None => {
                self.dates.push(DateBlock { date: s!(date), sessions: Vec::new() });
                self.dates.len() - 1
            }
        };
        &mut self.dates[ix]
    }
}

/// One calendar week; weekdays keep the order they were first seen in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Week {
    pub number: usize,
    pub days: Vec<Day>,
}

impl Week {
    pub fn day(&self, weekday: Weekday) -> Option<&Day> {
        self.days.iter().find(|d| d.weekday == weekday)
    }

    fn day_mut(&mut self, weekday: Weekday) -> &mut Day {
        let ix = match self.days.iter().position(|d| d.weekday == weekday) {
            Some(ix) => ix,
            None => {
                self.days.push(Day { weekday, dates: Vec::new() });
                self.days.len() - 1
            }
        };
        &mut self.days[ix]
    }
}

/// week → weekday → date → sessions.
///
/// Only `group` builds one, so every session in it has a valid weekday and
/// a pair number within `1..=MAX_PAIRS_PER_DAY`.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Schedule {
    weeks: Vec<Week>,
}

impl Schedule {
    pub fn weeks(&self) -> &[Week] { &self.weeks }

    pub fn week(&self, number: usize) -> Option<&Week> { self.weeks.get(number) }

    pub fn is_empty(&self) -> bool { self.weeks.is_empty() }

    /// Sessions at `(week, weekday, date)`, if that bucket exists.
    pub fn sessions(&self, week: usize, weekday: Weekday, date: &str) -> Option<&[Session]> {
        self.week(week)?
            .day(weekday)?
            .dates
            .iter()
            .find(|d| d.date == date)
            .map(|d| d.sessions.as_slice())
    }

    pub fn session_count(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|w| &w.days)
            .flat_map(|d| &d.dates)
            .map(|d| d.sessions.len())
            .sum()
    }

    /// Highest weekday present anywhere, if any.
    pub fn max_weekday(&self) -> Option<Weekday> {
        self.weeks.iter().flat_map(|w| &w.days).map(|d| d.weekday).max()
    }

    /// Append `session` to `[week][weekday][date]`, creating containers on first use.
    /// Weeks are dense: filing into week `n` creates any missing weeks before it.
    pub(crate) fn file(&mut self, week: usize, weekday: Weekday, date: &str, session: Session) {
        while self.weeks.len() <= week {
            let number = self.weeks.len();
            self.weeks.push(Week { number, days: Vec::new() });
        }
        self.weeks[week].day_mut(weekday).date_mut(date).sessions.push(session);
    }
}
