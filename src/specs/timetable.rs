// src/specs/timetable.rs
//
// Page shape (one row per lesson, document order is chronological):
//
//   <form …><select name="schet"><option value="205.1920/2" selected>…</select></form>
//   <table class="simple-little-table">
//     <tr class="pair" weekday="1" pair="1 (09:00-10:35)">
//       <td>2020-02-03 …</td>
//       <td><span class="type">…</span> <span class="subect">…</span>
//           <span class="teacher">…</span> <span class="aud">…</span></td>
//     </tr>
//
// `subect` is the site's spelling.

use crate::config::consts::{DATE_LEN, ROW_CLASS, TABLE_CLASS};
use crate::config::options::FetchOptions;
use crate::core::html::{
    attr, blocks_with_class, next_block_with_class, next_open_tag_ci, next_tag_block_ci,
    open_tag, text_of,
};
use crate::core::net::HttpSession;
use crate::core::sanitize::{leading_chars, strip_parens};
use crate::error::{Error, InvalidRowError, InvalidRowReason, Result};
use crate::schedule::RawSessionRow;

/// GET the page for its preselected term, then POST the form for the table.
pub fn fetch_page(session: &HttpSession, opts: &FetchOptions) -> Result<String> {
    let landing = session.get(&opts.url)?;

    let term = match &opts.term {
        Some(t) => t.clone(),
        None => extract_term(&landing)
            .ok_or_else(|| Error::Markup(s!("no preselected term in the timetable form")))?,
    };
    logf!("Fetch: term={} faculty={} group={} course={}", term, opts.faculty, opts.group, opts.course);

    session.post_form(&opts.url, &opts.form(&term))
}

/// Value of the first selected `<option>` in any `<form>`, in document order.
/// Login or search forms ahead of the timetable form are skipped over.
pub fn extract_term(html: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((form_s, form_e)) = next_tag_block_ci(html, "form", pos) {
        if let Some(term) = selected_option(&html[form_s..form_e]) {
            return Some(term);
        }
        pos = form_e;
    }
    None
}

fn selected_option(form: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((start, open_end)) = next_open_tag_ci(form, "option", pos) {
        let tag = &form[start..open_end];
        if attr(tag, "selected").is_some() {
            return attr(tag, "value");
        }
        pos = open_end;
    }
    None
}

/// Every `tr.pair` of the timetable table, in document order.
pub fn extract_rows(html: &str) -> Result<Vec<RawSessionRow>> {
    let (tbl_s, tbl_e) = next_block_with_class(html, "table", TABLE_CLASS, 0)
        .ok_or_else(|| Error::Markup(format!("table.{TABLE_CLASS} not found")))?;
    let table = &html[tbl_s..tbl_e];

    let rows = blocks_with_class(table, "tr", ROW_CLASS)
        .into_iter()
        .enumerate()
        .map(|(index, tr)| parse_row(tr).map_err(|reason| InvalidRowError::new(index, reason)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    logf!("Extract: {} rows", rows.len());
    Ok(rows)
}

fn parse_row(tr: &str) -> std::result::Result<RawSessionRow, InvalidRowReason> {
    let tag = open_tag(tr);

    let weekday_raw = attr(tag, "weekday").ok_or(InvalidRowReason::MissingAttribute("weekday"))?;
    let weekday = weekday_raw
        .trim()
        .parse::<u8>()
        .map_err(|_| InvalidRowReason::UnparsableWeekday(weekday_raw.clone()))?;

    let pair_raw = attr(tag, "pair").ok_or(InvalidRowReason::MissingAttribute("pair"))?;
    let (pair_number, pair_time) = parse_pair(&pair_raw)?;

    let date = next_tag_block_ci(tr, "td", 0)
        .map(|(s, e)| leading_chars(&text_of(&tr[s..e]), DATE_LEN))
        .ok_or(InvalidRowReason::MissingField("date"))?;

    Ok(RawSessionRow {
        weekday,
        pair_number,
        pair_time,
        date,
        lesson_type: span_text(tr, "type", "type")?,
        subject: span_text(tr, "subect", "subject")?,
        teacher: span_text(tr, "teacher", "teacher")?,
        address: span_text(tr, "aud", "address")?,
    })
}

/// `"3 (13:00-14:35)"` → `(3, "13:00-14:35")`
pub fn parse_pair(raw: &str) -> std::result::Result<(u8, String), InvalidRowReason> {
    let raw_trim = raw.trim();
    let (num, rest) = raw_trim.split_once(char::is_whitespace).unwrap_or((raw_trim, ""));
    let number = num
        .parse::<u8>()
        .map_err(|_| InvalidRowReason::UnparsablePair(s!(raw)))?;
    Ok((number, strip_parens(rest)))
}

/// Text of `span.<class>`; a missing span is reported under `field`.
fn span_text(tr: &str, class: &str, field: &'static str) -> std::result::Result<String, InvalidRowReason> {
    next_block_with_class(tr, "span", class, 0)
        .map(|(s, e)| text_of(&tr[s..e]))
        .ok_or(InvalidRowReason::MissingField(field))
}
