//! Natural ("human") ordering: digit runs compare by value, so
//! `scaffold_9` sorts before `scaffold_10`.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

fn chunker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+|\D+").expect("static regex"))
}

#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Number(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> impl Iterator<Item = Chunk<'_>> {
    chunker().find_iter(s).map(|m| {
        let t = m.as_str();
        if t.as_bytes()[0].is_ascii_digit() {
            Chunk::Number(t)
        } else {
            Chunk::Text(t)
        }
    })
}

/// Compare two digit runs by value without parsing (no overflow on long runs).
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let at = a.trim_start_matches('0');
    let bt = b.trim_start_matches('0');
    at.len()
        .cmp(&bt.len())
        .then_with(|| at.cmp(bt))
        // "01" after "1"
        .then_with(|| a.len().cmp(&b.len()))
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = chunks(a);
    let mut bi = chunks(b);
    loop {
        let ord = match (ai.next(), bi.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Chunk::Number(x)), Some(Chunk::Number(y))) => cmp_digits(x, y),
            (Some(Chunk::Text(x)), Some(Chunk::Text(y))) => x.cmp(y),
            (Some(Chunk::Number(_)), Some(Chunk::Text(_))) => Ordering::Less,
            (Some(Chunk::Text(_)), Some(Chunk::Number(_))) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

/// Sort in place, then drop duplicates.
pub fn natural_sort_dedup(names: &mut Vec<String>) {
    names.sort_by(|a, b| natural_cmp(a, b));
    names.dedup();
}
