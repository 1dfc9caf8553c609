use super::{FileRecord, SortKey};
use std::cmp::Ordering;

/// One maximal run of a file name
#[derive(Debug, Clone)]
enum Run {
    /// Non-digit text, lowercased
    Text(String),
    /// ASCII digits with leading zeros stripped
    Digits(String),
}

/// Sort key implementing natural order over a name.
///
/// Only ASCII digits `0-9` form numeric runs. Other Unicode digits, such
/// as Arabic-Indic or fullwidth ones, are compared as text.
///
/// Runs always alternate starting with a (possibly empty) text run, so
/// position `i` holds the same kind of run in every key and "1a" lines up
/// against "a1" as `["", 1, "a"]` vs `["a", 1]`.
#[derive(Debug, Clone)]
pub struct NaturalKey(Vec<Run>);

impl NaturalKey {
    pub fn new(name: &str) -> Self {
        let mut runs = Vec::new();
        let mut pos = 0;

        loop {
            let text_end = name[pos..]
                .find(|c: char| c.is_ascii_digit())
                .map_or(name.len(), |i| pos + i);
            runs.push(Run::Text(name[pos..text_end].to_lowercase()));
            if text_end == name.len() {
                break;
            }

            let digits_end = name[text_end..]
                .find(|c: char| !c.is_ascii_digit())
                .map_or(name.len(), |i| text_end + i);
            let digits = name[text_end..digits_end].trim_start_matches('0');
            runs.push(Run::Digits(digits.to_string()));
            pos = digits_end;
            if pos == name.len() {
                break;
            }
        }

        NaturalKey(runs)
    }
}

fn cmp_run(a: &Run, b: &Run) -> Ordering {
    match (a, b) {
        (Run::Text(a), Run::Text(b)) => a.cmp(b),
        // Without leading zeros, a longer run is a larger number
        (Run::Digits(a), Run::Digits(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (Run::Text(_), Run::Digits(_)) => Ordering::Less,
        (Run::Digits(_), Run::Text(_)) => Ordering::Greater,
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| cmp_run(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| self.0.len().cmp(&other.0.len()))
    }
}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NaturalKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NaturalKey {}

/// Compares two names in natural order, so "file2" sorts before "file10"
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    NaturalKey::new(a).cmp(&NaturalKey::new(b))
}

/// Returns `files` in a stable ascending order selected by `key`.
///
/// Records that compare equal keep their input order, which keeps plans
/// reproducible for the same directory snapshot.
pub fn order(files: &[FileRecord], key: SortKey) -> Vec<FileRecord> {
    let mut ordered = files.to_vec();

    match key {
        SortKey::ByName => ordered.sort_by_cached_key(|f| NaturalKey::new(&f.name)),
        SortKey::ByModifiedTime => ordered.sort_by(|a, b| a.modified.cmp(&b.modified)),
        SortKey::ByCreatedTime => ordered.sort_by(|a, b| a.created.cmp(&b.created)),
        SortKey::BySize => ordered.sort_by(|a, b| a.size.cmp(&b.size)),
    }

    ordered
}
