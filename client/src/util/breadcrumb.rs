//! Breadcrumb trail derived from the current path.

#[cfg(test)]
#[path = "breadcrumb_test.rs"]
mod breadcrumb_test;

use percent_encoding::percent_decode_str;

/// One breadcrumb entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    pub is_last: bool,
}

/// Split `path` into cumulative crumbs. `label_override` replaces the label
/// of the last crumb (used to show a board's name instead of its id).
pub fn crumbs(path: &str, label_override: Option<&str>) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let count = segments.len();
    let mut href = String::new();
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            href.push('/');
            href.push_str(segment);
            let is_last = index + 1 == count;
            let label = match label_override {
                Some(label) if is_last => label.to_owned(),
                _ => percent_decode_str(segment).decode_utf8_lossy().into_owned(),
            };
            Crumb { label, href: href.clone(), is_last }
        })
        .collect()
}
