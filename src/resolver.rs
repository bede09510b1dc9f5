//! Field resolver: the single place missing-data policy lives. Templates
//! address the merged binding value with dot/bracket paths; any absent
//! segment degrades to a layout-preserving placeholder. Resolution never
//! fails, no matter how many levels of the record are missing.

use serde_json::Value;

/// Non-breaking space: keeps the line box at full height so a form with
/// absent fields prints with the same geometry as a fully populated one.
pub const PLACEHOLDER: &str = "\u{00A0}";

/// Mark printed inside a checked checkbox and for `true` boolean leaves.
pub const CHECK_MARK: &str = "\u{2713}";

/// Resolves a dot/bracket path (`personal.registeredAddress.province`,
/// `education.entries[1].gpa`) to a display string. Absent or
/// non-addressable segments short-circuit to [`PLACEHOLDER`].
pub fn resolve(root: &Value, path: &str) -> String {
    match lookup(root, path) {
        Some(value) => display_leaf(value),
        None => PLACEHOLDER.to_string(),
    }
}

/// Mutually-exclusive checkbox groups: a candidate is checked only when
/// the actual value is present and matches it exactly after trimming.
/// Absent or unrecognized actual values check nothing.
pub fn is_checked(actual: Option<&str>, candidate: &str) -> bool {
    match actual {
        Some(actual) => actual.trim() == candidate.trim() && !candidate.trim().is_empty(),
        None => false,
    }
}

/// Checkbox evaluation against a path in the binding value. Only string
/// leaves participate; any other shape behaves as absent.
pub fn is_checked_at(root: &Value, path: &str, candidate: &str) -> bool {
    let actual = lookup(root, path).and_then(Value::as_str);
    is_checked(actual, candidate)
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        if segment.is_empty() {
            return None;
        }
        let (key, indices) = split_indices(segment)?;
        if !key.is_empty() {
            current = current.as_object()?.get(key)?;
        }
        for index in indices {
            current = current.as_array()?.get(index)?;
        }
    }
    Some(current)
}

/// Splits `entries[1][2]` into `("entries", [1, 2])`. Malformed bracket
/// syntax resolves as absent rather than erroring.
fn split_indices(segment: &str) -> Option<(&str, Vec<usize>)> {
    let Some(open) = segment.find('[') else {
        return Some((segment, Vec::new()));
    };
    let key = &segment[..open];
    let mut indices = Vec::new();
    let mut rest = &segment[open..];
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            return None;
        }
        let close = rest.find(']')?;
        let index: usize = rest[1..close].parse().ok()?;
        indices.push(index);
        rest = &rest[close + 1..];
    }
    Some((key, indices))
}

fn display_leaf(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.trim().is_empty() {
                PLACEHOLDER.to_string()
            } else {
                s.clone()
            }
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(f) = n.as_f64() {
                format_float(f)
            } else {
                PLACEHOLDER.to_string()
            }
        }
        Value::Bool(true) => CHECK_MARK.to_string(),
        // false, null, arrays, objects: nothing printable at a leaf slot.
        _ => PLACEHOLDER.to_string(),
    }
}

fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let rounded = (f * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_path() {
        let root = json!({
            "personal": { "registeredAddress": { "province": "Chonburi" } }
        });
        assert_eq!(resolve(&root, "personal.registeredAddress.province"), "Chonburi");
    }

    #[test]
    fn missing_segments_yield_placeholder_at_every_depth() {
        let root = json!({ "personal": { "phone": "021234567" } });
        for path in [
            "personal.registeredAddress.province",
            "family.spouseName",
            "a.b.c.d.e.f",
            "",
            "personal.phone.extra",
        ] {
            assert_eq!(resolve(&root, path), PLACEHOLDER, "path {path:?}");
        }
    }

    #[test]
    fn fully_empty_record_never_panics() {
        let root = json!({});
        assert_eq!(resolve(&root, "personal.firstName"), PLACEHOLDER);
        assert_eq!(resolve(&root, "education.entries[3].gpa"), PLACEHOLDER);
    }

    #[test]
    fn array_indexing_with_brackets() {
        let root = json!({
            "education": { "entries": [
                { "gpa": "3.25" },
                { "gpa": "3.80" }
            ]}
        });
        assert_eq!(resolve(&root, "education.entries[1].gpa"), "3.80");
        assert_eq!(resolve(&root, "education.entries[2].gpa"), PLACEHOLDER);
        assert_eq!(resolve(&root, "education.entries[x].gpa"), PLACEHOLDER);
    }

    #[test]
    fn leaf_formatting() {
        let root = json!({
            "age": 27,
            "gpa": 3.5,
            "wage": 400.0,
            "flag": true,
            "off": false,
            "blank": "   ",
            "nothing": null,
            "section": { "k": 1 }
        });
        assert_eq!(resolve(&root, "age"), "27");
        assert_eq!(resolve(&root, "gpa"), "3.5");
        assert_eq!(resolve(&root, "wage"), "400");
        assert_eq!(resolve(&root, "flag"), CHECK_MARK);
        assert_eq!(resolve(&root, "off"), PLACEHOLDER);
        assert_eq!(resolve(&root, "blank"), PLACEHOLDER);
        assert_eq!(resolve(&root, "nothing"), PLACEHOLDER);
        assert_eq!(resolve(&root, "section"), PLACEHOLDER);
    }

    #[test]
    fn checkbox_group_checks_at_most_one() {
        let candidates = ["single", "married", "divorced", "widowed"];
        for actual in ["single", "married", "unrecognized", ""] {
            let checked = candidates
                .iter()
                .filter(|c| is_checked(Some(actual), c))
                .count();
            assert!(checked <= 1, "actual {actual:?} checked {checked}");
        }
        let none_checked = candidates
            .iter()
            .filter(|c| is_checked(None, c))
            .count();
        assert_eq!(none_checked, 0);
    }

    #[test]
    fn checkbox_against_binding_value() {
        let root = json!({ "personal": { "maritalStatus": "married" } });
        assert!(is_checked_at(&root, "personal.maritalStatus", "married"));
        assert!(!is_checked_at(&root, "personal.maritalStatus", "single"));
        assert!(!is_checked_at(&root, "personal.gender", "male"));
    }

    #[test]
    fn non_string_actual_checks_nothing() {
        let root = json!({ "personal": { "age": 30 } });
        assert!(!is_checked_at(&root, "personal.age", "30"));
    }
}
