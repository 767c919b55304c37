//! Diagnostic rendering of vector contents.

use std::fmt;

/// Maximum number of elements rendered by [`write_preview`].
pub const PREVIEW_ELEMENTS: usize = 25;

/// Write a bracketed, comma-separated preview of `values`.
///
/// At most the first [`PREVIEW_ELEMENTS`] elements are rendered, followed
/// by a `...` marker when the slice is longer. Intended for logs and test
/// output only — not a parseable format.
pub fn write_preview(f: &mut fmt::Formatter<'_>, values: &[f32]) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.iter().take(PREVIEW_ELEMENTS).enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value:?}")?;
    }
    if values.len() > PREVIEW_ELEMENTS {
        write!(f, ", ...")?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Preview<'a>(&'a [f32]);

    impl fmt::Display for Preview<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_preview(f, self.0)
        }
    }

    #[test]
    fn short_slice_renders_fully() {
        assert_eq!(Preview(&[1.0, 2.0, 3.0]).to_string(), "[1.0, 2.0, 3.0]");
    }

    #[test]
    fn empty_slice_renders_brackets() {
        assert_eq!(Preview(&[]).to_string(), "[]");
    }

    #[test]
    fn long_slice_truncates_at_25_with_marker() {
        let values: Vec<f32> = (0..30).map(|i| i as f32).collect();
        let rendered = Preview(&values).to_string();
        assert!(rendered.starts_with("[0.0, 1.0, "));
        assert!(rendered.ends_with("24.0, ...]"));
        assert!(!rendered.contains("25.0"));
        assert_eq!(rendered.matches(", ").count(), 25);
    }

    #[test]
    fn exactly_25_elements_has_no_marker() {
        let values: Vec<f32> = (0..25).map(|i| i as f32).collect();
        let rendered = Preview(&values).to_string();
        assert!(rendered.ends_with("24.0]"));
        assert!(!rendered.contains("..."));
    }
}
