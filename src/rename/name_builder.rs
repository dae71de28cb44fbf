use chrono::NaiveDate;

use crate::pattern::MARKDOWN_SUFFIX;

/// Minimum width of the zero-padded ID segment
const ID_WIDTH: usize = 3;

/// Build a standardized filename: `{date}-{id}-{slug}.md`
pub fn build_standard_name(date: NaiveDate, id: u64, original_name: &str) -> String {
    format!(
        "{}-{}-{}{}",
        date.format("%Y-%m-%d"),
        format_id(id),
        slugify(title_of(original_name)),
        MARKDOWN_SUFFIX
    )
}

/// Zero-pad an ID to three digits, wider numbers are kept whole
pub fn format_id(id: u64) -> String {
    format!("{:0width$}", id, width = ID_WIDTH)
}

/// Title segment of a filename: the name with its trailing `.md` removed
pub fn title_of(name: &str) -> &str {
    name.strip_suffix(MARKDOWN_SUFFIX).unwrap_or(name)
}

/// Lowercase, turn spaces into hyphens, then drop anything outside `[a-z0-9-]`.
///
/// Runs of hyphens and leading or trailing hyphens are kept as produced.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::is_conforming;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_build_name_simple() {
        assert_eq!(
            build_standard_name(date(), 6, "My Notes.md"),
            "2024-03-09-006-my-notes.md"
        );
    }

    #[test]
    fn test_build_name_wide_id() {
        assert_eq!(
            build_standard_name(date(), 1234, "Plan.md"),
            "2024-03-09-1234-plan.md"
        );
    }

    #[test]
    fn test_build_name_is_conforming() {
        for name in ["A.md", "B!! .md", "???.md", "Ünïcode Tïtle.md", ".md"] {
            let built = build_standard_name(date(), 1, name);
            assert!(is_conforming(&built), "{} -> {}", name, built);
        }
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(1), "001");
        assert_eq!(format_id(42), "042");
        assert_eq!(format_id(999), "999");
        assert_eq!(format_id(1000), "1000");
    }

    #[test]
    fn test_title_of_strips_only_trailing_suffix() {
        assert_eq!(title_of("notes.md"), "notes");
        assert_eq!(title_of("a.md.draft.md"), "a.md.draft");
        assert_eq!(title_of("plain"), "plain");
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My Notes"), "my-notes");
        assert_eq!(slugify("Release v2.0"), "release-v20");
    }

    #[test]
    fn test_slugify_keeps_hyphen_artifacts() {
        assert_eq!(slugify("B!! "), "b-");
        assert_eq!(slugify("My  Notes!"), "my--notes");
        assert_eq!(slugify(" lead"), "-lead");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café Menu"), "caf-menu");
        assert_eq!(slugify("under_score"), "underscore");
    }

    #[test]
    fn test_slugify_idempotent() {
        for title in ["My  Notes!", "B!! ", "Ünïcode Tïtle", "x_y z", "---", ""] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }
}
