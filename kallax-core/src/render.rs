//! Fixed-width text rendering for listings and search results.
//!
//! Pure string building only, no I/O and no color. The shell decides
//! where the text goes and how to decorate it.

use crate::field::GameField;

/// Total width of the banner block.
const BANNER_WIDTH: usize = 80;
/// Inner width of the banner box, between the `>` and `<` rails.
const BANNER_INNER: usize = 50;
/// Width of the index column in listings.
pub const INDEX_WIDTH: usize = 7;

// ---------------------------------------------------------------------------
// Rules and cells
// ---------------------------------------------------------------------------

/// Strong horizontal rule separating a rendered block from the shell.
pub fn strong_rule() -> String {
    format!("\n{}\n", "---".repeat(30))
}

/// Lighter rule separating sections inside a block.
pub fn weak_rule() -> String {
    format!("\n{}\n", "-  ".repeat(30))
}

/// Clip `text` to `width - 1` characters and pad it to `width`, so
/// adjacent columns always keep at least one space between them.
pub fn cell(text: &str, width: usize, left_aligned: bool) -> String {
    let clipped: String = if text.chars().count() >= width {
        text.chars().take(width - 1).collect()
    } else {
        text.to_string()
    };
    if left_aligned {
        format!("{clipped:<width$}")
    } else {
        format!("{clipped:>width$}")
    }
}

/// Column header row for game listings (without the index column).
pub fn game_header() -> String {
    GameField::all()
        .iter()
        .map(|f| cell(f.name(), f.column_width(), f.left_aligned()))
        .collect()
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// Banner block used as a collection heading: a 50-column box centered
/// in an 80-column frame. Titles too long for the box are replaced
/// rather than allowed to overflow it.
pub fn banner(title: &str) -> String {
    let title = if title.chars().count() > 40 {
        "(untitled)"
    } else {
        title
    };
    let pad = BANNER_INNER - title.chars().count();
    // round the split so any odd space leads the title
    let lead = pad / 2 + pad % 2;
    let trail = pad / 2;

    let rail = format!(">{}<", "-".repeat(BANNER_INNER));
    let gap = format!(">{}<", " ".repeat(BANNER_INNER));
    let boxed = format!(">{}{}{}<", " ".repeat(lead), title, " ".repeat(trail));

    [&rail, &gap, &boxed, &gap, &rail]
        .iter()
        .map(|line| format!("{line:^BANNER_WIDTH$}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Framed, index-annotated listing: header plus one pre-rendered row per
/// item.
pub fn listing(header: &str, rows: &[String]) -> String {
    let mut text = String::new();
    text.push_str(&strong_rule());
    text.push_str(&cell("index", INDEX_WIDTH, true));
    text.push_str(header);
    text.push_str(&weak_rule());
    text.push_str(&rows.join("\n"));
    text.push_str(&strong_rule());
    text
}

/// Framed search result: exact matches above the weak rule, close
/// matches below it. Empty sections show a centered placeholder so the
/// frame shape never changes.
pub fn filtered(header: &str, exact: &[String], close: &[String]) -> String {
    let mut text = String::new();
    text.push_str(&strong_rule());
    text.push_str(header);
    text.push_str(&weak_rule());
    text.push_str(&section(exact, "< no exact matches >"));
    text.push_str(&weak_rule());
    text.push_str(&section(close, "< no close matches >"));
    text.push_str(&strong_rule());
    text
}

fn section(rows: &[String], placeholder: &str) -> String {
    if rows.is_empty() {
        format!("{placeholder:^BANNER_WIDTH$}")
    } else {
        rows.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_pads_and_aligns() {
        assert_eq!(cell("abc", 6, true), "abc   ");
        assert_eq!(cell("abc", 6, false), "   abc");
    }

    #[test]
    fn cell_clips_overlong_text() {
        // clipping leaves one space of separation
        assert_eq!(cell("abcdef", 6, true), "abcde ");
        assert_eq!(cell("abcdefgh", 6, false), " abcde");
    }

    #[test]
    fn cell_keeps_text_one_under_width() {
        assert_eq!(cell("abcde", 6, true), "abcde ");
    }

    #[test]
    fn rules_are_ninety_wide() {
        assert_eq!(strong_rule().trim_matches('\n').len(), 90);
        assert_eq!(weak_rule().trim_matches('\n').len(), 90);
    }

    #[test]
    fn header_covers_all_columns() {
        let header = game_header();
        let total: usize = GameField::all().iter().map(|f| f.column_width()).sum();
        assert_eq!(header.len(), total);
        assert!(header.starts_with("title"));
        assert!(header.contains("players"));
        assert!(header.trim_end().ends_with("rating"));
    }

    #[test]
    fn banner_lines_are_eighty_wide() {
        let banner = banner("Collection: base");
        for line in banner.lines() {
            assert_eq!(line.chars().count(), 80, "line: {line:?}");
        }
        assert_eq!(banner.lines().count(), 5);
        assert!(banner.contains("Collection: base"));
    }

    #[test]
    fn banner_replaces_overlong_titles() {
        let long = "x".repeat(60);
        let banner = banner(&long);
        assert!(!banner.contains(&long));
        assert!(banner.contains("(untitled)"));
    }

    #[test]
    fn filtered_shows_placeholders_for_empty_sections() {
        let text = filtered(&game_header(), &[], &[]);
        assert!(text.contains("< no exact matches >"));
        assert!(text.contains("< no close matches >"));
    }

    #[test]
    fn filtered_lists_rows_in_their_sections() {
        let exact = vec!["row-a".to_string()];
        let close = vec!["row-b".to_string(), "row-c".to_string()];
        let text = filtered(&game_header(), &exact, &close);
        assert!(text.contains("row-a"));
        assert!(text.contains("row-b\nrow-c"));
        assert!(!text.contains("< no exact matches >"));
    }
}
