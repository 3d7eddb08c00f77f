use std::fmt::Write;

use super::styling::{bright_green, bright_red, dim};
use crate::joblog::{classify_line, LineClass, LogDocument};

/// Render the log transcript with line numbers and ANSI-aware styling.
///
/// Zero-length lines are omitted from rendering, never from the underlying
/// document.
pub fn render_transcript(doc: &LogDocument) -> String {
    let mut output = String::new();

    for (index, line) in doc.lines().iter().enumerate() {
        if line.is_empty() {
            continue;
        }

        let parsed = classify_line(line);
        let styled = match parsed.class {
            LineClass::Error => bright_red(&parsed.text).bold().to_string(),
            LineClass::Primary => bright_green(&parsed.text).bold().to_string(),
            LineClass::Default => parsed.text.clone(),
        };

        let _ = writeln!(output, "{:>4}  {}", dim(index), styled);
    }

    output
}

pub fn print_transcript(doc: &LogDocument) {
    print!("{}", render_transcript(doc));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_lines_are_omitted() {
        let doc = LogDocument::new(vec![
            "first".to_string(),
            String::new(),
            "third".to_string(),
        ]);

        let rendered = render_transcript(&doc);
        assert_eq!(rendered.lines().count(), 2);
        // The document itself still holds all three lines.
        assert_eq!(doc.lines().len(), 3);
    }

    #[test]
    fn test_line_numbers_follow_document_indexes() {
        let doc = LogDocument::new(vec![String::new(), "second".to_string()]);
        let rendered = render_transcript(&doc);
        // The omitted first line keeps its index reserved.
        assert!(rendered.contains('1'));
        assert!(!rendered.contains('0'));
    }

    #[test]
    fn test_error_lines_render_from_the_marker() {
        let doc = LogDocument::new(vec![
            "prefix \u{1b}[31;1mERROR: Job failed: exit code 1".to_string(),
        ]);

        let rendered = render_transcript(&doc);
        assert!(rendered.contains("ERROR: Job failed: exit code 1"));
        assert!(!rendered.contains("prefix"));
    }
}
