/// Red/bold marker emitted by the CI runner in front of error lines.
pub const ANSI_ERROR_MARKER: &str = "\u{1b}[31;1mERROR:";
/// Green/bold marker emitted in front of section/success lines.
pub const ANSI_PRIMARY_MARKER: &str = "\u{1b}[32;1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Error,
    Primary,
    Default,
}

/// A log line after classification and escape stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub class: LineClass,
    pub text: String,
}

/// Classify a raw log line by its ANSI color markers.
///
/// A line carrying the red/bold error marker is truncated to start at the
/// marker and classified as an error; a line carrying the green/bold marker
/// is truncated similarly and classified as primary. Recognized escape
/// substrings are stripped from the visible text after classification.
pub fn classify_line(line: &str) -> StyledLine {
    let (class, truncated) = if let Some(idx) = line.find(ANSI_ERROR_MARKER) {
        // Skip the escape byte so the text starts at the marker itself.
        (LineClass::Error, &line[idx + 1..])
    } else if let Some(idx) = line.find(ANSI_PRIMARY_MARKER) {
        // Skip the escape byte and the bracket.
        (LineClass::Primary, &line[idx + 2..])
    } else {
        (LineClass::Default, line)
    };

    StyledLine {
        class,
        text: strip_escapes(truncated),
    }
}

/// Remove the escape substrings the runner is known to emit.
pub fn strip_escapes(line: &str) -> String {
    line.replace("[31;1m", "")
        .replace("32;1m", "")
        .replace("\u{1b}[0K", "")
        .replace("\u{1b}[0;m", "")
}
