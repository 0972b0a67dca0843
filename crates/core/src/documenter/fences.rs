/// Marker that opens and closes a fenced code block.
pub const FENCE: &str = "```";

/// Remove an enclosing fenced block from a model response.
///
/// When both the first and the last line of the response contain a fence
/// marker, those two lines are dropped. A one line response is its own first
/// and last line, so a lone fenced line strips down to an empty string.
/// Any other response is returned as is.
///
/// Trailing line breaks are ignored when locating the last line. A non-empty
/// stripped body gets a single trailing `\n` appended, which the model did
/// not send, so rewritten files keep ending with a newline.
pub fn strip_fences(response: &str) -> String {
    let body = response.trim_end_matches(|c: char| c == '\n' || c == '\r');
    let lines: Vec<&str> = body.split('\n').collect();

    if lines.len() < 2 {
        return if body.contains(FENCE) {
            String::new()
        } else {
            response.to_string()
        };
    }

    let first = lines[0];
    let last = lines[lines.len() - 1];

    if !first.contains(FENCE) || !last.contains(FENCE) {
        return response.to_string();
    }

    let inner = lines[1..lines.len() - 1].join("\n");
    if inner.is_empty() {
        inner
    } else {
        format!("{}\n", inner)
    }
}

/// Whether a response carries anything worth writing back to disk.
pub fn has_usable_content(response: &str) -> bool {
    !response.trim().is_empty()
}
