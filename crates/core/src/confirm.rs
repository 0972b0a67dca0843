//! Confirmation gate text and answer parsing.

/// Question shown after the warning banner.
pub const CONFIRM_PROMPT: &str = "Do you want to proceed? ([y]/n): ";

/// Build the destructive-action warning listing every file to be rewritten.
pub fn build_warning(files: &[String]) -> String {
    let mut warning = format!(
        "** Warning ** : This action will modify the following {} file(s) in-place:\n\n",
        files.len()
    );

    for file in files {
        warning.push_str(&format!("  {}\n", file));
    }

    warning.push_str(
        "\nThis might be a destructive action. We recommend working on a clean git branch \
         and having a backup just in case.\n",
    );

    warning
}

/// Interpret a line typed by the operator.
///
/// An empty answer or `y` (any case) approves; everything else rejects.
pub fn is_approval(input: &str) -> bool {
    let answer = input.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answer_approves() {
        assert!(is_approval(""));
        assert!(is_approval("\n"));
        assert!(is_approval("   \r\n"));
    }

    #[test]
    fn test_y_approves_in_any_case() {
        assert!(is_approval("y"));
        assert!(is_approval("Y"));
        assert!(is_approval(" y \n"));
    }

    #[test]
    fn test_anything_else_rejects() {
        assert!(!is_approval("n"));
        assert!(!is_approval("N"));
        assert!(!is_approval("yes"));
        assert!(!is_approval("no"));
        assert!(!is_approval("q"));
    }

    #[test]
    fn test_warning_lists_count_and_files() {
        let files = vec!["a.py".to_string(), "src/b.py".to_string()];
        let warning = build_warning(&files);

        assert!(warning.contains("following 2 file(s) in-place"));
        assert!(warning.contains("  a.py\n"));
        assert!(warning.contains("  src/b.py\n"));
        assert!(warning.contains("destructive action"));
    }
}
