/// Marker line prepended by the stub documenter.
pub const STUB_MARKER: &str = "# This is automatically generated documentation";

/// Deterministic stand-in for a generated document: the marker line
/// followed by the untouched content.
pub fn stub_document(content: &str) -> String {
    format!("{}\n{}", STUB_MARKER, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_prepends_marker() {
        let content = "def f():\n    return 1\n";
        assert_eq!(
            stub_document(content),
            format!("{}\n{}", STUB_MARKER, content)
        );
    }

    #[test]
    fn test_stub_on_empty_content() {
        assert_eq!(stub_document(""), format!("{}\n", STUB_MARKER));
    }

    #[test]
    fn test_stub_is_not_a_fixpoint() {
        let once = stub_document("x = 1\n");
        let twice = stub_document(&once);

        assert_eq!(twice, format!("{m}\n{m}\nx = 1\n", m = STUB_MARKER));
    }
}
