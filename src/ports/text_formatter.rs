/// Port for display-only text shaping (right-to-left scripts and the like).
///
/// Implementations may change how text looks, never what it means.
pub trait TextFormatter {
    fn format(&self, text: &str) -> String;
}
