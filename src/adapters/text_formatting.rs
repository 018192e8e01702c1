use crate::ports::TextFormatter;

/// Leaves text untouched. Used when no shaping capability is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFormatter;

impl TextFormatter for IdentityFormatter {
    fn format(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick the best available formatter.
///
/// Terminals do their own bidi layout and shaping, so the identity formatter
/// is the only capability this build carries.
pub fn select_formatter() -> Box<dyn TextFormatter> {
    Box::new(IdentityFormatter)
}
