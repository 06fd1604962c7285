//! Protection of escaped markup characters.
//!
//! A message author writes `\*literal\*` to show asterisks without styling
//! them. Before any coloring pass runs, each `\` + trigger character pair is
//! swapped for a placeholder that cannot occur anywhere else in the text;
//! after the last pass, the placeholders are swapped back. The coloring
//! passes therefore never see the escaped characters at all.

/// Markup characters that can be escaped with a leading backslash.
///
/// `~` is included so `\~~text\~~` renders literally, for the same reason
/// `\*` does. `\_` is intentionally not protected.
const TRIGGERS: [char; 4] = ['*', '#', '`', '~'];

/// Placeholder sentinel character. Grown into a longer run when the input
/// happens to contain it.
const SENTINEL: char = '\u{e000}';

/// Reversible substitution of escaped markup characters.
///
/// Created by [`EscapeGuard::protect`] and consumed by
/// [`EscapeGuard::restore`] within a single format call. The placeholder
/// counter lives inside the guard, so concurrent or repeated calls never
/// share state.
#[derive(Debug, Default)]
pub struct EscapeGuard {
    /// Placeholder string and the two-character escape it replaced, in
    /// substitution order.
    replacements: Vec<(String, String)>,
}

impl EscapeGuard {
    /// Replace every `\` + trigger character pair in `text` with a unique
    /// placeholder, returning the protected text and the guard that can
    /// reverse the substitution.
    #[must_use]
    pub fn protect(text: &str) -> (String, Self) {
        let sentinel = unique_sentinel(text);

        let mut replacements = Vec::new();
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(at) = rest.find('\\') {
            let (head, tail) = rest.split_at(at);
            out.push_str(head);

            let mut chars = tail.chars();
            chars.next();
            match chars.next() {
                Some(c) if TRIGGERS.contains(&c) => {
                    let placeholder = format!("{sentinel}{}{sentinel}", replacements.len());
                    out.push_str(&placeholder);
                    replacements.push((placeholder, format!("\\{c}")));
                    rest = &tail[1 + c.len_utf8()..];
                }
                _ => {
                    out.push('\\');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);

        (out, Self { replacements })
    }

    /// Swap every placeholder back for its original escape sequence.
    ///
    /// Exact inverse of [`EscapeGuard::protect`]: the literal `\` + character
    /// pairs reappear untouched.
    #[must_use]
    pub fn restore(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for (placeholder, original) in &self.replacements {
            out = out.replace(placeholder.as_str(), original);
        }
        out
    }

    /// Number of protected escape sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Returns `true` if no escape sequences were protected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Builds a sentinel run guaranteed to be absent from `text`.
///
/// Placeholders are `{sentinel}{counter}{sentinel}`; with the sentinel absent
/// from the input, no placeholder can collide with an input substring, and
/// the counter keeps placeholders distinct from each other.
fn unique_sentinel(text: &str) -> String {
    let mut sentinel = String::from(SENTINEL);
    while text.contains(&sentinel) {
        sentinel.push(SENTINEL);
    }
    sentinel
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
