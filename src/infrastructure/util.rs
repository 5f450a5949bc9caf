use crate::application::ports::util::SlugGenerator;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Lowercases, decomposes (NFD) and drops combining marks, then joins the
/// remaining `[a-z0-9]` runs with `-`.
///
/// Letters without a decomposition (`œ`, `ß`) and symbols act as separators.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut pending_hyphen = false;

        for c in input.to_lowercase().nfd().filter(|c| !is_combining_mark(*c)) {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                if pending_hyphen && !out.is_empty() {
                    out.push('-');
                }
                pending_hyphen = false;
                out.push(c);
            } else {
                pending_hyphen = true;
            }
        }

        out
    }
}
