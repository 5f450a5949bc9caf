// src/application/ports/util.rs

/// Maps a display string to a URL-safe identifier.
///
/// Implementations are pure: lowercase ASCII letters and digits separated by
/// single hyphens, no leading or trailing hyphen, and idempotent.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
