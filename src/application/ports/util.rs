// src/application/ports/util.rs

/// Turns free text into a slug base. May return an empty string when nothing
/// in the input survives normalization.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
