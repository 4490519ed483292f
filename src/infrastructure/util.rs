use crate::application::ports::util::SlugGenerator;
use crate::domain::article::{MAX_SLUG_LENGTH, services::truncate_slug};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Slugifier that folds accented Latin letters to ASCII and drops anything it
/// cannot represent, so purely non-Latin titles come back empty.
#[derive(Default, Clone)]
pub struct UnicodeSlugGenerator;

impl SlugGenerator for UnicodeSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let hyphenated = input.split_whitespace().collect::<Vec<_>>().join("-");

        let mut slug = String::with_capacity(hyphenated.len());
        for c in hyphenated.nfd() {
            if is_combining_mark(c) {
                continue;
            }
            if c == '-' {
                // collapse runs
                if !slug.is_empty() && !slug.ends_with('-') {
                    slug.push('-');
                }
            } else if c.is_ascii_alphanumeric() || c == '_' {
                slug.push(c.to_ascii_lowercase());
            }
        }

        let trimmed = slug.trim_end_matches('-');
        truncate_slug(trimmed, MAX_SLUG_LENGTH)
    }
}
