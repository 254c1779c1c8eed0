/*!
 * Identifier suffix detection
 *
 * Export tools append a pseudo-unique hexadecimal token to every file and
 * folder name ("Page abcdef0123456789abcdef0123456789.md"). This module is a
 * pure, side-effect-free mapping from a name to its stripped form, so the
 * detection logic can be tested without touching a filesystem.
 */

use regex::Regex;

use crate::error::Result;

/// Default minimum length of an identifier token, in characters
///
/// 32 covers the plain hexadecimal tokens and, with embedded dashes allowed,
/// the 8-4-4-4-12 GUID form (36 characters) as well.
pub const DEFAULT_TOKEN_LENGTH: usize = 32;

/// Detector for trailing identifier tokens
///
/// Recognizes a separator (space, dash or underscore) followed by a
/// case-insensitive run of hexadecimal characters, dashes permitted inside,
/// anchored at the end of the name stem. The minimum run length is the single
/// tunable.
#[derive(Debug, Clone)]
pub struct SuffixPattern {
    regex: Regex,
}

impl SuffixPattern {
    /// Build a pattern that strips tokens of at least `min_token_length` characters
    pub fn new(min_token_length: usize) -> Result<Self> {
        let regex = Regex::new(&format!(
            r"(?i)[ _-][0-9a-f][0-9a-f-]{{{},}}$",
            min_token_length.saturating_sub(1)
        ))?;
        Ok(Self { regex })
    }

    /// Strip the trailing token from a bare name, ignoring extensions
    fn strip_stem(&self, stem: &str) -> Option<String> {
        let matched = self.regex.find(stem)?;
        let remainder = &stem[..matched.start()];
        // A name that is nothing but a token is left alone
        if remainder.is_empty() {
            return None;
        }
        Some(remainder.to_string())
    }

    /// Compute the cleaned name for an entry
    ///
    /// Returns `None` when the name carries no identifier suffix, which is the
    /// expected no-op for already-clean names. For files the extension is
    /// preserved; directory names are treated as bare stems.
    pub fn strip_name(&self, name: &str, is_dir: bool) -> Option<String> {
        if is_dir {
            return self.strip_stem(name);
        }

        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => self
                .strip_stem(stem)
                .map(|cleaned| format!("{}.{}", cleaned, ext)),
            _ => self.strip_stem(name),
        }
    }
}
