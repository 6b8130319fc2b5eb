//! Single-character case transforms.

/// Lowercase the first character of `text`, leaving the rest unchanged.
///
/// Returns a new `String`; empty input yields an empty result. Case
/// conversion uses the full Unicode mapping via [`char::to_lowercase`], so
/// characters without a distinct lowercase form (digits, punctuation,
/// already-lowercase letters) pass through untouched, and the rare code
/// points whose lowercase expansion spans multiple characters are expanded
/// in full.
pub fn uncapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
    }
}

/// Nullable form of [`uncapitalize`]: absent input propagates as `None`.
pub fn uncapitalize_opt(text: Option<&str>) -> Option<String> {
    text.map(uncapitalize)
}
