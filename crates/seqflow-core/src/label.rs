//! Label cleaning for text lifted out of sequence-diagram lines.
//!
//! clang-uml decorates conditions and messages with bold markers (`**`) and
//! square brackets. [`clean_label`] strips that decoration so the remaining
//! text can be used as an activity label.

/// Characters removed from every label.
const NOISE_CHARS: [char; 3] = ['*', '[', ']'];

/// Strip emphasis markers and brackets from `raw`, then trim whitespace.
///
/// Cleaning is idempotent: a cleaned label cleans to itself.
///
/// # Examples
///
/// ```
/// use seqflow_core::label::clean_label;
///
/// assert_eq!(clean_label(" **[running]** "), "running");
/// assert_eq!(clean_label("draw()"), "draw()");
/// ```
pub fn clean_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !NOISE_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
