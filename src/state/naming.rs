/// Title inference from image filenames
///
/// Used when a metadata entry has no title. Camera-style names such as
/// `IMG_1234.jpg` or `DSC0042.NEF` become "Image 1234" / "Photo 0042";
/// everything else is split on separators and capitalized.

use regex::Regex;
use std::sync::OnceLock;

/// Title used when nothing readable survives the cleanup
pub const UNTITLED: &str = "Untitled Photo";

/// (pattern, replacement) pairs, applied in order, first match only
const CAMERA_PATTERNS: [(&str, &str); 7] = [
    (r"(?i)IMG_?([0-9]+)", "Image ${1}"),
    (r"(?i)DSC_?([0-9]+)", "Photo ${1}"),
    (r"(?i)DSCN([0-9]+)", "Photo ${1}"),
    (r"(?i)photo_?([0-9]+)", "Photo ${1}"),
    (r"(?i)image_?([0-9]+)", "Image ${1}"),
    (r"(?i)pic_?([0-9]+)", "Picture ${1}"),
    (r"^([0-9]+)$", "Photo ${1}"),
];

fn camera_patterns() -> &'static [(Regex, &'static str)] {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        CAMERA_PATTERNS
            .iter()
            .map(|(pattern, replacement)| {
                (Regex::new(pattern).expect("camera pattern is valid"), *replacement)
            })
            .collect()
    })
}

/// Strip the last extension ("a.tar.gz" → "a.tar", ".jpg" → "")
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) if dot + 1 < filename.len() && !filename[dot + 1..].contains('/') => {
            &filename[..dot]
        }
        _ => filename,
    }
}

/// Derive a human-readable title from a filename
pub fn title_from_filename(filename: &str) -> String {
    let mut title = strip_extension(filename).to_string();

    for (regex, replacement) in camera_patterns() {
        title = regex.replace(&title, *replacement).into_owned();
    }

    let title = capitalize_words(&title.replace(['-', '_'], " "));

    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    }
}

/// Upper-case the first character of every ASCII word
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }

    out
}
