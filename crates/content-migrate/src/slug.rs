//! Deterministic text-to-handle normalization.
//!
//! `slugify` is pure: same input and options, same output, no external
//! state.

/// Options for [`slugify`]. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    /// Separator substituted for runs of non-alphanumeric characters.
    pub delimiter: char,
    /// Maximum output length in characters; unbounded when `None`.
    pub limit: Option<usize>,
    /// Lowercase the result.
    pub lowercase: bool,
    /// Map known accented/non-Latin letters to ASCII equivalents.
    pub transliterate: bool,
    /// Ordered pattern -> replacement rules applied before transliteration.
    pub replacements: Vec<(String, String)>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            delimiter: '-',
            limit: None,
            lowercase: true,
            transliterate: true,
            replacements: Vec::new(),
        }
    }
}

/// Fixed transliteration table for common accented and non-Latin letters.
/// Characters not in the table and not alphanumeric collapse into the
/// delimiter instead.
const TRANSLIT: &[(char, &str)] = &[
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"),
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"),
    ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"),
    ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"),
    ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"),
    ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"),
    ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"), ('ø', "o"),
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"), ('Ø', "O"),
    ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"),
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"),
    ('ý', "y"), ('ÿ', "y"), ('Ý', "Y"),
    ('ñ', "n"), ('Ñ', "N"),
    ('ç', "c"), ('Ç', "C"),
    ('ß', "ss"),
    ('æ', "ae"), ('Æ', "AE"),
    ('œ', "oe"), ('Œ', "OE"),
    ('ð', "d"), ('Ð', "D"),
    ('þ', "th"), ('Þ', "TH"),
    ('đ', "d"), ('Đ', "D"),
    ('ł', "l"), ('Ł', "L"),
    ('š', "s"), ('Š', "S"),
    ('ž', "z"), ('Ž', "Z"),
    ('č', "c"), ('Č', "C"),
];

/// Normalize arbitrary text into a handle.
///
/// # Examples
///
/// ```
/// use content_migrate::slug::{slugify, SlugOptions};
///
/// let slug = slugify("Café & Bar!!", &SlugOptions::default());
/// assert_eq!(slug, "cafe-bar");
/// ```
pub fn slugify(text: &str, options: &SlugOptions) -> String {
    let mut text = text.to_string();

    for (pattern, replacement) in &options.replacements {
        text = text.replace(pattern.as_str(), replacement);
    }

    if options.transliterate {
        let mut mapped = String::with_capacity(text.len());
        for c in text.chars() {
            match TRANSLIT.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => mapped.push_str(to),
                None => mapped.push(c),
            }
        }
        text = mapped;
    }

    // Collapse every run of non-alphanumeric characters into a single
    // delimiter; leading runs produce nothing.
    let mut slug = String::with_capacity(text.len());
    let mut pending_delimiter = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_delimiter && !slug.is_empty() {
                slug.push(options.delimiter);
            }
            pending_delimiter = false;
            slug.push(c);
        } else {
            pending_delimiter = true;
        }
    }

    if let Some(limit) = options.limit {
        slug = slug.chars().take(limit).collect();
    }

    let slug = slug.trim_matches(options.delimiter);

    if options.lowercase {
        slug.to_lowercase()
    } else {
        slug.to_string()
    }
}
