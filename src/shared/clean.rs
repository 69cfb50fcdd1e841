//! French label cleanup shared by trip headsigns and stop names.
//!
//! Each pass is a pure `&str -> String` transform. Agencies compose them in a
//! fixed order: points, bounds, street types, then label capitalization.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref BOUNDS_FR: Regex =
        Regex::new(r"(?i)\s*[(\[]\s*(?:nord|sud|est|ouest|n|s|e|o)\s*[)\]]").unwrap();
    static ref DIRECTION_PREFIX_FR: Regex =
        Regex::new(r"(?i)^\s*(?:(?:direction|vers)\s+)+").unwrap();
    static ref STREET_TYPES_FR_CA: Vec<(Regex, &'static str)> = [
        (r"(?i)\b(?:boul|boulv|bd)\b\.?", "Boulevard"),
        (r"(?i)\b(?:av|ave)\b\.?", "Avenue"),
        (r"(?i)\bch\b\.?", "Chemin"),
        (r"(?i)\brte\b\.?", "Route"),
        (r"(?i)\b(?:mtée|mtee)\b\.?", "Montée"),
        (r"(?i)\bpl\b\.?", "Place"),
        (r"(?i)\brg\b\.?", "Rang"),
        (r"(?i)\bterm\b\.?", "Terminus"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect();
}

/// Articles and prepositions kept lowercase unless they open the label.
const LOWERCASE_WORDS_FR: &[&str] = &[
    "à", "au", "aux", "de", "des", "du", "en", "et", "la", "le", "les", "sous", "sur",
];

const ELISIONS_FR: &[&str] = &["d'", "l'"];

/// Collapses whitespace runs and trims.
pub fn clean_label(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Adds the missing space after a period wedged between two letters
/// (`St.Jérôme` becomes `St. Jérôme`).
pub fn clean_points(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        result.push(*c);
        if *c == '.'
            && i > 0
            && chars[i - 1].is_alphabetic()
            && chars.get(i + 1).is_some_and(|next| next.is_alphabetic())
        {
            result.push(' ');
        }
    }
    result
}

/// Removes bracketed cardinal bounds such as `(Nord)` or `[S]` and a leading
/// `Direction`/`Vers`. A bound glued to the text after it leaves a space.
pub fn clean_bounds_fr(text: &str) -> String {
    let mut text = text.to_string();
    // Removing an inner bound can close an outer one, e.g. `(N(S))`.
    while BOUNDS_FR.is_match(&text) {
        text = BOUNDS_FR
            .replace_all(&text, |caps: &Captures| {
                let Some(bound) = caps.get(0) else {
                    return "";
                };
                let glued = bound.start() > 0
                    && text[bound.end()..].starts_with(|c: char| !c.is_whitespace());
                if glued { " " } else { "" }
            })
            .into_owned();
    }
    DIRECTION_PREFIX_FR.replace(&text, "").into_owned()
}

/// Expands the street type abbreviations used in Québec.
pub fn clean_street_types_fr_ca(text: &str) -> String {
    STREET_TYPES_FR_CA
        .iter()
        .fold(text.to_string(), |text, (regex, replacement)| {
            regex.replace_all(&text, *replacement).into_owned()
        })
}

/// Capitalizes a French label. All-caps labels are title-cased first; the
/// street types spelled out by [`clean_street_types_fr_ca`] do not count
/// against a label being all caps.
pub fn clean_label_fr(text: &str) -> String {
    let label = clean_label(&clean_points(text));
    let all_caps = label
        .split(' ')
        .filter(|word| !is_street_type(word))
        .all(|word| !word.chars().any(char::is_lowercase));
    label
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            let word = if all_caps {
                title_case_hyphenated(word)
            } else {
                word.to_string()
            };
            if i == 0 {
                capitalize(&word)
            } else {
                lowercase_particles(&word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_street_type(word: &str) -> bool {
    STREET_TYPES_FR_CA
        .iter()
        .any(|(_, replacement)| *replacement == word)
}

fn title_case_hyphenated(word: &str) -> String {
    word.to_lowercase()
        .split('-')
        .enumerate()
        .map(|(i, part)| {
            if i > 0 && LOWERCASE_WORDS_FR.contains(&part) {
                part.to_string()
            } else {
                capitalize(part)
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn lowercase_particles(word: &str) -> String {
    let lower = word.to_lowercase();
    if LOWERCASE_WORDS_FR.contains(&lower.as_str()) {
        return lower;
    }
    if word.chars().count() > 2
        && let Some(head) = word.get(..2).map(str::to_ascii_lowercase)
        && ELISIONS_FR.contains(&head.as_str())
    {
        return format!("{}{}", head, capitalize(&word[2..]));
    }
    capitalize(word)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
