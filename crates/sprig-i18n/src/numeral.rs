//! Locale-aware numeral formatting for animated counters.
//!
//! English output uses Western digits with comma grouping (`1,000`);
//! Arabic output uses Arabic-Indic digits with the Arabic thousands
//! separator (`١٬٠٠٠`). Groups are three digits wide in both scripts.

use crate::language::Language;

/// Arabic-Indic digits, indexed by Western digit value.
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// U+066C ARABIC THOUSANDS SEPARATOR.
const ARABIC_THOUSANDS_SEPARATOR: char = '\u{066C}';

const GROUP_WIDTH: usize = 3;

/// Format `value` with thousands grouping in the given language.
#[must_use]
pub fn format_count(value: u64, language: Language) -> String {
    let ascii = value.to_string();
    let mut out = String::with_capacity(ascii.len() * 2);
    for (i, digit) in ascii.bytes().enumerate() {
        if i > 0 && (ascii.len() - i) % GROUP_WIDTH == 0 {
            out.push(separator(language));
        }
        out.push(localize(digit, language));
    }
    out
}

const fn separator(language: Language) -> char {
    match language {
        Language::En => ',',
        Language::Ar => ARABIC_THOUSANDS_SEPARATOR,
    }
}

const fn localize(digit: u8, language: Language) -> char {
    match language {
        Language::En => digit as char,
        Language::Ar => ARABIC_INDIC_DIGITS[(digit - b'0') as usize],
    }
}
