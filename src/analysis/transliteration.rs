//! Cyrillic/Latin script conversion for Uzbek.
//!
//! The table below is the single source of truth for both directions. Only
//! lowercase Cyrillic letters are listed; uppercase input is looked up by its
//! lowercase form and the Latin output is capitalized. A base letter followed
//! by a combining mark is read as the precomposed letter when that letter is in
//! the table (и + U+0306 is й); other combining marks are left alone.
//!
//! # Examples
//!
//! ```
//! use uznlp::analysis::transliteration::{to_cyrillic, to_latin};
//!
//! assert_eq!(to_latin("Ўзбекистон"), "O'zbekiston");
//! assert_eq!(to_latin("Шаҳар"), "Shahar");
//! assert_eq!(to_cyrillic("O'zbekiston"), "Ўзбекистон");
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};
use unicode_normalization::char::compose;

/// Lowercase Cyrillic letter to Latin spelling, in table order.
///
/// Order matters for the reverse direction: when two Cyrillic letters share a
/// Latin spelling (`ш`/`щ`, `и`/`ы`, `е`/`э`) the first one wins.
pub const CYRILLIC_TO_LATIN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "j"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "x"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sh"),
    ('ъ', "'"),
    ('ы', "i"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('ў', "o'"),
    ('қ', "q"),
    ('ғ', "g'"),
    ('ҳ', "h"),
];

/// Apostrophe-like code points treated as the ASCII apostrophe.
pub const APOSTROPHE_VARIANTS: &[char] = &['\u{2018}', '\u{2019}', '\u{02BB}', '\u{02BC}', '`'];

static LATIN_BY_CYRILLIC: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| CYRILLIC_TO_LATIN.iter().copied().collect());

struct ReverseTable {
    ac: AhoCorasick,
    letters: Vec<char>,
}

static CYRILLIC_BY_LATIN: LazyLock<ReverseTable> = LazyLock::new(|| {
    let mut patterns: Vec<&'static str> = Vec::new();
    let mut letters = Vec::new();
    for &(cyrillic, latin) in CYRILLIC_TO_LATIN {
        if latin.is_empty() || patterns.contains(&latin) {
            continue;
        }
        patterns.push(latin);
        letters.push(cyrillic);
    }

    let ac = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .ascii_case_insensitive(true)
        .build(&patterns)
        .expect("static transliteration patterns form a valid automaton");

    ReverseTable { ac, letters }
});

/// Convert Cyrillic Uzbek to Latin Uzbek.
///
/// Characters without a table entry (Latin letters, digits, punctuation)
/// pass through unchanged, so the conversion is idempotent on Latin text.
pub fn to_latin(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for (start, end, c) in letters(text) {
        match latin_for(c) {
            Some(latin) => output.push_str(&latin),
            None => output.push_str(&text[start..end]),
        }
    }
    output
}

/// Iterate over `text` as `(start, end, letter)` byte spans, composing a
/// table letter written as base plus combining mark into one letter.
pub(crate) fn letters(text: &str) -> impl Iterator<Item = (usize, usize, char)> + '_ {
    let mut chars = text.char_indices().peekable();
    std::iter::from_fn(move || {
        let (start, c) = chars.next()?;
        if let Some(&(mark_start, mark)) = chars.peek() {
            if let Some(letter) = compose(c, mark).filter(|&l| has_entry(l)) {
                chars.next();
                return Some((start, mark_start + mark.len_utf8(), letter));
            }
        }
        Some((start, start + c.len_utf8(), c))
    })
}

fn has_entry(c: char) -> bool {
    let lower = c.to_lowercase().next().unwrap_or(c);
    LATIN_BY_CYRILLIC.contains_key(&lower)
}

/// Latin spelling of a single Cyrillic character, or `None` when the
/// character has no table entry.
pub fn latin_for(c: char) -> Option<String> {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let latin = LATIN_BY_CYRILLIC.get(&lower)?;
    if c.is_uppercase() {
        Some(capitalize(latin))
    } else {
        Some((*latin).to_string())
    }
}

/// Best-effort conversion of Latin Uzbek back to Cyrillic.
///
/// Latin spellings are matched leftmost-longest, so `o'`, `g'` and digraphs
/// such as `sh` take precedence over single letters. Silent letters (`ь`)
/// cannot be restored.
pub fn to_cyrillic(text: &str) -> String {
    let text = unify_apostrophes(text);
    let table = &*CYRILLIC_BY_LATIN;

    let mut output = String::with_capacity(text.len() * 2);
    let mut last_match_end = 0;
    for m in table.ac.find_iter(&text) {
        output.push_str(&text[last_match_end..m.start()]);

        let letter = table.letters[m.pattern().as_usize()];
        let source_is_upper = text[m.start()..]
            .chars()
            .next()
            .is_some_and(char::is_uppercase);
        if source_is_upper {
            output.extend(letter.to_uppercase());
        } else {
            output.push(letter);
        }

        last_match_end = m.end();
    }
    output.push_str(&text[last_match_end..]);
    output
}

/// Replace every apostrophe-like code point with `'`.
pub fn unify_apostrophes(text: &str) -> String {
    text.chars()
        .map(|c| if APOSTROPHE_VARIANTS.contains(&c) { '\'' } else { c })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_letters() {
        assert_eq!(to_latin("бугун ҳаво ҳарорати"), "bugun havo harorati");
        assert_eq!(to_latin("ўзгаради"), "o'zgaradi");
        assert_eq!(to_latin("ғалаба"), "g'alaba");
        assert_eq!(to_latin("қишлоқ"), "qishloq");
    }

    #[test]
    fn test_uppercase_is_capitalized() {
        assert_eq!(to_latin("Ёшлар"), "Yoshlar");
        assert_eq!(to_latin("ЧОРШАНБА"), "ChORShANBA");
        assert_eq!(to_latin("Ўрта"), "O'rta");
        assert_eq!(to_latin("Ғолиб"), "G'olib");
    }

    #[test]
    fn test_silent_and_hard_sign() {
        assert_eq!(to_latin("мальлумот"), "mallumot");
        assert_eq!(to_latin("съезд"), "s'ezd");
        assert_eq!(to_latin("Ь"), "");
    }

    #[test]
    fn test_decomposed_letters_composed() {
        assert_eq!(to_latin("у\u{0306}зи"), "o'zi");
        assert_eq!(to_latin("Ои\u{0306}"), "Oy");
        assert_eq!(to_latin("И\u{0306}ил"), "Yil");
        // Latin letters with combining marks are not composed
        assert_eq!(to_latin("kafe\u{0301}"), "kafe\u{0301}");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(to_latin("Toshkent 2024, №5!"), "Toshkent 2024, №5!");
        assert_eq!(to_latin("Бугун 25-май"), "Bugun 25-may");
    }

    #[test]
    fn test_to_latin_idempotent_on_latin() {
        let text = "O'zbekiston Respublikasi poytaxti Toshkent shahri.";
        assert_eq!(to_latin(&to_latin(text)), to_latin(text));
        assert_eq!(to_latin(text), text);
    }

    #[test]
    fn test_to_cyrillic_prefers_longest_match() {
        assert_eq!(to_cyrillic("shahar"), "шаҳар");
        assert_eq!(to_cyrillic("g'alaba"), "ғалаба");
        assert_eq!(to_cyrillic("choy"), "чой");
        assert_eq!(to_cyrillic("yoshlar"), "ёшлар");
    }

    #[test]
    fn test_to_cyrillic_case_and_apostrophes() {
        assert_eq!(to_cyrillic("O‘zbekiston"), "Ўзбекистон");
        assert_eq!(to_cyrillic("SHAHAR"), "ШАҲАР");
        assert_eq!(to_cyrillic("Toshkent 2024"), "Тошкент 2024");
    }

    #[test]
    fn test_round_trip_without_ambiguous_letters() {
        let text = "Бугун ҳаво ҳарорати кескин ўзгаради";
        assert_eq!(to_cyrillic(&to_latin(text)), text);
    }

    #[test]
    fn test_unify_apostrophes() {
        assert_eq!(
            unify_apostrophes("o\u{2018}g\u{2019}i\u{02BB}l\u{02BC}`"),
            "o'g'i'l''"
        );
    }
}
