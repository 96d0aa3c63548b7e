//! Serbian Latin (Gaj) ↔ Cyrillic (Vuk) letter tables.
//!
//! Built once on first use and read-only afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Latin digraphs that spell a single Cyrillic letter
const DIGRAPHS: [(char, char, char); 3] = [
    ('l', 'j', 'љ'),
    ('n', 'j', 'њ'),
    ('d', 'ž', 'џ'),
];

/// One-to-one letters, lowercase
const LETTERS: [(char, char); 27] = [
    ('a', 'а'), ('b', 'б'), ('v', 'в'), ('g', 'г'), ('d', 'д'), ('đ', 'ђ'),
    ('e', 'е'), ('ž', 'ж'), ('z', 'з'), ('i', 'и'), ('j', 'ј'), ('k', 'к'),
    ('l', 'л'), ('m', 'м'), ('n', 'н'), ('o', 'о'), ('p', 'п'), ('r', 'р'),
    ('s', 'с'), ('t', 'т'), ('ć', 'ћ'), ('u', 'у'), ('f', 'ф'), ('h', 'х'),
    ('c', 'ц'), ('č', 'ч'), ('š', 'ш'),
];

fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Latin letter pair → Cyrillic letter, in lowercase, all-caps and title-case variants
pub static LATIN_DIGRAPHS: Lazy<HashMap<(char, char), char>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (first, second, cyrillic) in DIGRAPHS {
        table.insert((first, second), cyrillic);
        table.insert((upper(first), upper(second)), upper(cyrillic));
        table.insert((upper(first), second), upper(cyrillic));
    }
    table
});

/// Latin letter → Cyrillic letter, both cases
pub static LATIN_LETTERS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (latin, cyrillic) in LETTERS {
        table.insert(latin, cyrillic);
        table.insert(upper(latin), upper(cyrillic));
    }
    table
});

/// Cyrillic letter → Latin spelling, both cases.
///
/// Uppercase digraph letters map to their title-case spelling (`Љ` → `Lj`);
/// the mapper upgrades them to all-caps from context.
pub static CYRILLIC_LETTERS: Lazy<HashMap<char, String>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (latin, cyrillic) in LETTERS {
        table.insert(cyrillic, latin.to_string());
        table.insert(upper(cyrillic), upper(latin).to_string());
    }
    for (first, second, cyrillic) in DIGRAPHS {
        table.insert(cyrillic, format!("{}{}", first, second));
        table.insert(upper(cyrillic), format!("{}{}", upper(first), second));
    }
    table
});

/// All-caps spelling of an uppercase Cyrillic digraph letter (`Љ` → `LJ`)
pub fn all_caps_digraph(cyrillic: char) -> Option<String> {
    DIGRAPHS
        .iter()
        .find(|(_, _, lower)| upper(*lower) == cyrillic)
        .map(|(first, second, _)| format!("{}{}", upper(*first), upper(*second)))
}

/// True for characters in the Cyrillic block
pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// True for Latin letters, including the Serbian diacritic letters
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || LATIN_LETTERS.contains_key(&c)
}
