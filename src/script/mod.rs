/*!
 * Latin ↔ Cyrillic script mapping for Serbian subtitle text.
 *
 * Latin input is read greedily: the digraphs `lj`, `nj` and `dž` are matched
 * before single letters, so `Njegova` becomes `Његова` rather than `Нјегова`.
 * Letter case follows the source per variant (`LJ`, `Lj`, `lj`). Characters
 * outside both alphabets (digits, punctuation, other scripts) pass through.
 *
 * - `tables`: the letter tables
 */

pub mod tables;

use serde::{Deserialize, Serialize};

use self::tables::{
    all_caps_digraph, is_cyrillic, is_latin_letter, CYRILLIC_LETTERS, LATIN_DIGRAPHS, LATIN_LETTERS,
};

/// A writing system the mapper converts between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Source script (Serbian Latin)
    Latin,
    /// Target script (Serbian Cyrillic)
    Cyrillic,
}

/// Letter counts per script, as found by detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptCounts {
    /// Latin letters
    pub source: usize,
    /// Cyrillic code points
    pub target: usize,
}

impl ScriptCounts {
    /// Cyrillic only when it strictly outnumbers Latin; ties go to Latin
    pub fn dominant(&self) -> Script {
        if self.target > self.source {
            Script::Cyrillic
        } else {
            Script::Latin
        }
    }
}

/// Script conversion entry points used by the pipeline
pub struct ScriptMapper;

impl ScriptMapper {
    /// Convert Latin text to Cyrillic
    pub fn to_target_script(text: &str) -> String {
        latin_to_cyrillic(text)
    }

    /// Convert Cyrillic text to Latin
    pub fn to_source_script(text: &str) -> String {
        cyrillic_to_latin(text)
    }

    /// Count Latin letters and Cyrillic code points in the text
    pub fn detect_script(text: &str) -> ScriptCounts {
        text.chars().fold(ScriptCounts::default(), |mut counts, c| {
            if is_cyrillic(c) {
                counts.target += 1;
            } else if is_latin_letter(c) {
                counts.source += 1;
            }
            counts
        })
    }

    /// Convert to Cyrillic unless the text is already mostly Cyrillic
    pub fn ensure_target_script(text: &str) -> String {
        if Self::detect_script(text).dominant() == Script::Cyrillic {
            return text.to_string();
        }
        latin_to_cyrillic(text)
    }

    /// Convert to Latin unless the text is already mostly Latin
    pub fn ensure_source_script(text: &str) -> String {
        if Self::detect_script(text).dominant() == Script::Latin {
            return text.to_string();
        }
        cyrillic_to_latin(text)
    }
}

/// Transliterate Serbian Latin text to Cyrillic
pub fn latin_to_cyrillic(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        if let Some(&next) = chars.get(i + 1) {
            if let Some(&letter) = LATIN_DIGRAPHS.get(&(chars[i], next)) {
                result.push(letter);
                i += 2;
                continue;
            }
        }

        result.push(LATIN_LETTERS.get(&chars[i]).copied().unwrap_or(chars[i]));
        i += 1;
    }

    result
}

/// Transliterate Serbian Cyrillic text to Latin
pub fn cyrillic_to_latin(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if let Some(caps) = all_caps_digraph(c) {
            if in_all_caps_context(&chars, i) {
                result.push_str(&caps);
                continue;
            }
        }

        match CYRILLIC_LETTERS.get(&c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }

    result
}

// An uppercase digraph letter is spelled all-caps when the following letter is
// uppercase, or at a word end when the preceding letter is uppercase.
fn in_all_caps_context(chars: &[char], i: usize) -> bool {
    match chars.get(i + 1) {
        Some(next) if next.is_alphabetic() => next.is_uppercase(),
        _ => i > 0 && chars[i - 1].is_alphabetic() && chars[i - 1].is_uppercase(),
    }
}
