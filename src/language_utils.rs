/*!
 * Language tag handling for transcription metadata.
 *
 * Recognizers report languages as ISO 639-1 (`sr`), ISO 639-2 (`srp`) or
 * BCP 47 style tags with script and region subtags (`sr-Latn-RS`). Only the
 * primary subtag identifies the language; a `Latn`/`Cyrl` subtag also says
 * which script the transcription text is written in.
 */

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use isolang::Language;
use once_cell::sync::Lazy;

use crate::script::Script;

/// ISO 639-2/B codes that differ from their ISO 639-2/T form
static BIBLIOGRAPHIC_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("alb", "sqi"),
        ("arm", "hye"),
        ("chi", "zho"),
        ("cze", "ces"),
        ("dut", "nld"),
        ("fre", "fra"),
        ("geo", "kat"),
        ("ger", "deu"),
        ("gre", "ell"),
        ("mac", "mkd"),
        ("rum", "ron"),
        ("scc", "srp"),
        ("scr", "hrv"),
        ("slo", "slk"),
        ("wel", "cym"),
    ])
});

/// Kind of code a language tag's primary subtag uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

/// Primary subtag of a tag, lowercased (`sr-Latn-RS` → `sr`)
fn primary_subtag(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

fn lookup(primary: &str) -> Option<(Language, LanguageCodeType)> {
    match primary.len() {
        2 => Language::from_639_1(primary).map(|lang| (lang, LanguageCodeType::Part1)),
        3 => {
            if let Some(lang) = Language::from_639_3(primary) {
                return Some((lang, LanguageCodeType::Part2T));
            }
            BIBLIOGRAPHIC_CODES
                .get(primary)
                .and_then(|t| Language::from_639_3(t))
                .map(|lang| (lang, LanguageCodeType::Part2B))
        }
        _ => None,
    }
}

/// Validate a language tag and report which code kind it uses
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    lookup(&primary_subtag(code))
        .map(|(_, kind)| kind)
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Normalize a language tag to its ISO 639-2/T (3-letter) code
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    lookup(&primary_subtag(code))
        .map(|(lang, _)| lang.to_639_3().to_string())
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Normalize to ISO 639-1 when the language has one, ISO 639-2/T otherwise
pub fn normalize_to_part1_or_part2t(code: &str) -> Result<String> {
    let (lang, _) = lookup(&primary_subtag(code))
        .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code))?;

    Ok(match lang.to_639_1() {
        Some(part1) => part1.to_string(),
        None => lang.to_639_3().to_string(),
    })
}

/// Check whether two tags name the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// English name of the language a tag names
pub fn get_language_name(code: &str) -> Result<String> {
    let (lang, _) = lookup(&primary_subtag(code))
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;
    Ok(lang.to_name().to_string())
}

/// Script named by a `Latn`/`Cyrl` subtag, if the tag carries one
pub fn script_subtag(code: &str) -> Option<Script> {
    code.split(['-', '_']).skip(1).find_map(|subtag| {
        match subtag.to_lowercase().as_str() {
            "latn" => Some(Script::Latin),
            "cyrl" => Some(Script::Cyrillic),
            _ => None,
        }
    })
}
