/*!
 * Tests for Latin / Cyrillic transliteration
 */

use titlovi::script::{Script, ScriptMapper};
use titlovi::{cyrillic_to_latin, latin_to_cyrillic};

/// Test the reference digraph example
#[test]
fn test_latinToCyrillic_withNjDigraph_shouldMapToSingleLetter() {
    assert_eq!(latin_to_cyrillic("Njegova kuća"), "Његова кућа");
}

/// Test the full alphabet in both cases
#[test]
fn test_latinToCyrillic_withFullAlphabet_shouldMapEveryLetter() {
    let latin = "A B V G D Đ E Ž Z I J K L LJ M N NJ O P R S T Ć U F H C Č DŽ Š";
    let cyrillic = "А Б В Г Д Ђ Е Ж З И Ј К Л Љ М Н Њ О П Р С Т Ћ У Ф Х Ц Ч Џ Ш";

    assert_eq!(latin_to_cyrillic(latin), cyrillic);
    assert_eq!(latin_to_cyrillic(&latin.to_lowercase()), cyrillic.to_lowercase());
}

/// Test that unmapped characters pass through both directions
#[test]
fn test_transliterate_withUnmappedCharacters_shouldPassThrough() {
    let text = "2024. — «Q&A» #42 😀";

    assert_eq!(latin_to_cyrillic(text), "2024. — «Q&А» #42 😀");
    assert_eq!(cyrillic_to_latin(text), text);
}

/// Test reverse mapping of uppercase digraph letters by context
#[test]
fn test_cyrillicToLatin_withUppercaseDigraphs_shouldFollowContext() {
    assert_eq!(cyrillic_to_latin("ЏЕП"), "DŽEP");
    assert_eq!(cyrillic_to_latin("Џеп"), "Džep");
    assert_eq!(cyrillic_to_latin("Њ"), "Nj");
    assert_eq!(cyrillic_to_latin("ЊЊ"), "NJNJ");
}

/// Test the round trip over the mapped alphabet
#[test]
fn test_roundTrip_withSentences_shouldRestoreOriginal() {
    for sample in [
        "Njegova kuća je u Čačku.",
        "Đorđe i Ljiljana jedu džem!",
        "VELIKA SLOVA: LJUTNJA, NJIVA, DŽAK",
    ] {
        assert_eq!(ScriptMapper::to_source_script(&ScriptMapper::to_target_script(sample)), sample);
    }
}

/// Test detection tie-break
#[test]
fn test_detectScript_withTie_shouldPreferLatin() {
    let counts = ScriptMapper::detect_script("ab вг");

    assert_eq!(counts.source, 2);
    assert_eq!(counts.target, 2);
    assert_eq!(counts.dominant(), Script::Latin);
    assert_eq!(ScriptMapper::detect_script("abc вгде").dominant(), Script::Cyrillic);
}

/// Test idempotence of both ensure directions
#[test]
fn test_ensureScript_appliedTwice_shouldEqualAppliedOnce() {
    let text = "Dobro jutro, Srbijo";

    let cyrillic = ScriptMapper::ensure_target_script(text);
    assert_eq!(ScriptMapper::ensure_target_script(&cyrillic), cyrillic);

    let latin = ScriptMapper::ensure_source_script(&cyrillic);
    assert_eq!(latin, text);
    assert_eq!(ScriptMapper::ensure_source_script(&latin), latin);
}
