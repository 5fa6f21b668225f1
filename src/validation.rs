//! Five-rule phonology predicate (§4.4). A candidate syllable is valid iff
//! all five rules hold; the validator never raises, it only returns a
//! boolean, and the pipeline decides what to do with a `false`.

use crate::parsing::{self, SyllableParts};
use crate::tables::{self, DIGRAPH_INITIAL_CONSONANTS, FINAL_CONSONANTS, NUCLEI,
    SINGLE_INITIAL_CONSONANTS};

/// Split a raw syllable (lowercase or original case, accents intact) into
/// initial consonant, vowel nucleus, final consonant. Delegates to
/// [`parsing::split_syllable`], which special-cases the `gi`/`qu` initial
/// digraphs.
pub fn split_syllable(raw: &str) -> SyllableParts<'_> {
    parsing::split_syllable(raw)
}

/// Rule 1: at least one vowel (with any diacritic) is present. An empty
/// vowel component is treated as trivially valid: a consonant-only prefix
/// like `d` or `ng` is a valid in-progress partial syllable, not a rule
/// violation — it simply hasn't reached a nucleus yet.
fn has_vowel(parts: &SyllableParts<'_>) -> bool {
    parts.vowel.is_empty() || parts.vowel.chars().any(tables::is_vowel)
}

/// Rule 2: the initial consonant cluster, if any, is a recognized onset.
fn valid_initial(initial: &str) -> bool {
    let lower = initial.to_lowercase();
    match lower.chars().count() {
        0 => true,
        1 => SINGLE_INITIAL_CONSONANTS.contains(&lower.chars().next().unwrap()),
        _ => DIGRAPH_INITIAL_CONSONANTS.contains(lower.as_str()),
    }
}

/// Rule 3: the cleaned, lowercase nucleus is a recognized vowel cluster.
fn valid_nucleus(vowel: &str) -> bool {
    if vowel.is_empty() {
        return true;
    }
    let cleaned: String = vowel
        .chars()
        .map(tables::clean_char)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    NUCLEI.contains(cleaned.as_str())
}

/// Rule 4: `c`/`g`/`ng` may not precede front vowels `e ê i`; `q` must be
/// followed by `u`.
fn spelling_constraints(initial: &str, vowel: &str) -> bool {
    let initial_lower = initial.to_lowercase();
    let first_vowel = vowel
        .chars()
        .next()
        .map(tables::clean_char)
        .map(|c| c.to_ascii_lowercase());
    let is_front = matches!(first_vowel, Some('e') | Some('i'));

    match initial_lower.as_str() {
        "c" if is_front => false,
        "g" if is_front => false,
        "ng" if is_front => false,
        "q" => first_vowel == Some('u'),
        _ => true,
    }
}

/// Rule 5: the trailing consonant cluster, if any, is a recognized coda and
/// compatible with the nucleus. Compatibility here follows the standard
/// Vietnamese restriction that `ch`/`nh` only close front/mid nuclei while
/// `c`/`ng` close back nuclei; anything not covered by that pairing still
/// has to at least be a recognized final consonant.
fn valid_final(vowel: &str, final_consonant: &str) -> bool {
    if final_consonant.is_empty() {
        return true;
    }
    let lower = final_consonant.to_lowercase();
    if !FINAL_CONSONANTS.contains(lower.as_str()) {
        return false;
    }
    let cleaned_vowel: String = vowel
        .chars()
        .map(tables::clean_char)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let back = matches!(cleaned_vowel.as_str(), "a" | "o" | "u" | "oa" | "oo" | "ua");
    match lower.as_str() {
        "ch" | "nh" if back => false,
        _ => true,
    }
}

/// Entry point: does `raw` (a lowercase, possibly-accented syllable so far)
/// satisfy all five phonology rules?
///
/// A syllable with no vowel yet is trivially valid regardless of what its
/// consonant run looks like: `v`, `vn`, `ngh` are all legitimate
/// in-progress prefixes (or, for something like a shortcut trigger,
/// perfectly fine ASCII that just never becomes a Vietnamese word) — rule
/// 2's onset restriction only makes sense once a nucleus has actually
/// appeared.
pub fn is_valid_syllable(raw: &str) -> bool {
    let parts = split_syllable(raw);
    if parts.vowel.is_empty() {
        return true;
    }
    has_vowel(&parts)
        && valid_initial(parts.initial)
        && valid_nucleus(parts.vowel)
        && spelling_constraints(parts.initial, parts.vowel)
        && valid_final(parts.vowel, parts.final_consonant)
}

/// Structural variant of [`is_valid_syllable`] used by the pipeline's plain-
/// letter append (§4.3 stage 6, §8 scenario 7): checks that the syllable
/// still *parses* (a vowel exists, the nucleus is a recognized cluster, the
/// coda is recognized and compatible) but skips rule 4's spelling
/// constraint. Rule 4 (`c`/`g`/`ng` before a front vowel, `q` without `u`)
/// is a convention about which *letter* should have been used, not a
/// structural break — per §8 scenario 7, typing `c e` still passes through
/// as `ce` rather than restarting the syllable; only an actual tone/mark
/// transformation is blocked by spelling (§4.3 stage 1-3 via
/// [`is_valid_syllable`]).
pub fn is_structurally_valid_syllable(raw: &str) -> bool {
    let parts = split_syllable(raw);
    if parts.vowel.is_empty() {
        return true;
    }
    has_vowel(&parts)
        && valid_initial(parts.initial)
        && valid_nucleus(parts.vowel)
        && valid_final(parts.vowel, parts.final_consonant)
}
