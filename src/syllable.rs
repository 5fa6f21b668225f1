//! Syllable-level transformations over a char slice: locating the vowel
//! nucleus, placing a tone, applying a letter modification, applying the
//! stroke. The session buffer only ever holds the current syllable (it is
//! cleared at every word boundary, §3 I3), so these functions operate
//! directly on the buffer's contents rather than a separately-parsed type.

use crate::parsing;
use crate::tables::{self, LetterModification, ToneMark};

/// The half-open range of `chars` occupied by the vowel nucleus. Delegates
/// to [`parsing::vowel_range`], which special-cases the `gi`/`qu` initial
/// digraphs (§4.3.1 needs the true nucleus, not just "the first run of
/// vowel-looking letters", to place tones on words like `già`/`quà`
/// correctly).
pub fn vowel_range(chars: &[char]) -> (usize, usize) {
    parsing::vowel_range(chars)
}

/// Place `tone` on the correct vowel of the syllable per §4.3.1, replacing
/// any tone mark already present. Returns `None` if there is no vowel to
/// place a tone on.
pub fn apply_tone(chars: &[char], tone: ToneMark) -> Option<Vec<char>> {
    let (start, end) = vowel_range(chars);
    if start == end {
        return None;
    }
    let vowel: String = chars[start..end].iter().collect();
    let has_final_consonant = end < chars.len();
    let index = tables::tone_mark_index(&vowel, has_final_consonant);
    let target = start + index;
    let base = tables::remove_tone_mark(chars[target]);
    let replaced = tables::add_tone_char(base, tone);
    if replaced == chars[target] {
        return None;
    }
    let mut result = chars.to_vec();
    result[target] = replaced;
    Some(result)
}

/// Strip whatever tone mark is currently present on the syllable (used by
/// the double-key revert path when undoing a tone transformation manually
/// rather than via the saved buffer snapshot). Scans the nucleus back to
/// front since a compound vowel can only carry one tone.
pub fn strip_tone(chars: &[char]) -> Option<Vec<char>> {
    let (start, end) = vowel_range(chars);
    for index in (start..end).rev() {
        if tables::extract_tone_char(chars[index]).is_some() {
            let mut result = chars.to_vec();
            result[index] = tables::remove_tone_mark(chars[index]);
            return Some(result);
        }
    }
    None
}

/// Apply a circumflex/breve/horn modification to the eligible vowel(s) in
/// the nucleus per §4.3.2. Returns `None` if no eligible target exists.
pub fn apply_vowel_modification(
    chars: &[char],
    modification: LetterModification,
) -> Option<Vec<char>> {
    let (start, end) = vowel_range(chars);
    if start == end {
        return None;
    }
    let cleaned: String = chars[start..end]
        .iter()
        .map(|&c| tables::clean_char(c).to_ascii_lowercase())
        .collect();
    let positions = tables::modification_positions(&cleaned, modification);
    if positions.is_empty() {
        return None;
    }
    let mut result = chars.to_vec();
    let mut changed = false;
    for position in positions {
        let index = start + position;
        let modified = tables::add_modification_char(chars[index], modification);
        if modified != chars[index] {
            result[index] = modified;
            changed = true;
        }
    }
    changed.then_some(result)
}

/// Apply the stroke (`d` -> `đ`) to the leading consonant. Returns `None`
/// if the first character isn't a plain `d`/`D`.
pub fn apply_stroke(chars: &[char]) -> Option<Vec<char>> {
    let first = *chars.first()?;
    let modified = tables::add_modification_char(first, LetterModification::Dyet);
    if modified == first {
        return None;
    }
    let mut result = chars.to_vec();
    result[0] = modified;
    Some(result)
}
