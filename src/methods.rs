//! Telex/VNI trigger definitions (§4.3 stages 1-3, 5): which key, in which
//! input method, maps to which transformation. Kept as `phf` maps in the
//! donor's style — small perfect-hash tables rather than runtime-built
//! `HashMap`s, since these are read-only for the life of the process.

use phf::phf_map;

use crate::tables::{LetterModification, ToneMark};

/// Input method: changes the trigger-to-action map, never the phonology
/// rules (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    Telex,
    Vni,
}

/// Telex tone triggers: `s f r x j`.
pub static TELEX_TONE: phf::Map<char, ToneMark> = phf_map! {
    's' => ToneMark::Acute,
    'f' => ToneMark::Grave,
    'r' => ToneMark::HookAbove,
    'x' => ToneMark::Tilde,
    'j' => ToneMark::Underdot,
};

/// VNI tone triggers: digits `1..5`.
pub static VNI_TONE: phf::Map<char, ToneMark> = phf_map! {
    '1' => ToneMark::Acute,
    '2' => ToneMark::Grave,
    '3' => ToneMark::HookAbove,
    '4' => ToneMark::Tilde,
    '5' => ToneMark::Underdot,
};

/// A Telex vowel-mark trigger doubles the vowel it modifies (`aa`, `ee`,
/// `oo`) or is a distinct letter (`aw`, `ow`, `uw`). This table records,
/// for each trigger key, which base vowel it must immediately follow and
/// which modification it applies.
#[derive(Debug, Clone, Copy)]
pub struct TelexMarkTrigger {
    pub base_vowel: char,
    pub modification: LetterModification,
}

pub static TELEX_MARK: phf::Map<char, TelexMarkTrigger> = phf_map! {
    'a' => TelexMarkTrigger { base_vowel: 'a', modification: LetterModification::Circumflex },
    'e' => TelexMarkTrigger { base_vowel: 'e', modification: LetterModification::Circumflex },
    'o' => TelexMarkTrigger { base_vowel: 'o', modification: LetterModification::Circumflex },
};

/// `w` is special: after `a` it applies Breve, after `o`/`u` it applies
/// Horn (and pairs both letters of a `uo` cluster, §4.3.2), and with no
/// eligible preceding vowel it becomes a bare `ư`/`Ư` (stage 5).
pub static TELEX_W_TARGETS: phf::Map<char, LetterModification> = phf_map! {
    'a' => LetterModification::Breve,
    'o' => LetterModification::Horn,
    'u' => LetterModification::Horn,
};

/// VNI vowel-mark triggers: `6` circumflex, `7` horn, `8` breve. Unlike
/// Telex the target vowel isn't encoded in the key itself, so the pipeline
/// searches the buffer for an eligible vowel matching the modification.
pub static VNI_MARK: phf::Map<char, LetterModification> = phf_map! {
    '6' => LetterModification::Circumflex,
    '7' => LetterModification::Horn,
    '8' => LetterModification::Breve,
};

/// Is `key` the stroke trigger for `đ` in this method (Telex: a second `d`;
/// VNI: `9`)?
pub fn is_stroke_trigger(method: InputMethod, key: char) -> bool {
    match method {
        InputMethod::Telex => key.to_ascii_lowercase() == 'd',
        InputMethod::Vni => key == '9',
    }
}

pub fn tone_trigger(method: InputMethod, key: char) -> Option<ToneMark> {
    match method {
        InputMethod::Telex => TELEX_TONE.get(&key.to_ascii_lowercase()).copied(),
        InputMethod::Vni => VNI_TONE.get(&key).copied(),
    }
}
