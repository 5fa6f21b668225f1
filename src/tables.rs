//! Static data: tone maps, letter-modification maps, consonant sets and the
//! compound-vowel tone-placement table.
//!
//! Everything here is read-only for the life of the process. `VOWELS` is the
//! 72-entry table (12 base vowels × 6 tone levels, `none` + the five marks)
//! that the rest of the engine treats as the single source of truth for
//! which accented character a (base vowel, tone) pair produces; the tone
//! maps below are derived views over the same data, kept as separate phf
//! maps because that's the shape `add_tone_char` wants on the hot path.

use phf::{phf_map, phf_ordered_set, phf_set, Map, OrderedSet, Set};

/// A tone mark in Vietnamese.
///
/// - **Acute:** dấu sắc
/// - **Grave:** dấu huyền
/// - **HookAbove:** dấu hỏi
/// - **Tilde:** dấu ngã
/// - **Underdot:** dấu nặng
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneMark {
    Acute,
    Grave,
    HookAbove,
    Tilde,
    Underdot,
}

/// A modification applied to a letter.
///
/// - **Circumflex:** the chevron (ˆ) on â/ê/ô.
/// - **Breve:** the half-circle (˘) on ă.
/// - **Horn:** the hook attached to ơ/ư.
/// - **Dyet:** the stroke through d (đ).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterModification {
    Circumflex,
    Breve,
    Horn,
    Dyet,
}

/// Ordered set of the 72 accented forms of the 12 base Vietnamese vowels
/// (a ă â e ê i o ô ơ u ư y), each with its six tone variants (none, acute,
/// grave, hook-above, tilde, underdot) grouped consecutively. The grouping
/// lets [`remove_tone_mark`] find "the same vowel with no tone" via simple
/// index arithmetic instead of a second map.
pub static VOWELS: OrderedSet<char> = phf_ordered_set![
    'a', 'à', 'ả', 'ã', 'á', 'ạ', 'ă', 'ằ', 'ẳ', 'ẵ', 'ắ', 'ặ', 'â', 'ầ', 'ẩ', 'ẫ', 'ấ', 'ậ', 'e',
    'è', 'ẻ', 'ẽ', 'é', 'ẹ', 'ê', 'ề', 'ể', 'ễ', 'ế', 'ệ', 'i', 'ì', 'ỉ', 'ĩ', 'í', 'ị', 'o', 'ò',
    'ỏ', 'õ', 'ó', 'ọ', 'ô', 'ồ', 'ổ', 'ỗ', 'ố', 'ộ', 'ơ', 'ờ', 'ở', 'ỡ', 'ớ', 'ợ', 'u', 'ù', 'ủ',
    'ũ', 'ú', 'ụ', 'ư', 'ừ', 'ử', 'ữ', 'ứ', 'ự', 'y', 'ỳ', 'ỷ', 'ỹ', 'ý', 'ỵ'
];

/// Lowercase vowels that already carry some tone mark (used to recognize a
/// key revert target: a buffer ends in one of these only if a tone has
/// already been placed).
pub static ACCENT_VOWELS: Set<char> = phf_set![
    'à', 'ả', 'ã', 'á', 'ạ', 'ằ', 'ẳ', 'ẵ', 'ắ', 'ặ', 'ầ', 'ẩ', 'ẫ', 'ấ', 'ậ', 'è', 'ẻ', 'ẽ', 'é',
    'ẹ', 'ề', 'ể', 'ễ', 'ế', 'ệ', 'ì', 'ỉ', 'ĩ', 'í', 'ị', 'ò', 'ỏ', 'õ', 'ó', 'ọ', 'ồ', 'ổ', 'ỗ',
    'ố', 'ộ', 'ờ', 'ở', 'ỡ', 'ớ', 'ợ', 'ù', 'ủ', 'ũ', 'ú', 'ụ', 'ừ', 'ử', 'ữ', 'ứ', 'ự', 'ỳ', 'ỷ',
    'ỹ', 'ý'
];

pub static ACUTE_MAP: Map<char, char> = phf_map! {
    'a' => 'á', 'â' => 'ấ', 'ă' => 'ắ', 'e' => 'é', 'ê' => 'ế', 'i' => 'í',
    'o' => 'ó', 'ô' => 'ố', 'ơ' => 'ớ', 'u' => 'ú', 'ư' => 'ứ', 'y' => 'ý',
    'A' => 'Á', 'Â' => 'Ấ', 'Ă' => 'Ắ', 'E' => 'É', 'Ê' => 'Ế', 'I' => 'Í',
    'O' => 'Ó', 'Ô' => 'Ố', 'Ơ' => 'Ớ', 'U' => 'Ú', 'Ư' => 'Ứ', 'Y' => 'Ý',
};

pub static GRAVE_MAP: Map<char, char> = phf_map! {
    'a' => 'à', 'â' => 'ầ', 'ă' => 'ằ', 'e' => 'è', 'ê' => 'ề', 'i' => 'ì',
    'o' => 'ò', 'ô' => 'ồ', 'ơ' => 'ờ', 'u' => 'ù', 'ư' => 'ừ', 'y' => 'ỳ',
    'A' => 'À', 'Â' => 'Ầ', 'Ă' => 'Ằ', 'E' => 'È', 'Ê' => 'Ề', 'I' => 'Ì',
    'O' => 'Ò', 'Ô' => 'Ồ', 'Ơ' => 'Ờ', 'U' => 'Ù', 'Ư' => 'Ừ', 'Y' => 'Ỳ',
};

pub static HOOK_ABOVE_MAP: Map<char, char> = phf_map! {
    'a' => 'ả', 'â' => 'ẩ', 'ă' => 'ẳ', 'e' => 'ẻ', 'ê' => 'ể', 'i' => 'ỉ',
    'o' => 'ỏ', 'ô' => 'ổ', 'ơ' => 'ở', 'u' => 'ủ', 'ư' => 'ử', 'y' => 'ỷ',
    'A' => 'Ả', 'Â' => 'Ẩ', 'Ă' => 'Ẳ', 'E' => 'Ẻ', 'Ê' => 'Ể', 'I' => 'Ỉ',
    'O' => 'Ỏ', 'Ô' => 'Ổ', 'Ơ' => 'Ở', 'U' => 'Ủ', 'Ư' => 'Ử', 'Y' => 'Ỷ',
};

pub static TILDE_MAP: Map<char, char> = phf_map! {
    'a' => 'ã', 'ă' => 'ẵ', 'â' => 'ẫ', 'e' => 'ẽ', 'ê' => 'ễ', 'i' => 'ĩ',
    'o' => 'õ', 'ô' => 'ỗ', 'ơ' => 'ỡ', 'u' => 'ũ', 'ư' => 'ữ', 'y' => 'ỹ',
    'A' => 'Ã', 'Ă' => 'Ẵ', 'Â' => 'Ẫ', 'E' => 'Ẽ', 'Ê' => 'Ễ', 'I' => 'Ĩ',
    'O' => 'Õ', 'Ô' => 'Ỗ', 'Ơ' => 'Ỡ', 'U' => 'Ũ', 'Ư' => 'Ữ', 'Y' => 'Ỹ',
};

pub static DOT_MAP: Map<char, char> = phf_map! {
    'a' => 'ạ', 'ă' => 'ặ', 'â' => 'ậ', 'e' => 'ẹ', 'ê' => 'ệ', 'i' => 'ị',
    'o' => 'ọ', 'ô' => 'ộ', 'ơ' => 'ợ', 'u' => 'ụ', 'ư' => 'ự', 'y' => 'ỵ',
    'A' => 'Ạ', 'Ă' => 'Ặ', 'Â' => 'Ậ', 'E' => 'Ẹ', 'Ê' => 'Ệ', 'I' => 'Ị',
    'O' => 'Ọ', 'Ô' => 'Ộ', 'Ơ' => 'Ợ', 'U' => 'Ụ', 'Ư' => 'Ự', 'Y' => 'Ỵ',
};

pub static CIRCUMFLEX_MAP: Map<char, char> = phf_map! {
    'a' => 'â', 'e' => 'ê', 'o' => 'ô',
    'ạ' => 'ậ', 'ẹ' => 'ệ', 'ọ' => 'ộ',
    'á' => 'ấ', 'é' => 'ế', 'ó' => 'ố',
    'ả' => 'ẩ', 'ẻ' => 'ể', 'ỏ' => 'ổ',
    'ã' => 'ẫ', 'ẽ' => 'ễ', 'õ' => 'ỗ',
    'à' => 'ầ', 'è' => 'ề', 'ò' => 'ồ',
    'A' => 'Â', 'E' => 'Ê', 'O' => 'Ô',
    'Ạ' => 'Ậ', 'Ẹ' => 'Ệ', 'Ọ' => 'Ộ',
    'Á' => 'Ấ', 'É' => 'Ế', 'Ó' => 'Ố',
    'Ả' => 'Ẩ', 'Ẻ' => 'Ể', 'Ỏ' => 'Ổ',
    'Ã' => 'Ẫ', 'Ẽ' => 'Ễ', 'Õ' => 'Ỗ',
    'À' => 'Ầ', 'È' => 'Ề', 'Ò' => 'Ồ',
};

pub static DYET_MAP: Map<char, char> = phf_map! {
    'd' => 'đ', 'D' => 'Đ',
};

pub static HORN_MAP: Map<char, char> = phf_map! {
    'u' => 'ư', 'o' => 'ơ',
    'ú' => 'ứ', 'ó' => 'ớ', 'ù' => 'ừ', 'ò' => 'ờ',
    'ủ' => 'ử', 'ỏ' => 'ở', 'ũ' => 'ữ', 'õ' => 'ỡ', 'ọ' => 'ợ',
    'U' => 'Ư', 'O' => 'Ơ',
    'Ú' => 'Ứ', 'Ó' => 'Ớ', 'Ù' => 'Ừ', 'Ò' => 'Ờ',
    'Ủ' => 'Ử', 'Ỏ' => 'Ở', 'Ũ' => 'Ữ', 'Õ' => 'Ỡ', 'Ọ' => 'Ợ',
};

pub static BREVE_MAP: Map<char, char> = phf_map! {
    'a' => 'ă', 'á' => 'ắ', 'à' => 'ằ', 'ả' => 'ẳ', 'ã' => 'ẵ', 'ạ' => 'ặ',
    'A' => 'Ă', 'Á' => 'Ắ', 'À' => 'Ằ', 'Ả' => 'Ẳ', 'Ã' => 'Ẵ', 'Ạ' => 'Ặ',
};

/// Recognized initial-consonant clusters, single letters.
pub static SINGLE_INITIAL_CONSONANTS: Set<char> =
    phf_set!['b', 'c', 'd', 'đ', 'g', 'h', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'x'];

/// Recognized initial-consonant digraphs/trigraphs.
pub static DIGRAPH_INITIAL_CONSONANTS: Set<&'static str> =
    phf_set!["ch", "gh", "gi", "kh", "nh", "ng", "ph", "th", "tr", "qu", "ngh"];

/// Recognized final-consonant clusters.
pub static FINAL_CONSONANTS: Set<&'static str> =
    phf_set!["c", "ch", "m", "n", "ng", "nh", "p", "t"];

/// Recognized vowel nuclei (cleaned, lowercase, no diacritics). Rule 3 of
/// the phonology validator consults this set.
pub static NUCLEI: Set<&'static str> = phf_set![
    "a", "e", "i", "o", "u", "y", "ia", "ya", "ai", "ao", "au", "ay", "eo", "eu", "ey", "ie", "io",
    "iu", "oa", "oe", "oi", "oo", "ou", "oy", "ua", "ue", "ui", "uo", "uu", "uy", "ye", "ieu",
    "oai", "oao", "oay", "oeo", "uao", "uay", "uoi", "uou", "uya", "uye", "uyu", "yeu", "uyen",
    "uyet", "iec", "uong", "uoc",
];

const SPECIAL_VOWEL_PAIRS: [&str; 6] = ["oa", "oe", "oo", "uy", "uo", "ie"];

/// Final-consonant-sensitive placement table for compound nuclei: cluster
/// key, with `_f` suffix meaning "syllable has a final consonant". Values
/// are 0-indexed positions within the vowel cluster. Covers the clusters
/// where final-consonant presence or an inherent priority vowel decides the
/// placement; anything not listed here falls back to the general rule in
/// [`tone_mark_index`] (single vowel trivially takes the tone; the
/// remaining regular 2-letter clusters take the first letter when bare,
/// the second when a final consonant follows).
pub static CLUSTER_TONE_INDEX: Map<&'static str, u8> = phf_map! {
    "oa" => 1, "oa_f" => 1,
    "oe" => 1, "oe_f" => 1,
    "oo" => 1, "oo_f" => 1,
    "uy" => 1, "uy_f" => 1,
    "uo" => 1, "uo_f" => 1,
    "ie" => 1, "ie_f" => 1,
    "ia" => 0,
    "ya" => 0,
    "ye" => 0,
    "ai" => 0, "ai_f" => 1,
    "ao" => 0, "ao_f" => 1,
    "au" => 0, "au_f" => 1,
    "ay" => 0, "ay_f" => 1,
    "eo" => 0, "eo_f" => 1,
    "oi" => 0, "oi_f" => 1,
    "ui" => 0, "ui_f" => 1,
    "uu" => 0, "uu_f" => 1,
    "ua" => 0, "ua_f" => 1,
    "ieu" => 1,
    "oai" => 1,
    "oao" => 1,
    "oay" => 1,
    "oeo" => 1,
    "uai" => 1,
    "uay" => 1,
    "uoi" => 1,
    "uou" => 1,
    "uya" => 1,
    "uye" => 1,
    "uyu" => 1,
    "yeu" => 0,
    "uyen" => 2,
    "uyet" => 2,
    "uong" => 1,
    "uoc" => 1,
};

/// Strip tone mark and letter modification off a char, collapsing it to one
/// of the 12 base vowel letters (or leaving consonants untouched).
pub fn clean_char(ch: char) -> char {
    const FAMILIES: [&str; 7] = [
        "aàảãáạăằẳẵắặâầẩẫấậ",
        "dđ",
        "eèẻẽéẹêềểễếệ",
        "iìỉĩíị",
        "oòỏõóọôồổỗốộơờởỡớợ",
        "uùủũúụưừửữứự",
        "yỳỷỹýỵ",
    ];
    let is_upper = ch.is_uppercase();
    let lower = ch.to_lowercase().next().unwrap_or(ch);
    let mut result = ch;
    for family in FAMILIES {
        if family.contains(lower) {
            result = family.chars().next().unwrap();
            break;
        }
    }
    if is_upper {
        result.to_ascii_uppercase()
    } else {
        result
    }
}

/// Strip only the tone mark off a char, keeping any letter modification
/// (â/ê/ô/ă/ơ/ư survive; the tone diacritic does not). Uses the grouping of
/// six consecutive entries per base vowel in [`VOWELS`].
pub fn remove_tone_mark(ch: char) -> char {
    let is_upper = ch.is_uppercase();
    let lower = ch.to_lowercase().next().unwrap_or(ch);
    let Some(index) = VOWELS.get_index(&lower) else {
        return ch;
    };
    let base_index = index - index % 6;
    let mut result = *VOWELS.index(base_index).unwrap();
    if is_upper {
        result = result.to_uppercase().next().unwrap_or(result);
    }
    result
}

pub fn is_vowel(ch: char) -> bool {
    let lower = ch.to_lowercase().next().unwrap_or(ch);
    VOWELS.contains(&ch) || VOWELS.contains(&lower)
}

pub fn add_tone_char(ch: char, tone_mark: ToneMark) -> char {
    let map = match tone_mark {
        ToneMark::Acute => &ACUTE_MAP,
        ToneMark::Grave => &GRAVE_MAP,
        ToneMark::HookAbove => &HOOK_ABOVE_MAP,
        ToneMark::Tilde => &TILDE_MAP,
        ToneMark::Underdot => &DOT_MAP,
    };
    *map.get(&ch).unwrap_or(&ch)
}

pub fn add_modification_char(ch: char, modification: LetterModification) -> char {
    let map = match modification {
        LetterModification::Circumflex => &CIRCUMFLEX_MAP,
        LetterModification::Breve => &BREVE_MAP,
        LetterModification::Horn => &HORN_MAP,
        LetterModification::Dyet => &DYET_MAP,
    };
    *map.get(&ch).unwrap_or(&ch)
}

pub fn extract_tone_char(ch: char) -> Option<ToneMark> {
    if ACUTE_MAP.values().any(|c| *c == ch) {
        return Some(ToneMark::Acute);
    }
    if GRAVE_MAP.values().any(|c| *c == ch) {
        return Some(ToneMark::Grave);
    }
    if HOOK_ABOVE_MAP.values().any(|c| *c == ch) {
        return Some(ToneMark::HookAbove);
    }
    if TILDE_MAP.values().any(|c| *c == ch) {
        return Some(ToneMark::Tilde);
    }
    if DOT_MAP.values().any(|c| *c == ch) {
        return Some(ToneMark::Underdot);
    }
    None
}

pub fn extract_tone(input: &str) -> Option<ToneMark> {
    input.chars().find_map(extract_tone_char)
}

pub fn extract_letter_modifications(input: &str) -> Vec<(usize, LetterModification)> {
    input
        .chars()
        .enumerate()
        .filter_map(|(index, ch)| {
            if HORN_MAP.values().any(|c| *c == ch) {
                return Some((index, LetterModification::Horn));
            }
            if BREVE_MAP.values().any(|c| *c == ch) {
                return Some((index, LetterModification::Breve));
            }
            if CIRCUMFLEX_MAP.values().any(|c| *c == ch) {
                return Some((index, LetterModification::Circumflex));
            }
            if DYET_MAP.values().any(|c| *c == ch) {
                return Some((index, LetterModification::Dyet));
            }
            None
        })
        .collect()
}

/// Index (0-based, relative to the start of the vowel cluster) of the
/// character that should carry a tone mark, per §4.3.1: single vowel takes
/// it; ơ/ê/â in a cluster take priority; otherwise consult
/// [`CLUSTER_TONE_INDEX`] (final-consonant-sensitive for the clusters where
/// it matters), falling back to "bare 2-letter cluster -> first letter,
/// 2-letter cluster with a final consonant or any 3+ letter cluster ->
/// second letter" for anything the table doesn't name.
pub fn tone_mark_index(vowel: &str, has_final_consonant: bool) -> usize {
    let len = vowel.chars().count();
    if len <= 1 {
        return 0;
    }

    if let Some(index) = vowel.chars().position(|c| c == 'ơ' || c == 'Ơ') {
        return index;
    }
    if let Some(index) = vowel.chars().position(|c| c == 'ê' || c == 'Ê') {
        return index;
    }
    if let Some(index) = vowel.chars().position(|c| c == 'â' || c == 'Â') {
        return index;
    }

    let cleaned: String = vowel.chars().map(clean_char).map(|c| c.to_ascii_lowercase()).collect();

    let key = if has_final_consonant {
        format!("{cleaned}_f")
    } else {
        cleaned.clone()
    };
    if let Some(index) = CLUSTER_TONE_INDEX.get(key.as_str()) {
        return *index as usize;
    }
    if let Some(index) = CLUSTER_TONE_INDEX.get(cleaned.as_str()) {
        return *index as usize;
    }
    if SPECIAL_VOWEL_PAIRS.contains(&cleaned.as_str()) {
        return 1;
    }

    if !has_final_consonant && len == 2 {
        0
    } else {
        1
    }
}

/// Indices (relative to the start of the vowel cluster) that a letter
/// modification applies to, per §4.3.2.
///
/// - Dyet always targets the initial consonant, handled by the caller.
/// - Circumflex targets whichever of a/o/e is present (exactly one).
/// - Breve targets `a`.
/// - Horn targets u/o, pairing both letters of `uo`/`uoi`/`uou`, and is a
///   no-op on `oa`.
pub fn modification_positions(vowel: &str, modification: LetterModification) -> Vec<usize> {
    let lower = vowel.to_lowercase();

    match modification {
        LetterModification::Dyet => vec![0],
        LetterModification::Circumflex => {
            let candidates: Vec<usize> = [lower.find('a'), lower.find('o'), lower.find('e')]
                .into_iter()
                .flatten()
                .collect();
            if candidates.len() == 1 {
                vec![candidates[0]]
            } else {
                Vec::new()
            }
        }
        LetterModification::Breve => lower.find('a').map(|i| vec![i]).unwrap_or_default(),
        LetterModification::Horn => {
            if lower == "oa" {
                return Vec::new();
            }
            if lower == "uo" || lower == "uoi" || lower == "uou" {
                return vec![0, 1];
            }
            if let Some(index) = lower.find('u').or_else(|| lower.find('o')) {
                return vec![index];
            }
            Vec::new()
        }
    }
}
