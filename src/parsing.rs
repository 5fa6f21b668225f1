//! Splits a syllable-so-far into initial consonant / vowel nucleus / final
//! consonant. Ported from the donor's `nom`-based `parsing.rs`: the
//! donor's `initial_consonant` parser special-cases `gi`/`qu`, which a
//! naive "scan until the first vowel letter" approach gets wrong (`gi` and
//! `qu` both contain a letter — `i`, `u` — that is itself a vowel letter
//! but functions as part of the initial here, not the nucleus). Getting
//! this right matters beyond rule 2/4 validation: §4.3.1's tone placement
//! depends on correctly locating the nucleus, and `già`/`quà` (tone on the
//! lone true vowel `a`, not on the `i`/`u` of the initial) is exactly the
//! case this guards.

use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_till, take_while};
use nom::sequence::tuple;
use nom::IResult;

use crate::tables;

/// A syllable-so-far split into its three structural parts.
pub struct SyllableParts<'a> {
    pub initial: &'a str,
    pub vowel: &'a str,
    pub final_consonant: &'a str,
}

fn is_vowel_byte(c: char) -> bool {
    tables::is_vowel(c)
}

/// `gi`/`qu` are digraph initials even though their second letter (`i`/`u`)
/// is itself a vowel letter. `gi` is the special case: if the letter
/// *after* `gi` is not a vowel (e.g. `gin`), then `g` alone is the initial
/// and `i` is the nucleus — Vietnamese has no genuine `gi` + `i` nucleus.
fn initial_consonant(input: &str) -> IResult<&str, &str> {
    if input.to_lowercase().starts_with("gi") && !input.chars().nth(2).is_some_and(is_vowel_byte) {
        return tag_no_case("g")(input);
    }
    alt((tag_no_case("gi"), tag_no_case("qu"), take_till(is_vowel_byte)))(input)
}

fn vowel(input: &str) -> IResult<&str, &str> {
    take_while(is_vowel_byte)(input)
}

/// Split `input` (lowercase or original case, accents intact) into initial
/// consonant, vowel nucleus, and final consonant.
pub fn split_syllable(input: &str) -> SyllableParts<'_> {
    match tuple((initial_consonant, vowel))(input) {
        Ok((rest, (initial, vowel))) => {
            SyllableParts { initial, vowel, final_consonant: rest }
        }
        // `initial_consonant`/`vowel` are both total over any `&str` (worst
        // case `take_till`/`take_while` consume zero bytes), so this arm is
        // unreachable in practice; fall back to "no structure recognized"
        // rather than panicking if nom's behavior ever changes.
        Err(_) => SyllableParts { initial: input, vowel: "", final_consonant: "" },
    }
}

/// Same split, but expressed as char-index byte ranges into `chars` rather
/// than `&str` slices — used by `syllable.rs`'s hot-path transformations,
/// which already hold the syllable as `&[char]`.
pub fn vowel_range(chars: &[char]) -> (usize, usize) {
    let joined: String = chars.iter().collect();
    let parts = split_syllable(&joined);
    let start = parts.initial.chars().count();
    let end = start + parts.vowel.chars().count();
    (start, end)
}
