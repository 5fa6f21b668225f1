//! The seven-stage pipeline (§4.3). Stages 1-6 operate on the session
//! buffer and are tried in order; the first stage whose precondition
//! matches *and* whose candidate validates wins. Stage 7 (shortcut
//! expansion) only fires at a word boundary and is driven by `engine.rs`,
//! which owns the shortcut table; this module exposes the per-key letter
//! pipeline (stages 1-6) that `engine.rs` calls for every non-boundary key.

use crate::buffer::Buffer;
use crate::error::{PipelineError, PipelineResult};
use crate::keys::InputToken;
use crate::methods::{self, InputMethod};
use crate::syllable;
use crate::tables::LetterModification;
use crate::validation;

/// What the host must do with a decision (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Action {
    None = 0,
    Send = 1,
    Restore = 2,
}

/// A committed (or null) edit instruction (§4.6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub backspace_count: u8,
    pub output: Vec<char>,
}

impl Decision {
    pub fn none() -> Self {
        Decision { action: Action::None, backspace_count: 0, output: Vec::new() }
    }
}

/// Maximum backspace/output length a decision may carry (§6.1 `ImeResult`
/// fields are `uint8_t`s sized for at most 31 meaningful entries plus a
/// count byte; B1 asks that exceeding it reject the transformation).
const MAX_EDIT_LEN: usize = 31;

fn build_decision(prior: &[char], new: &[char]) -> Decision {
    let common = prior.iter().zip(new.iter()).take_while(|(a, b)| a == b).count();
    let backspace = prior.len() - common;
    let output: Vec<char> = new[common..].to_vec();
    let action = if backspace == 0 && output.is_empty() { Action::None } else { Action::Send };
    Decision { action, backspace_count: backspace as u8, output }
}

/// Validate `candidate` and check it fits the §6.1 size limits, using
/// `PipelineError` internally (§7's "local" error taxonomy) purely to let
/// `?` short-circuit the two checks below; never surfaced past this
/// function. Returns `Err` on either failure, leaving `buffer` and its undo
/// record untouched — the pipeline's caller tries the next stage.
fn validate_candidate(buffer: &Buffer, candidate: &[char]) -> PipelineResult<Decision> {
    let candidate_str: String = candidate.iter().collect();
    if !validation::is_valid_syllable(&candidate_str) {
        log::trace!("pipeline: candidate {candidate_str:?} rejected by validator");
        return Err(PipelineError::ValidationFailed);
    }
    let prior_chars: Vec<char> = buffer.as_chars().to_vec();
    let decision = build_decision(&prior_chars, candidate);
    if decision.backspace_count as usize > MAX_EDIT_LEN || decision.output.len() > MAX_EDIT_LEN {
        log::trace!("pipeline: candidate {candidate_str:?} exceeds edit size limit");
        return Err(PipelineError::BufferOverflow);
    }
    Ok(decision)
}

/// Commit a validated candidate to `buffer` and record the undo point keyed
/// by `trigger_key`. Returns `None` (instead of propagating the pipeline
/// error) on any failure, since by this point the caller only cares whether
/// to fall through to the next stage.
fn try_commit(buffer: &mut Buffer, trigger_key: char, candidate: Vec<char>) -> Option<Decision> {
    let decision = validate_candidate(buffer, &candidate).ok()?;
    let prior_snapshot = buffer.snapshot();
    buffer.replace_tail(buffer.len(), &candidate);
    buffer.record_undo(trigger_key, &prior_snapshot);
    Some(decision)
}

/// Stage 1: stroke (`đ`/`Đ`).
fn stage_stroke(buffer: &mut Buffer, method: InputMethod, key: char) -> Option<Decision> {
    if !methods::is_stroke_trigger(method, key) {
        return None;
    }
    let candidate = syllable::apply_stroke(buffer.as_chars())?;
    try_commit(buffer, key.to_ascii_lowercase(), candidate)
}

/// Stage 2: tone mark.
fn stage_tone(buffer: &mut Buffer, method: InputMethod, key: char) -> Option<Decision> {
    let tone = methods::tone_trigger(method, key)?;
    let candidate = syllable::apply_tone(buffer.as_chars(), tone)?;
    try_commit(buffer, key.to_ascii_lowercase(), candidate)
}

/// Stage 3: vowel mark (circumflex/horn/breve).
fn stage_vowel_mark(buffer: &mut Buffer, method: InputMethod, key: char) -> Option<Decision> {
    let modification = match method {
        InputMethod::Telex => {
            let lower = key.to_ascii_lowercase();
            if lower == 'w' {
                target_modification_for_w(buffer.as_chars())?
            } else {
                let trigger = methods::TELEX_MARK.get(&lower)?;
                // A Telex doubling key (`aa`, `ee`, `oo`) only fires when
                // the vowel it would double is actually present — typing
                // `a` after `ho` must append a plain `a`, not circumflex
                // the `o`.
                if !vowel_cluster_contains(buffer.as_chars(), trigger.base_vowel) {
                    return None;
                }
                trigger.modification
            }
        }
        InputMethod::Vni => *methods::VNI_MARK.get(&key)?,
    };
    let candidate = syllable::apply_vowel_modification(buffer.as_chars(), modification)?;
    try_commit(buffer, key.to_ascii_lowercase(), candidate)
}

fn vowel_cluster_contains(chars: &[char], base: char) -> bool {
    let (start, end) = syllable::vowel_range(chars);
    if start == end {
        return false;
    }
    chars[start..end]
        .iter()
        .any(|&c| crate::tables::clean_char(c).to_ascii_lowercase() == base)
}

/// `w` targets Breve after `a`, Horn after `o`/`u`; with no eligible vowel
/// this returns `None` and stage 5 takes over.
fn target_modification_for_w(chars: &[char]) -> Option<LetterModification> {
    let (start, end) = syllable::vowel_range(chars);
    if start == end {
        return None;
    }
    let last = crate::tables::clean_char(chars[end - 1]).to_ascii_lowercase();
    methods::TELEX_W_TARGETS.get(&last).copied()
}

/// Stage 4: mark removal / double-key revert.
fn stage_revert(buffer: &mut Buffer, key: char) -> Option<Decision> {
    let identity = key.to_ascii_lowercase();
    if !buffer.has_undo_for(identity) {
        return None;
    }
    let prior_chars: Vec<char> = buffer.as_chars().to_vec();
    if !buffer.try_revert(identity) {
        return None;
    }
    buffer.append(key);
    let new_chars: Vec<char> = buffer.as_chars().to_vec();
    Some(build_decision(&prior_chars, &new_chars))
}

/// Stage 5: bare `w`/`W` with no vowel context becomes `ư`/`Ư` (Telex
/// only). Delegates to the same append-with-fallback logic as stage 6.
fn stage_w_vowel(buffer: &mut Buffer, method: InputMethod, key: char) -> Option<Decision> {
    if method != InputMethod::Telex || key.to_ascii_lowercase() != 'w' {
        return None;
    }
    let replacement = if key.is_uppercase() { 'Ư' } else { 'ư' };
    Some(append_or_restart(buffer, replacement))
}

/// Stage 6: ordinary letter. Appending is never rejected outright — an
/// invalid candidate instead ends the current syllable and starts a new
/// one with just this letter (§4.3 stage 6).
fn stage_normal_letter(buffer: &mut Buffer, letter: char) -> Decision {
    append_or_restart(buffer, letter)
}

fn append_or_restart(buffer: &mut Buffer, ch: char) -> Decision {
    let prior_chars: Vec<char> = buffer.as_chars().to_vec();
    let mut candidate = prior_chars.clone();
    candidate.push(ch);
    let candidate_str: String = candidate.iter().collect();

    if validation::is_structurally_valid_syllable(&candidate_str) {
        buffer.append(ch);
        // A successful append never triggers a revert; any prior undo no
        // longer describes "the buffer before the last transform".
        buffer.clear_undo();
        build_decision(&prior_chars, &candidate)
    } else {
        log::trace!("pipeline: {ch:?} ends syllable {prior_chars:?}, starting new one");
        buffer.clear();
        buffer.append(ch);
        build_decision(&prior_chars, &[ch])
    }
}

/// Run stages 1-6 for a single letter/digit key. Returns the first
/// stage's decision that fires, or a normal-letter append/new-syllable
/// decision if nothing more specific matched.
pub fn run_letter_pipeline(buffer: &mut Buffer, method: InputMethod, token: InputToken) -> Decision {
    let Some(key) = token_key_char(token) else {
        return Decision::none();
    };

    if let Some(decision) = stage_stroke(buffer, method, key) {
        return decision;
    }
    if let Some(decision) = stage_tone(buffer, method, key) {
        return decision;
    }
    if let Some(decision) = stage_vowel_mark(buffer, method, key) {
        return decision;
    }
    if let Some(decision) = stage_revert(buffer, key) {
        return decision;
    }
    if let Some(decision) = stage_w_vowel(buffer, method, key) {
        return decision;
    }
    if let InputToken::LetterKey(letter) = token {
        return stage_normal_letter(buffer, letter);
    }
    // A non-triggering digit (VNI `0`, or any digit typed under Telex):
    // no transformation applies and digits aren't syllable letters, so
    // treat it as a neutral pass-through that doesn't disturb the buffer.
    let _ = key;
    Decision::none()
}

fn token_key_char(token: InputToken) -> Option<char> {
    match token {
        InputToken::LetterKey(ch) => Some(ch),
        InputToken::DigitKey(d) => Some((b'0' + d) as char),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;
    use crate::methods::InputMethod;

    fn press(buffer: &mut Buffer, method: InputMethod, ch: char) -> Decision {
        run_letter_pipeline(buffer, method, InputToken::LetterKey(ch))
    }

    fn press_digit(buffer: &mut Buffer, method: InputMethod, d: u8) -> Decision {
        run_letter_pipeline(buffer, method, InputToken::DigitKey(d))
    }

    #[test]
    fn telex_a_s_becomes_a_acute() {
        let mut buf = Buffer::new();
        let d1 = press(&mut buf, InputMethod::Telex, 'a');
        assert_eq!(d1.action, Action::Send);
        assert_eq!(d1.output, vec!['a']);
        let d2 = press(&mut buf, InputMethod::Telex, 's');
        assert_eq!(d2.action, Action::Send);
        assert_eq!(d2.backspace_count, 1);
        assert_eq!(d2.output, vec!['á']);
        assert_eq!(buf.to_string(), "á");
    }

    #[test]
    fn telex_a_s_s_reverts_to_as() {
        let mut buf = Buffer::new();
        press(&mut buf, InputMethod::Telex, 'a');
        press(&mut buf, InputMethod::Telex, 's');
        let d3 = press(&mut buf, InputMethod::Telex, 's');
        assert_eq!(d3.action, Action::Send);
        assert_eq!(d3.backspace_count, 1);
        assert_eq!(d3.output, vec!['a', 's']);
        assert_eq!(buf.to_string(), "as");
    }

    #[test]
    fn telex_d_d_becomes_dyet() {
        let mut buf = Buffer::new();
        press(&mut buf, InputMethod::Telex, 'd');
        let d2 = press(&mut buf, InputMethod::Telex, 'd');
        assert_eq!(d2.action, Action::Send);
        assert_eq!(d2.output, vec!['đ']);
        assert_eq!(buf.to_string(), "đ");
    }

    #[test]
    fn telex_u_o_w_becomes_horn_pair() {
        let mut buf = Buffer::new();
        press(&mut buf, InputMethod::Telex, 'u');
        press(&mut buf, InputMethod::Telex, 'o');
        let d3 = press(&mut buf, InputMethod::Telex, 'w');
        assert_eq!(d3.action, Action::Send);
        assert_eq!(d3.backspace_count, 2);
        assert_eq!(d3.output, vec!['ư', 'ơ']);
        assert_eq!(buf.to_string(), "ươ");
    }

    #[test]
    fn telex_hoa_f_places_tone_on_a() {
        let mut buf = Buffer::new();
        press(&mut buf, InputMethod::Telex, 'h');
        press(&mut buf, InputMethod::Telex, 'o');
        press(&mut buf, InputMethod::Telex, 'a');
        let d4 = press(&mut buf, InputMethod::Telex, 'f');
        assert_eq!(d4.action, Action::Send);
        // Minimal prefix-preserving edit: "ho" is the common prefix of
        // "hoa"/"hoà", so only the last char needs to change.
        assert_eq!(d4.backspace_count, 1);
        assert_eq!(d4.output, vec!['à']);
        assert_eq!(buf.to_string(), "hoà");
    }

    #[test]
    fn vni_a_6_1_builds_a_circumflex_acute() {
        let mut buf = Buffer::new();
        press_digit(&mut buf, InputMethod::Vni, 0); // unused
        buf.clear();
        press(&mut buf, InputMethod::Vni, 'a');
        let d2 = press_digit(&mut buf, InputMethod::Vni, 6);
        assert_eq!(d2.action, Action::Send);
        assert_eq!(d2.backspace_count, 1);
        assert_eq!(d2.output, vec!['â']);
        let d3 = press_digit(&mut buf, InputMethod::Vni, 1);
        assert_eq!(d3.action, Action::Send);
        assert_eq!(d3.backspace_count, 1);
        assert_eq!(d3.output, vec!['ấ']);
        assert_eq!(buf.to_string(), "ấ");
    }

    #[test]
    fn ke_and_ce_are_passthrough_sequences() {
        let mut buf = Buffer::new();
        let d1 = press(&mut buf, InputMethod::Telex, 'k');
        assert_eq!(d1.action, Action::Send);
        let d2 = press(&mut buf, InputMethod::Telex, 'e');
        assert_eq!(d2.action, Action::Send);
        assert_eq!(buf.to_string(), "ke");

        // §8 scenario 7: `c` before a front vowel fails rule 4 (spelling),
        // but a plain append is never rejected on spelling grounds alone —
        // the syllable must still visibly read "ce", not restart to "e".
        let mut buf2 = Buffer::new();
        press(&mut buf2, InputMethod::Telex, 'c');
        press(&mut buf2, InputMethod::Telex, 'e');
        assert_eq!(buf2.to_string(), "ce");
    }

    #[test]
    fn append_between_two_same_triggers_clears_the_undo() {
        // Telex "o o n o": the second `o` builds circumflex `ô` (undo keyed
        // to 'o'), then `n` appends onto "ôn". That append must clear the
        // undo record — otherwise the third `o` would find the stale
        // trigger, revert past the `n` back to bare "o", and re-append a
        // literal `o`, silently destroying the `n` (visible "oo").
        let mut buf = Buffer::new();
        press(&mut buf, InputMethod::Telex, 'o');
        press(&mut buf, InputMethod::Telex, 'o');
        assert_eq!(buf.to_string(), "ô");
        press(&mut buf, InputMethod::Telex, 'n');
        assert_eq!(buf.to_string(), "ôn");
        let d4 = press(&mut buf, InputMethod::Telex, 'o');
        assert_eq!(d4.action, Action::Send);
        assert_ne!(buf.to_string(), "oo");
        assert_eq!(buf.to_string(), "o");
        assert_eq!(d4.backspace_count, 2);
        assert_eq!(d4.output, vec!['o']);
    }

    #[test]
    fn append_between_stroke_and_repeat_clears_the_undo() {
        // Telex "d d e d": the second `d` strokes to `đ` (undo keyed to
        // 'd'), then `e` appends onto "đe". That append must clear the
        // undo — otherwise the final `d` would revert past the `e` back
        // to bare "d" and re-append a literal `d` (visible "dd").
        let mut buf = Buffer::new();
        press(&mut buf, InputMethod::Telex, 'd');
        press(&mut buf, InputMethod::Telex, 'd');
        assert_eq!(buf.to_string(), "đ");
        press(&mut buf, InputMethod::Telex, 'e');
        assert_eq!(buf.to_string(), "đe");
        press(&mut buf, InputMethod::Telex, 'd');
        assert_ne!(buf.to_string(), "dd");
    }

    #[test]
    fn bare_w_with_no_vowel_becomes_u_horn() {
        let mut buf = Buffer::new();
        let d1 = press(&mut buf, InputMethod::Telex, 'w');
        assert_eq!(d1.output, vec!['ư']);
        assert_eq!(buf.to_string(), "ư");
    }
}
