//! Result Builder output type and FFI Facade (§4.6, §4.7, §6.1): the stable
//! C ABI, a process-wide singleton guarded by a mutex (§5, §9). Every
//! entry point is wrapped in `catch_unwind` so a panic inside the engine
//! can never unwind across the FFI boundary (grounded in the sibling
//! `goxviet-ime` FFI layer's discipline, adapted to this crate's
//! return-by-pointer style rather than its out-parameter one).

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, OnceLock};

use crate::engine::Engine;
use crate::methods::InputMethod;
use crate::pipeline::Decision;

/// §6.1 `ImeResult`. `#[repr(C)]`, 40 bytes, matching the host-side struct
/// byte for byte.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ImeResult {
    pub chars: [u32; 32],
    pub action: u8,
    pub backspace: u8,
    pub count: u8,
    pub _pad: u8,
}

impl ImeResult {
    fn none() -> Self {
        ImeResult { chars: [0; 32], action: 0, backspace: 0, count: 0, _pad: 0 }
    }

    fn from_decision(decision: Decision) -> Self {
        let mut chars = [0u32; 32];
        let count = decision.output.len().min(32);
        for (slot, ch) in chars.iter_mut().zip(decision.output.iter().take(32)) {
            *slot = *ch as u32;
        }
        ImeResult { chars, action: decision.action as u8, backspace: decision.backspace_count, count: count as u8, _pad: 0 }
    }
}

static ENGINE: OnceLock<Mutex<Engine>> = OnceLock::new();

fn engine_cell() -> &'static Mutex<Engine> {
    ENGINE.get_or_init(|| Mutex::new(Engine::new()))
}

/// Every entry point runs its body inside this: a poisoned mutex (from a
/// prior panic under the lock) still yields a usable guard rather than
/// poisoning the whole process, and a panic inside `f` itself is caught
/// and turned into the all-zero/no-op outcome instead of unwinding into
/// the host's call frame.
fn with_engine<T>(default: T, f: impl FnOnce(&mut Engine) -> T) -> T {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut guard = engine_cell().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }));
    result.unwrap_or(default)
}

/// Idempotent one-time initialization of the process-wide engine.
#[no_mangle]
pub extern "C" fn ime_init() {
    let _ = engine_cell();
}

/// Main hot path. Host owns the returned pointer; never null.
#[no_mangle]
pub extern "C" fn ime_key_ext(keycode: u16, caps: bool, ctrl: bool, shift: bool) -> *mut ImeResult {
    let result = with_engine(ImeResult::none(), |engine| {
        ImeResult::from_decision(engine.on_key(keycode, caps, ctrl, shift))
    });
    Box::into_raw(Box::new(result))
}

/// Legacy variant; equivalent to [`ime_key_ext`] with `shift = caps`.
#[no_mangle]
pub extern "C" fn ime_key(keycode: u16, caps: bool, ctrl: bool) -> *mut ImeResult {
    ime_key_ext(keycode, caps, ctrl, caps)
}

/// `0 = Telex`, `1 = VNI`. Any other value is a no-op. Resets the buffer.
#[no_mangle]
pub extern "C" fn ime_method(method: u8) {
    with_engine((), |engine| match method {
        0 => engine.set_method(InputMethod::Telex),
        1 => engine.set_method(InputMethod::Vni),
        _ => {}
    });
}

/// Toggle pass-through mode. Flips reset the buffer.
#[no_mangle]
pub extern "C" fn ime_enabled(on: bool) {
    with_engine((), |engine| engine.set_enabled(on));
}

/// Reset the buffer and undo record.
#[no_mangle]
pub extern "C" fn ime_clear() {
    with_engine((), |engine| engine.clear());
}

/// Releases a result returned by `ime_key`/`ime_key_ext`. Passing null is
/// safe; passing a pointer not obtained from those calls is undefined
/// behavior, as with any `Box::from_raw`.
///
/// # Safety
/// `ptr` must either be null or a pointer previously returned by
/// `ime_key`/`ime_key_ext` that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn ime_free(ptr: *mut ImeResult) {
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        if !ptr.is_null() {
            drop(Box::from_raw(ptr));
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_result(ptr: *mut ImeResult) -> ImeResult {
        assert!(!ptr.is_null());
        let result = unsafe { *ptr };
        unsafe { ime_free(ptr) };
        result
    }

    // X11 keycodes for a/s/d, matching keys.rs's table.
    const KEY_A: u16 = 38;
    const KEY_S: u16 = 39;
    const KEY_D: u16 = 40;

    #[test]
    fn end_to_end_telex_tone() {
        ime_init();
        ime_method(0);
        ime_clear();
        ime_clear_shortcuts_for_test();

        let r1 = read_result(ime_key_ext(KEY_A, false, false, false));
        assert_eq!(r1.action, 1);
        assert_eq!(r1.count, 1);
        assert_eq!(r1.chars[0], 'a' as u32);

        let r2 = read_result(ime_key_ext(KEY_S, false, false, false));
        assert_eq!(r2.action, 1);
        assert_eq!(r2.backspace, 1);
        assert_eq!(r2.count, 1);
        assert_eq!(r2.chars[0], 'á' as u32);
    }

    #[test]
    fn double_d_produces_dyet() {
        ime_init();
        ime_method(0);
        ime_clear();

        read_result(ime_key_ext(KEY_D, false, false, false));
        let r2 = read_result(ime_key_ext(KEY_D, false, false, false));
        assert_eq!(r2.action, 1);
        assert_eq!(r2.chars[0], 'đ' as u32);
    }

    #[test]
    fn ctrl_is_passthrough() {
        ime_init();
        ime_clear();
        let r = read_result(ime_key_ext(KEY_A, false, true, false));
        assert_eq!(r.action, 0);
    }

    #[test]
    fn free_null_is_a_no_op() {
        unsafe { ime_free(std::ptr::null_mut()) };
    }

    fn ime_clear_shortcuts_for_test() {
        with_engine((), |engine| engine.clear_shortcuts());
    }
}
