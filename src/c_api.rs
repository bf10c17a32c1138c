// C entry points for a presentation layer written in another language.
// Strings come back as JSON and must be released with numerology_free_string.
use crate::core::engine::NumerologyEngine;
use crate::error::{NumerologyError, Result};
use crate::input::parse_dob;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};

unsafe fn read_str<'a>(ptr: *const c_char, what: &'static str) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(NumerologyError::NullArgument(what));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| NumerologyError::InvalidUtf8(what))
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

fn calculate_json(name: *const c_char, dob: *const c_char) -> Result<String> {
    let name = unsafe { read_str(name, "name")? };
    let dob = parse_dob(unsafe { read_str(dob, "dob")? })?;
    let report = NumerologyEngine::new().calculate(name, dob);
    Ok(serde_json::to_string(&report).unwrap_or_else(|e| error_json(&e.to_string())))
}

/// # Safety
/// `name` and `dob` must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn numerology_calculate(name: *const c_char, dob: *const c_char) -> *mut c_char {
    let result = catch_unwind(AssertUnwindSafe(|| {
        calculate_json(name, dob).unwrap_or_else(|e| error_json(&e.to_string()))
    }));
    let json_string = result.unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in numerology_calculate.");
        error_json("internal error")
    });
    CString::new(json_string).unwrap_or_default().into_raw()
}

/// # Safety
/// `s` must be null or a pointer returned by [`numerology_calculate`].
#[no_mangle]
pub unsafe extern "C" fn numerology_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}
