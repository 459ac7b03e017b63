//! C FFI bindings for mob-core
//!
//! This crate provides a C-compatible API so a native UI can load a drop
//! table once and re-run the filter on every input change.

use mob_core::{Catalog, FilterQuery, LevelBounds};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// Opaque handle to a loaded catalog
pub struct FfiCatalog {
    inner: Catalog,
}

/// Borrow a C string as UTF-8, or None if null or invalid
unsafe fn as_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .map(|s| s.into_raw())
        .unwrap_or(ptr::null_mut())
}

/// Parse and merge drop table text into a catalog
///
/// # Safety
/// - `text` must be a valid C string
/// - Returns null on error (bad UTF-8 or column count mismatch)
/// - Free the result with `mv_catalog_free`
#[no_mangle]
pub unsafe extern "C" fn mv_catalog_from_text(text: *const c_char) -> *mut FfiCatalog {
    let Some(text) = as_str(text) else {
        return ptr::null_mut();
    };

    match Catalog::from_text(text) {
        Ok(catalog) => Box::into_raw(Box::new(FfiCatalog { inner: catalog })),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a catalog
///
/// # Safety
/// - `catalog` must be a valid pointer returned by `mv_catalog_from_text` or null
#[no_mangle]
pub unsafe extern "C" fn mv_catalog_free(catalog: *mut FfiCatalog) {
    if !catalog.is_null() {
        drop(Box::from_raw(catalog));
    }
}

/// Get the number of creatures in a catalog
///
/// # Safety
/// - `catalog` must be a valid pointer returned by `mv_catalog_from_text`
#[no_mangle]
pub unsafe extern "C" fn mv_catalog_len(catalog: *const FfiCatalog) -> usize {
    if catalog.is_null() {
        return 0;
    }
    (*catalog).inner.len()
}

/// Filter a catalog and return the matching cards as a JSON array
///
/// `min_level` / `max_level` values below 1 mean "not set".
///
/// # Safety
/// - `catalog` must be a valid pointer returned by `mv_catalog_from_text`
/// - `query` must be a valid C string or null (null means no search text)
/// - Returns null on error
/// - Caller must free the returned string with `mv_free_string`
#[no_mangle]
pub unsafe extern "C" fn mv_catalog_filter_json(
    catalog: *const FfiCatalog,
    min_level: i64,
    max_level: i64,
    query: *const c_char,
) -> *mut c_char {
    if catalog.is_null() {
        return ptr::null_mut();
    }

    let bounds = LevelBounds::new(Some(min_level), Some(max_level));
    let filter = FilterQuery::new(bounds, as_str(query).unwrap_or(""));
    let cards = (*catalog).inner.cards(&filter);

    match serde_json::to_string(&cards) {
        Ok(json) => into_c_string(json),
        Err(_) => ptr::null_mut(),
    }
}

/// Compute the health-per-experience label ("25.00", "None" or "N/A")
///
/// # Safety
/// - `health` and `base_experience` must be valid C strings or null
/// - Caller must free the returned string with `mv_free_string`
#[no_mangle]
pub unsafe extern "C" fn mv_hp_per_exp(
    health: *const c_char,
    base_experience: *const c_char,
) -> *mut c_char {
    let stat = mob_core::hp_per_exp(
        as_str(health).unwrap_or(""),
        as_str(base_experience).unwrap_or(""),
    );
    into_c_string(stat.to_string())
}

/// Free a string returned by other FFI functions
///
/// # Safety
/// - `s` must be a valid pointer returned by a mv_* function or null
#[no_mangle]
pub unsafe extern "C" fn mv_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
