//! Counter payload normalization
//!
//! The iRaiser counter does not return JSON: the body is a JavaScript
//! variable assignment (`var iraiser_counter = {RE2025_nb:150,...}`) with
//! unquoted object keys. [`normalize`] rewrites that into JSON text.
//!
//! Only two shapes are handled: the assignment-wrapped object and a bare
//! object with unquoted keys. Anything else (strings containing colons,
//! already-quoted keys) comes out mangled and is rejected by the JSON
//! parser downstream, which leaves the previous snapshot in place.

use regex::Regex;

/// Rewrite the assignment-wrapped pseudo-JSON body into JSON text.
pub fn normalize(raw: &str) -> String {
    let prefix = Regex::new(r"^\s*var\s+\w+\s*=\s*").unwrap();
    let stripped = prefix.replace(raw, "");

    let bare_keys = Regex::new(r"(\w+)\s*:").unwrap();
    bare_keys.replace_all(&stripped, "\"$1\":").into_owned()
}
