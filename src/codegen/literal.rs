//! Go literal formatting for primitive values.
//!
//! Produces the text Go's `%#v` verb would, which is what the Go compiler
//! accepts back as a constant:
//!
//! - `bool`: `true`, `false`
//! - signed integers: decimal, `-87`
//! - unsigned integers: hex, `0x11`
//! - floats: shortest `%g`, `3.2`, `1e-05`, `1.234567e+06`
//! - complex: `(1-1i)`
//! - strings: double-quoted with Go escapes
//!
//! Non-finite floats and negative zero have no literal form; see
//! [`special_float`].

use std::fmt::Write as _;

/// Exponent threshold Go uses for shortest `%g` formatting.
const G_EXP_PRECISION: i32 = 6;

/// Format a finite float with Go's shortest `%g` rules.
///
/// `bits` selects the precision the shortest representation must round-trip
/// at: 32 for `float32` values, 64 otherwise.
pub fn format_float(f: f64, bits: u32) -> String {
    let sci = if bits == 32 {
        format!("{:e}", f as f32)
    } else {
        format!("{f:e}")
    };
    // Rust's `{:e}` is shortest round-trip: `-1.2345e-7`, `1e0`, `0e0`.
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::from(sign);
    if exp < -4 || exp >= G_EXP_PRECISION {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let _ = write!(out, "e{exp_sign}{:02}", exp.unsigned_abs());
    } else if exp < 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-exp - 1) as usize));
        out.push_str(&digits);
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            out.extend(std::iter::repeat_n('0', int_len - digits.len()));
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    out
}

/// Append `.0` when a float literal would otherwise read as an integer.
pub fn force_fraction(mut lit: String) -> String {
    if !lit.contains(['.', 'e']) {
        lit.push_str(".0");
    }
    lit
}

/// Format a finite complex number as a Go complex constant, `(re±imi)`.
pub fn format_complex(re: f64, im: f64, bits: u32) -> String {
    let re = format_float(re, bits);
    let im = format_float(im, bits);
    let sign = if im.starts_with('-') { "" } else { "+" };
    format!("({re}{sign}{im}i)")
}

/// The `math` package call producing a non-finite float or negative zero,
/// if `f` is one. Go constant arithmetic folds `-0.0` to `+0`.
///
/// The result is unqualified (`NaN()`); the caller prefixes the identifier
/// the `math` package is imported as.
pub fn special_float(f: f64) -> Option<&'static str> {
    if f.is_nan() {
        Some("NaN()")
    } else if f == f64::INFINITY {
        Some("Inf(1)")
    } else if f == f64::NEG_INFINITY {
        Some("Inf(-1)")
    } else if f == 0.0 && f.is_sign_negative() {
        Some("Copysign(0, -1)")
    } else {
        None
    }
}

/// Code points outside Unicode's control category that Go still considers
/// unprintable: format characters, separators other than ASCII space,
/// private use and noncharacters.
const NON_GRAPHIC: &[(u32, u32)] = &[
    (0x00A0, 0x00A0),
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x1680, 0x1680),
    (0x180E, 0x180E),
    (0x2000, 0x200F),
    (0x2028, 0x202F),
    (0x205F, 0x2064),
    (0x2066, 0x206F),
    (0x3000, 0x3000),
    (0xE000, 0xF8FF),
    (0xFDD0, 0xFDEF),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
    (0xF0000, 0x10FFFF),
];

/// Whether `c` may appear unescaped inside a Go string literal.
fn is_graphic(c: char) -> bool {
    let code = c as u32;
    if c.is_control() || code & 0xFFFE == 0xFFFE {
        return false;
    }
    NON_GRAPHIC
        .binary_search_by(|&(lo, hi)| {
            if hi < code {
                std::cmp::Ordering::Less
            } else if lo > code {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_err()
}

/// Double-quote a string with Go escapes (`strconv.Quote`).
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if !is_graphic(c) => {
                let code = c as u32;
                let _ = if code < 0x80 {
                    write!(out, "\\x{code:02x}")
                } else if code <= 0xFFFF {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Format a signed integer.
pub fn format_int(i: i64) -> String {
    i.to_string()
}

/// Format an unsigned integer the way `%#v` does, in hex.
pub fn format_uint(u: u64) -> String {
    format!("{u:#x}")
}
