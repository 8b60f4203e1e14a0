//! Text of a CSV cell, in the same form the analysis scripts already read:
//! Python's `str()` of the decoded JSON value.

use serde_json::{Number, Value};

/// Render a field as a CSV cell.
///
/// `null` becomes an empty cell and strings are written raw. Everything
/// else follows Python's `str()`: `True`/`False`, floats in shortest
/// `repr` form (`1.0`, `1e-05`), containers as Python literals.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => {
            let mut out = String::new();
            write_repr(other, &mut out);
            out
        }
    }
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::String(s) => write_str_repr(s, out),
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_repr(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (idx, (key, item)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_str_repr(key, out);
                out.push_str(": ");
                write_repr(item, out);
            }
            out.push('}');
        }
    }
}

fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => format_float(f),
        _ => n.to_string(),
    }
}

/// Shortest round-trip float text with Python's layout rules: positional
/// for decimal exponents in `-4..16` (always with a fractional part),
/// scientific with a signed two-digit exponent otherwise.
pub fn format_float(f: f64) -> String {
    // `{:e}` already yields the shortest round-trip digits, e.g. "-1.25e-5"
    let sci = format!("{:e}", f);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exp) => exp,
        Err(_) => return sci,
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        if exponent >= 0 {
            let int_len = exponent as usize + 1;
            let mut int_part = digits.clone();
            let frac_part = if digits.len() > int_len {
                int_part.truncate(int_len);
                &digits[int_len..]
            } else {
                int_part.push_str(&"0".repeat(int_len - digits.len()));
                "0"
            };
            format!("{}{}.{}", sign, int_part, frac_part)
        } else {
            let zeros = "0".repeat((-exponent - 1) as usize);
            format!("{}0.{}{}", sign, zeros, digits)
        }
    } else {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        if tail.is_empty() {
            format!("{}{}e{}{:02}", sign, head, exp_sign, exponent.abs())
        } else {
            format!("{}{}.{}e{}{:02}", sign, head, tail, exp_sign, exponent.abs())
        }
    }
}

/// Python string literal: single quotes unless the text holds a single
/// quote and no double quote
fn write_str_repr(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}
