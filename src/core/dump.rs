use crate::core::{Gc, JsObjectPtr, PropertyPtr, Value};
use std::io::{self, Write};

/// Render one value to the sink. `undefined` / `null` / booleans / numbers
/// print as scripting-language literals, strings are single-quoted with no
/// escaping of embedded quotes, objects print as an identity token.
/// Diagnostics only; the output is not re-parsable.
pub fn dump_value<'gc, W: Write>(w: &mut W, value: &Value<'gc>) -> io::Result<()> {
    match value {
        Value::Undefined => write!(w, "undefined"),
        Value::Null => write!(w, "null"),
        Value::Boolean(b) => write!(w, "{}", if *b { "true" } else { "false" }),
        Value::Number(n) => write!(w, "{}", format_number(*n)),
        Value::String(s) => write!(w, "'{}'", s),
        Value::Object(obj) => write!(w, "<object {:p}>", Gc::as_ptr(*obj)),
    }
}

fn dump_property<'gc, W: Write>(w: &mut W, node: PropertyPtr<'gc>) -> io::Result<()> {
    let (left, right) = {
        let n = node.borrow();
        (n.left(), n.right())
    };
    if let Some(l) = left {
        dump_property(w, l)?;
    }
    write!(w, "\t{}: ", node.borrow().name())?;
    dump_value(w, &node.borrow().value)?;
    writeln!(w, ",")?;
    if let Some(r) = right {
        dump_property(w, r)?;
    }
    Ok(())
}

/// Dump every property of `obj`, one tab-indented `name: value,` line per
/// property in ascending key order, brace-delimited.
pub fn dump_object<'gc, W: Write>(w: &mut W, obj: &JsObjectPtr<'gc>) -> io::Result<()> {
    writeln!(w, "{{")?;
    let root = obj.borrow().properties;
    if let Some(root) = root {
        dump_property(w, root)?;
    }
    writeln!(w, "}}")
}

/// Format a number the way C's `%.9g` does: at most nine significant
/// digits, fixed notation while the decimal exponent lies in [-4, 8],
/// scientific notation otherwise, trailing zeros trimmed.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    // Round to nine significant digits first; the exponent of the rounded
    // value decides between fixed and scientific notation.
    let sci = format!("{:.8e}", n);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if !(-4..9).contains(&exponent) {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        format!("{}e{}{:02}", mantissa, if exponent < 0 { '-' } else { '+' }, exponent.abs())
    } else {
        let precision = (8 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", precision, n);
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    }
}
