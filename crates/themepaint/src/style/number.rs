//! Loose numeric coercion for raw theme values.
//!
//! Theme values arrive as strings written by an editor that treats them as
//! dynamically typed numbers. These helpers reproduce that coercion so that
//! numeric formatters print what the editor would have printed, including
//! `NaN` for garbage input.

/// Coerces a raw value to a number.
///
/// Surrounding whitespace is ignored and blank input is zero. Unsigned
/// `0x`, `0o` and `0b` literals are read in their radix. Anything else
/// that is not a decimal literal (or a spelled-out `Infinity`) is `NaN`.
pub(crate) fn coerce(raw: &str) -> f64 {
    let s = raw.trim();
    match s {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = coerce_radix(s) {
        return n;
    }

    // `f64::from_str` also accepts "inf" and "nan" spellings.
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Reads a prefixed integer literal, or `None` if `s` has no radix prefix.
fn coerce_radix(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Prints a number the way the theme editor displays it.
///
/// Integral values have no fractional part and negative zero prints as `0`.
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent form
/// (`1e+21`, `1e-7`).
pub(crate) fn display(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    if n.is_infinite() {
        return format!("{sign}Infinity");
    }

    // Shortest round-trip digits, as `d.ddde<exp>`.
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exp) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let point = exp + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exp_sign = if point >= 1 { "+" } else { "-" };
        let (lead, rest) = digits.split_at(1);
        let frac = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        format!("{lead}{frac}e{exp_sign}{}", (point - 1).abs())
    };
    format!("{sign}{body}")
}
