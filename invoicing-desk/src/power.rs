//! Optical power notation.

/// Diopter suffix appended to numeric powers.
pub const POWER_UNIT: &str = "D";

/// Normalize a typed lens power: `10` becomes `10.0D`, `13.5` becomes `13.5D`.
///
/// Only the leading number is read, so `+1.25 sph` becomes `1.25D`. Blank input
/// yields an empty string. Input with no leading number is returned trimmed but
/// otherwise untouched, so free-text annotations survive.
pub fn normalize_power(raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        return String::new();
    }

    match leading_number(value) {
        // Adding zero folds -0 into 0.
        Some(num) => format!("{}{}", display_number(num + 0.0), POWER_UNIT),
        None => value.to_string(),
    }
}

/// Parse the longest numeric prefix of `text`: an optional sign, then either
/// `Infinity` or digits with an optional fraction and exponent.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[end..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Shortest decimal rendering; whole numbers keep one decimal place.
///
/// Magnitudes of `1e21` and above, and fractions below `1e-6`, use exponent
/// form with an explicit sign on the exponent (`1e+21`, `2.5e-7`).
fn display_number(num: f64) -> String {
    if num.is_infinite() {
        return if num > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = num.abs();
    let exponent_form = magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6);
    if exponent_form {
        let text = format!("{:e}", num);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }

    if num.fract() == 0.0 {
        format!("{:.1}", num)
    } else {
        format!("{}", num)
    }
}
