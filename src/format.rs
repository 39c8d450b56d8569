/// Maximum number of fractional digits shown.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Formats a number for display, in the style of the `#,##0.######` pattern.
///
/// Digits come from the shortest decimal representation that round-trips,
/// so large magnitudes show zeros past the significant digits rather than
/// the full binary expansion. The integer part is grouped in thousands
/// with `,`. At most [`MAX_FRACTION_DIGITS`] fractional digits are kept,
/// rounded half-to-even, and trailing zeros are dropped along with a bare
/// decimal point. Negative values keep their sign even when they round to
/// zero, so `-0.0` prints as `-0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let symbol = if value < 0.0 { "-∞" } else { "∞" };
        return symbol.to_owned();
    }

    // `Display` for f64 never switches to exponent notation.
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));
    let (int_part, frac_part) = round_half_even(int_part, frac_part);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Rounds the decimal digits `int_part.frac_part` to [`MAX_FRACTION_DIGITS`]
/// fractional digits, ties to even.
fn round_half_even(int_part: &str, frac_part: &str) -> (String, String) {
    if frac_part.len() <= MAX_FRACTION_DIGITS {
        return (int_part.to_owned(), frac_part.to_owned());
    }

    let kept = &frac_part[..MAX_FRACTION_DIGITS];
    let next = frac_part.as_bytes()[MAX_FRACTION_DIGITS];
    let rest_nonzero = frac_part[MAX_FRACTION_DIGITS + 1..]
        .bytes()
        .any(|b| b != b'0');

    let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    let last_odd = digits.last().is_some_and(|d| (d - b'0') % 2 == 1);
    let round_up = next > b'5' || (next == b'5' && (rest_nonzero || last_odd));

    let mut int_len = int_part.len();
    if round_up {
        let mut carried = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let frac = digits.split_off(int_len);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}

/// Inserts `,` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
