//! Result rendering
//!
//! One line per diagonal position. Real eigenvalues print as bare
//! general-precision decimals; a conjugate pair prints as two lines,
//! `re +imi` then `re -imi`, with the sign folded into the imaginary
//! part.

use std::io::Write;

use hessqr::Complex64;

/// Format a float in the spirit of `printf("%g")`: six significant
/// digits, trailing zeros trimmed, and `{mantissa}e{exp}` notation once
/// the decimal exponent leaves [-4, 6).
pub fn format_g(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return x.to_string();
    }
    let exponent = x.abs().log10().floor() as i32;
    if (-4..6).contains(&exponent) {
        let decimals = (5 - exponent).max(0) as usize;
        trim_decimal(format!("{x:.decimals$}"))
    } else {
        let formatted = format!("{x:.5e}");
        match formatted.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{exp}", trim_decimal(mantissa.to_string())),
            None => formatted,
        }
    }
}

fn trim_decimal(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

/// Write the eigenvalue sequence, one line per diagonal position.
pub fn write_spectrum<W: Write>(writer: &mut W, values: &[Complex64]) -> std::io::Result<()> {
    for value in values {
        if value.im == 0.0 {
            writeln!(writer, "{}", format_g(value.re))?;
        } else if value.im > 0.0 {
            writeln!(writer, "{} +{}i", format_g(value.re), format_g(value.im))?;
        } else {
            writeln!(writer, "{} {}i", format_g(value.re), format_g(value.im))?;
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_print_bare() {
        assert_eq!(format_g(5.0), "5");
        assert_eq!(format_g(-2.0), "-2");
        assert_eq!(format_g(0.0), "0");
    }

    #[test]
    fn fractions_trim_trailing_zeros() {
        assert_eq!(format_g(42.5), "42.5");
        assert_eq!(format_g(0.25), "0.25");
        assert_eq!(format_g(-0.5), "-0.5");
    }

    #[test]
    fn six_significant_digits() {
        assert_eq!(format_g(std::f64::consts::PI), "3.14159");
        assert_eq!(format_g(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn large_and_tiny_magnitudes_go_scientific() {
        assert_eq!(format_g(1234567.0), "1.23457e6");
        assert_eq!(format_g(0.00001), "1e-5");
        assert_eq!(format_g(123456.0), "123456");
        assert_eq!(format_g(0.000123456), "0.000123456");
    }

    #[test]
    fn spectrum_lines() {
        let values = [
            Complex64::new(7.0, 0.0),
            Complex64::new(2.0, 1.0),
            Complex64::new(2.0, -1.0),
        ];
        let mut buffer = Vec::new();
        write_spectrum(&mut buffer, &values).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "7\n2 +1i\n2 -1i\n");
    }

    #[test]
    fn empty_spectrum_writes_nothing() {
        let mut buffer = Vec::new();
        write_spectrum(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }
}
