// Numeric formatting for result tables
//
// Values are written in C-style scientific notation with a signed, at least
// two-digit exponent (`1.500000000000000000e+00`), the layout gnuplot and
// most table readers expect.

/// Format `value` with `precision` digits after the decimal point.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let rust_style = format!("{:.*e}", precision, value);
    let Some((mantissa, exponent)) = rust_style.split_once('e') else {
        return rust_style;
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exp) => exp,
        Err(_) => return rust_style,
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}
