/// Format a number for display.
///
/// Integral values print without a fractional part; everything else uses the
/// shortest representation that round-trips.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "#NAN!".to_string()
    } else if n.is_infinite() {
        "#INF!".to_string()
    } else if n == 0.0 {
        // Avoid "-0".
        "0".to_string()
    } else {
        n.to_string()
    }
}
