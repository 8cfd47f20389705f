/// Format a depth, elevation or lab value for display.
///
/// Whole numbers keep one decimal place (`2.0`, not `2`) so a spreadsheet
/// cell reads the same in a hover label as it does in the workbook. Other
/// values use the shortest representation that round-trips.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
