use std::fmt;

use crate::format::format_number;

/// Measurements of a polygon and the prism built on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Base polygon area.
    pub area: f64,
    /// Base polygon perimeter.
    pub perimeter: f64,
    /// Prism volume.
    pub volume: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Computed values:")?;
        writeln!(f, "  Area (A):      {}", format_number(self.area))?;
        writeln!(f, "  Perimeter (P): {}", format_number(self.perimeter))?;
        writeln!(f, "  Volume (V):    {}", format_number(self.volume))?;
        writeln!(f)?;
        writeln!(f, "Notes:")?;
        write!(f, " - Valid sides/height enforced.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_lines() {
        let report = Report {
            area: 16.0,
            perimeter: 12.0,
            volume: 1234.5,
        };
        let expected = "Computed values:\n\
                        \x20 Area (A):      16\n\
                        \x20 Perimeter (P): 12\n\
                        \x20 Volume (V):    1,234.5\n\
                        \n\
                        Notes:\n\
                        \x20- Valid sides/height enforced.";
        assert_eq!(report.to_string(), expected);
    }
}
