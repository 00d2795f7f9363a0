use serde::{Deserialize, Serialize};

/// Rectangular line/pixel range of a radar image, bounds inclusive
///
/// Callers are expected to keep `line_lo <= line_hi` and `pix_lo <= pix_hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Window {
    pub line_lo: i64,
    pub line_hi: i64,
    pub pix_lo: i64,
    pub pix_hi: i64,
}

impl Window {
    pub fn new(line_lo: i64, line_hi: i64, pix_lo: i64, pix_hi: i64) -> Self {
        Self { line_lo, line_hi, pix_lo, pix_hi }
    }

    /// Number of lines covered
    pub fn lines(&self) -> i64 {
        self.line_hi - self.line_lo + 1
    }

    /// Number of pixels covered
    pub fn pixels(&self) -> i64 {
        self.pix_hi - self.pix_lo + 1
    }

    pub fn contains(&self, line: f64, pixel: f64) -> bool {
        line >= self.line_lo as f64
            && line <= self.line_hi as f64
            && pixel >= self.pix_lo as f64
            && pixel <= self.pix_hi as f64
    }

    /// True when this window lies entirely within `other`
    pub fn is_inside(&self, other: &Window) -> bool {
        self.line_lo >= other.line_lo
            && self.line_hi <= other.line_hi
            && self.pix_lo >= other.pix_lo
            && self.pix_hi <= other.pix_hi
    }

    /// Fractional (line, pixel) at the window centre
    pub fn centre(&self) -> (f64, f64) {
        (
            0.5 * (self.line_lo + self.line_hi) as f64,
            0.5 * (self.pix_lo + self.pix_hi) as f64,
        )
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lines {}:{}, pixels {}:{}",
            self.line_lo, self.line_hi, self.pix_lo, self.pix_hi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_size() {
        let window = Window::new(1, 1000, 1, 5000);
        assert_eq!(window.lines(), 1000);
        assert_eq!(window.pixels(), 5000);
        assert_eq!(window.centre(), (500.5, 2500.5));
    }

    #[test]
    fn test_window_comparison() {
        let full = Window::new(1, 1000, 1, 5000);
        let crop = Window::new(100, 200, 300, 400);

        assert!(crop.is_inside(&full));
        assert!(!full.is_inside(&crop));
        assert_eq!(crop, Window::new(100, 200, 300, 400));
        assert_ne!(crop, full);
    }

    #[test]
    fn test_window_contains() {
        let window = Window::new(10, 20, 30, 40);
        assert!(window.contains(10.0, 40.0));
        assert!(window.contains(15.5, 35.2));
        assert!(!window.contains(9.9, 35.0));
        assert!(!window.contains(15.0, 40.1));
        assert_eq!(format!("{}", window), "lines 10:20, pixels 30:40");
    }
}
