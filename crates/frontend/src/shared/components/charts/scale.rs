//! Pure geometry helpers shared by the SVG chart components.

/// Linear map of `value` from the domain to the pixel range.
pub fn linear(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if (d1 - d0).abs() < f64::EPSILON {
        return r0;
    }
    r0 + (value - d0) / (d1 - d0) * (r1 - r0)
}

/// Rounds a positive maximum up to a "nice" axis bound (1, 2 or 5 times a
/// power of ten). Non-positive input falls back to 1.
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// `count + 1` evenly spaced tick values covering [min, max].
pub fn ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    (0..=count)
        .map(|i| min + (max - min) * i as f64 / count as f64)
        .collect()
}

/// Compact axis label: 1.2k, 3.4M, plain below a thousand.
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Stride that thins `len` category labels down to roughly `target`.
pub fn label_stride(len: usize, target: usize) -> usize {
    if target == 0 || len <= target {
        1
    } else {
        (len + target - 1) / target
    }
}

/// Shortens long category labels for the x axis.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_maps_endpoints() {
        assert_eq!(linear(0.0, (0.0, 10.0), (0.0, 100.0)), 0.0);
        assert_eq!(linear(10.0, (0.0, 10.0), (0.0, 100.0)), 100.0);
        assert_eq!(linear(5.0, (0.0, 10.0), (100.0, 0.0)), 50.0);
        // Degenerate domain falls back to the range start
        assert_eq!(linear(3.0, (2.0, 2.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(0.7), 1.0);
        assert_eq!(nice_max(17.0), 20.0);
        assert_eq!(nice_max(42.0), 50.0);
        assert_eq!(nice_max(640.0), 1000.0);
        assert_eq!(nice_max(1000.0), 1000.0);
    }

    #[test]
    fn test_ticks_cover_range() {
        let t = ticks(0.0, 100.0, 4);
        assert_eq!(t, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(12.5), "12.5");
        assert_eq!(format_tick(1500.0), "1.5k");
        assert_eq!(format_tick(2_400_000.0), "2.4M");
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(5, 12), 1);
        assert_eq!(label_stride(24, 12), 2);
        assert_eq!(label_stride(25, 12), 3);
        assert_eq!(label_stride(10, 0), 1);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 12), "short");
        assert_eq!(truncate_label("a rather long client name", 12), "a rather lo…");
    }
}
