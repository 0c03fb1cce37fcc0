//! Text rendering for components and metrics.

use crate::core::{Component, Labeled};
use crate::metrics::Metrics;

/// Renders `components` as a table with 1-based IDs.
pub fn render_components(components: &[Component]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n--- Components (total: {}) ---\n", components.len()));
    if components.is_empty() {
        out.push_str("[empty]\n");
        return out;
    }
    out.push_str(&format!("{:<3} | {:<28} | {:<15} | PRIORITY\n", "ID", "NAME", "TYPE"));
    out.push_str("----+------------------------------+-----------------+----------\n");
    for (i, c) in components.iter().enumerate() {
        out.push_str(&format!(
            "{:<3} | {:<28} | {:<15} | {:<8}\n",
            i + 1,
            c.name(),
            c.kind(),
            c.priority()
        ));
    }
    out
}

/// Renders one line of metrics, elapsed time in seconds.
pub fn render_metrics(label: &str, metrics: &Metrics) -> String {
    format!(
        "{label}: comparisons = {}, time = {:.6} s",
        metrics.comparisons,
        metrics.elapsed.as_secs_f64()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_render_empty() {
        let out = render_components(&[]);
        assert!(out.contains("total: 0"));
        assert!(out.contains("[empty]"));
    }

    #[test]
    fn test_render_rows() {
        let rows = vec![
            Component::new("Alpha", "hull", 9).unwrap(),
            Component::new("Mid", "core", 5).unwrap(),
        ];
        let out = render_components(&rows);
        assert!(out.contains("1   | Alpha"));
        assert!(out.contains("2   | Mid"));
        assert!(out.contains("| 9"));
    }

    #[test]
    fn test_render_table_layout() {
        let rows = vec![Component::new("Alpha", "hull", 9).unwrap()];
        let out = render_components(&rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "--- Components (total: 1) ---");
        let header = format!("ID  | NAME{} | TYPE{} | PRIORITY", " ".repeat(24), " ".repeat(11));
        let row = format!("1   | Alpha{} | hull{} | 9       ", " ".repeat(23), " ".repeat(11));
        assert_eq!(lines[2], header);
        assert_eq!(lines[4], row);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_render_metrics() {
        let metrics = Metrics {
            comparisons: 3,
            elapsed: Duration::from_micros(1500),
        };
        assert_eq!(
            render_metrics("Bubble Sort by NAME", &metrics),
            "Bubble Sort by NAME: comparisons = 3, time = 0.001500 s"
        );
    }
}
