use crate::{
    style::{depth_color, DEPTH_BREAKS},
    ui::controls::ControlPosition,
};

/// One depth bucket of the legend. The last bucket is open-ended.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub from: f64,
    pub to: Option<f64>,
    pub color: &'static str,
}

impl LegendEntry {
    /// Plain-text label, `"{from}–{to} km"` or `"{from}+ km"`.
    pub fn label(&self) -> String {
        match self.to {
            Some(to) => format!("{}–{} km", self.from, to),
            None => format!("{}+ km", self.from),
        }
    }

    fn html_label(&self) -> String {
        match self.to {
            Some(to) => format!("{}&ndash;{} km", self.from, to),
            None => format!("{}+ km", self.from),
        }
    }
}

/// Static key mapping depth ranges to marker colors. Built once at
/// mount, anchored bottom-right, never updated afterwards. Its
/// construction does not depend on the feed fetch.
pub struct Legend {
    position: ControlPosition,
    entries: Vec<LegendEntry>,
}

impl Legend {
    /// The depth legend: consecutive pairs of [`DEPTH_BREAKS`], each
    /// colored by probing the ramp just above the bucket's lower bound.
    pub fn depth_legend() -> Self {
        let entries = DEPTH_BREAKS
            .iter()
            .enumerate()
            .map(|(i, &from)| LegendEntry {
                from,
                to: DEPTH_BREAKS.get(i + 1).copied(),
                color: depth_color(from + 1.0),
            })
            .collect();

        Self {
            position: ControlPosition::BottomRight,
            entries,
        }
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn position(&self) -> ControlPosition {
        self.position
    }

    /// The legend's HTML fragment: one round swatch per bucket,
    /// line-break separated.
    pub fn html(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "<i style=\"background:{}; width: 18px; height: 18px; \
                     border-radius: 50%; display: inline-block; margin-right: 5px;\"></i> {}",
                    entry.color,
                    entry.html_label()
                )
            })
            .collect::<Vec<_>>()
            .join("<br>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_entries() {
        let legend = Legend::depth_legend();
        assert_eq!(legend.entries().len(), 6);
        assert_eq!(legend.position(), ControlPosition::BottomRight);
    }

    #[test]
    fn test_first_entry() {
        let legend = Legend::depth_legend();
        let first = &legend.entries()[0];

        assert_eq!(first.label(), "-10–10 km");
        assert_eq!(first.color, depth_color(-9.0));
        assert_eq!(first.color, "#ccff33");
    }

    #[test]
    fn test_last_entry_is_open_ended() {
        let legend = Legend::depth_legend();
        let last = legend.entries().last().unwrap();

        assert!(last.label().ends_with("90+ km"));
        assert_eq!(last.to, None);
        assert_eq!(last.color, "#ff3333");
    }

    #[test]
    fn test_bucket_colors_follow_the_ramp() {
        let legend = Legend::depth_legend();
        let colors: Vec<&str> = legend.entries().iter().map(|e| e.color).collect();
        assert_eq!(
            colors,
            vec![
                "#ccff33", "#ffff33", "#ffcc33", "#ff9933", "#ff6633", "#ff3333"
            ]
        );
    }

    #[test]
    fn test_html_fragment() {
        let html = Legend::depth_legend().html();

        assert_eq!(html.matches("<br>").count(), 5);
        assert!(html.contains("background:#ccff33"));
        assert!(html.contains("-10&ndash;10 km"));
        assert!(html.contains("90+ km"));
        assert!(html.contains("border-radius: 50%"));
    }
}
