//! Hover tooltip

/// The single hover tooltip
///
/// There is exactly one tooltip; showing new text replaces whatever was
/// there. The owner of hover semantics (last-entered-wins, stale exits) is
/// the interactable registry; the tooltip just displays what it is told.
#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    text: Option<String>,
}

impl Tooltip {
    /// Create a hidden tooltip
    pub fn new() -> Self {
        Self::default()
    }

    /// Show text, replacing any current text
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Hide the tooltip
    pub fn hide(&mut self) {
        self.text = None;
    }

    /// Currently displayed text
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether the tooltip is showing
    pub fn is_visible(&self) -> bool {
        self.text.is_some()
    }

    /// Mirror a hover state: `Some` shows, `None` hides
    pub fn sync(&mut self, hover_text: Option<&str>) {
        match hover_text {
            Some(text) => self.show(text),
            None => self.hide(),
        }
    }
}
