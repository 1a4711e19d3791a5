//! Tooltip descriptor
//!
//! A plain value describing what a tooltip shows and how it animates. Read
//! once by the surface at attach time; holding onto it afterwards has no
//! effect on an already-shown tooltip.

use supertips_core::{Color, FontId, NodeId};

/// How a tooltip surface animates in and out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationKind {
    /// Appear and disappear instantly
    #[default]
    None,
    /// Grow out of the anchor's center (and shrink back into it)
    FromAnchor,
    /// Drop in from the top of the container
    FromTop,
}

/// Tooltip configuration
///
/// No validation happens here: whatever is set is passed through to the
/// surface as-is.
#[derive(Clone, Debug, Default)]
pub struct ToolTip {
    /// Text shown in the content area
    pub text: String,
    /// Host-built content subtree; replaces the text node when present
    pub content: Option<NodeId>,
    /// Fill color for frames and pointers; `None` uses the theme default
    pub color: Option<Color>,
    /// Text color; `None` uses the theme default
    pub text_color: Option<Color>,
    /// Enter/exit animation
    pub animation: AnimationKind,
    /// Whether the drop shadow under the surface is shown
    pub show_shadow: bool,
    /// Typeface for the text node
    pub font: Option<FontId>,
}

impl ToolTip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn content(mut self, content: NodeId) -> Self {
        self.content = Some(content);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn animation(mut self, animation: AnimationKind) -> Self {
        self.animation = animation;
        self
    }

    pub fn show_shadow(mut self, show: bool) -> Self {
        self.show_shadow = show;
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_unconfigured_tooltip() {
        let tip = ToolTip::new();
        assert_eq!(tip.text, "");
        assert!(tip.content.is_none());
        assert!(tip.color.is_none());
        assert!(tip.text_color.is_none());
        assert_eq!(tip.animation, AnimationKind::None);
        assert!(!tip.show_shadow);
        assert!(tip.font.is_none());
    }

    #[test]
    fn builder_chains() {
        let tip = ToolTip::new()
            .text("hello")
            .animation(AnimationKind::FromTop)
            .show_shadow(true);
        assert_eq!(tip.text, "hello");
        assert_eq!(tip.animation, AnimationKind::FromTop);
        assert!(tip.show_shadow);
    }
}
