//! Presentation values for the decorative motion on the page: the glow that
//! follows the pointer and the one-shot entrance animation.

use std::time::Duration;

/// Delay between mount and the entrance animation kicking in.
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(100);

/// Transition delays (ms) for the blocks that fade in after the hero.
pub const TAGLINE_FADE_DELAY_MS: u32 = 500;
pub const SECTIONS_FADE_DELAY_MS: u32 = 700;

const GLOW_GRADIENT: &str = "radial-gradient(circle, #10b981 0%, transparent 70%)";

/// Last known pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
}

impl Pointer {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Inline style centering the glow on the pointer.
    pub fn glow_style(&self) -> String {
        format!(
            "background: {GLOW_GRADIENT}; left: {}px; top: {}px;",
            self.x, self.y
        )
    }
}

/// Hero lines slide up from below their clipping box.
pub fn rise_style(loaded: bool) -> &'static str {
    if loaded {
        "transform: translateY(0);"
    } else {
        "transform: translateY(100%);"
    }
}

pub fn fade_style(loaded: bool, delay_ms: u32) -> String {
    let opacity = if loaded { 1 } else { 0 };
    format!("opacity: {opacity}; transition-delay: {delay_ms}ms;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_follows_pointer() {
        let style = Pointer::new(120, 48).glow_style();
        assert!(style.contains("left: 120px"));
        assert!(style.contains("top: 48px"));
        assert!(style.contains("#10b981"));

        assert!(Pointer::default().glow_style().contains("left: 0px"));
    }

    #[test]
    fn test_entrance_styles() {
        assert_eq!(rise_style(false), "transform: translateY(100%);");
        assert_eq!(rise_style(true), "transform: translateY(0);");
        assert_eq!(
            fade_style(false, TAGLINE_FADE_DELAY_MS),
            "opacity: 0; transition-delay: 500ms;"
        );
        assert_eq!(
            fade_style(true, SECTIONS_FADE_DELAY_MS),
            "opacity: 1; transition-delay: 700ms;"
        );
    }
}
