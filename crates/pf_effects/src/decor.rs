//! Decorative effects that are pure functions of pointer and scroll state.

use std::time::Duration;

/// Scroll offset past which the navigation bar gets its shadow
pub const NAVBAR_ELEVATION_THRESHOLD: f32 = 50.0;

/// How long a same-page link click dims the page
pub const PAGE_TRANSITION: Duration = Duration::from_millis(300);
pub const PAGE_TRANSITION_OPACITY: f32 = 0.8;

/// Length of the glitch animation on the logo
pub const GLITCH_DURATION: Duration = Duration::from_millis(300);

/// Pointer follower: the cursor dot tracks the pointer exactly and the trail
/// eases towards it every frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorTrail {
    pointer: (f32, f32),
    trail: (f32, f32),
    hovering: bool,
}

impl CursorTrail {
    pub const EASING: f32 = 0.1;
    pub const CURSOR_HOVER_SCALE: f32 = 1.5;
    pub const TRAIL_HOVER_SCALE: f32 = 1.2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn trail(&self) -> (f32, f32) {
        self.trail
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn frame(&mut self) {
        self.trail.0 += (self.pointer.0 - self.trail.0) * Self::EASING;
        self.trail.1 += (self.pointer.1 - self.trail.1) * Self::EASING;
    }

    pub fn cursor_scale(&self) -> f32 {
        if self.hovering {
            Self::CURSOR_HOVER_SCALE
        } else {
            1.0
        }
    }

    pub fn trail_scale(&self) -> f32 {
        if self.hovering {
            Self::TRAIL_HOVER_SCALE
        } else {
            1.0
        }
    }
}

/// Vertical offset of the floating shape at `index`
pub fn parallax_offset(scroll_y: f32, index: usize) -> f32 {
    scroll_y * (0.5 + 0.1 * index as f32)
}

pub fn navbar_elevated(scroll_y: f32) -> bool {
    scroll_y > NAVBAR_ELEVATION_THRESHOLD
}

/// Opacity of the page `elapsed` after a same-page link was followed
pub fn page_transition_opacity(elapsed: Duration) -> f32 {
    if elapsed < PAGE_TRANSITION {
        PAGE_TRANSITION_OPACITY
    } else {
        1.0
    }
}

/// Horizontal jitter of a glitching element, `None` once the glitch is over
pub fn glitch_offset(elapsed: Duration) -> Option<f32> {
    if elapsed >= GLITCH_DURATION {
        return None;
    }

    // Three jumps per glitch: right, left, back
    let phase = elapsed.as_millis() * 3 / GLITCH_DURATION.as_millis();
    Some(match phase {
        0 => 2.0,
        1 => -2.0,
        _ => 0.0,
    })
}

/// Percent of the page scrolled past, 0 when the page does not scroll
pub fn scroll_progress(scroll_y: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}
