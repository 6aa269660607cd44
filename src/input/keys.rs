/// Keys that scroll the spin like a wheel.
///
/// Deltas follow the wheel convention: positive scrolls down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollKey {
    /// Arrow up: one step up.
    Up,
    /// Arrow down: one step down.
    Down,
    /// Page up: one page up.
    PageUp,
    /// Page down: one page down.
    PageDown,
    /// Space: one page down, or up when `shift` is held.
    Space {
        /// Shift modifier held.
        shift: bool,
    },
}

/// Pixels a page scroll leaves visible from the previous page.
const PAGE_OVERLAP: f32 = 40.0;

impl ScrollKey {
    /// Wheel-equivalent delta in pixels for a viewport `viewport_height`
    /// pixels tall.
    #[must_use]
    pub fn delta(self, viewport_height: u32, step: f32) -> f32 {
        let page = (viewport_height as f32 - PAGE_OVERLAP).max(step);
        match self {
            Self::Up => -step,
            Self::Down => step,
            Self::PageUp | Self::Space { shift: true } => -page,
            Self::PageDown | Self::Space { shift: false } => page,
        }
    }
}

#[cfg(feature = "viewer")]
impl ScrollKey {
    /// Map a physical key; `None` for keys that do not scroll.
    #[must_use]
    pub fn from_key_code(
        code: winit::keyboard::KeyCode,
        shift: bool,
    ) -> Option<Self> {
        use winit::keyboard::KeyCode;
        match code {
            KeyCode::ArrowUp => Some(Self::Up),
            KeyCode::ArrowDown => Some(Self::Down),
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::PageDown => Some(Self::PageDown),
            KeyCode::Space => Some(Self::Space { shift }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_scroll_one_step() {
        assert_eq!(ScrollKey::Down.delta(600, 120.0), 120.0);
        assert_eq!(ScrollKey::Up.delta(600, 120.0), -120.0);
    }

    #[test]
    fn pages_keep_an_overlap() {
        assert_eq!(ScrollKey::PageDown.delta(600, 120.0), 560.0);
        assert_eq!(ScrollKey::PageUp.delta(600, 120.0), -560.0);
        assert_eq!(ScrollKey::Space { shift: false }.delta(600, 120.0), 560.0);
        assert_eq!(ScrollKey::Space { shift: true }.delta(600, 120.0), -560.0);
    }

    #[test]
    fn tiny_viewports_page_at_least_one_step() {
        assert_eq!(ScrollKey::PageDown.delta(10, 120.0), 120.0);
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn maps_winit_keys() {
        use winit::keyboard::KeyCode;
        assert_eq!(
            ScrollKey::from_key_code(KeyCode::Space, true),
            Some(ScrollKey::Space { shift: true })
        );
        assert_eq!(ScrollKey::from_key_code(KeyCode::KeyA, false), None);
    }
}
