//=========================================================================
// Input Normalizer
//=========================================================================
//
// Maps raw pointer coordinates (device pixels, origin top-left) into
// aspect-corrected normalized device coordinates (origin centre, y up).
//
//   x = ((px / w) * 2 - 1) * (w / h)
//   y = -((py / h) * 2 - 1)
//
// The y axis spans [-1, 1]; x is scaled by the aspect ratio so one unit
// covers the same physical distance on both axes.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::{PointerId, TouchEvent, TouchPhase};

//=== Viewport ============================================================

/// Validated viewport dimensions in device pixels.
///
/// Construction rejects non-positive sizes, so every `Viewport` is safe to
/// divide by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Smallest valid viewport, used when the platform reports no size.
    pub const UNIT: Viewport = Viewport { width: 1, height: 1 };

    /// Returns `None` if either dimension is zero or negative.
    ///
    /// Callers discard the triggering event in that case (minimised
    /// windows report 0x0 on several platforms).
    pub fn new(width: i64, height: i64) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        Some(Self {
            width: u32::try_from(width).ok()?,
            height: u32::try_from(height).ok()?,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    //--- Normalization ----------------------------------------------------

    /// Converts a pixel position into normalized device coordinates.
    ///
    /// Pure; safe to call from any thread.
    pub fn normalize(&self, px: f32, py: f32) -> (f32, f32) {
        let w = self.width as f32;
        let h = self.height as f32;

        let x = ((px / w) * 2.0 - 1.0) * (w / h);
        let y = -((py / h) * 2.0 - 1.0);
        (x, y)
    }

    /// Normalizes a raw pointer sample into a [`TouchEvent`].
    pub fn touch(&self, pointer: PointerId, px: f32, py: f32, phase: TouchPhase) -> TouchEvent {
        let (x, y) = self.normalize(px, py);
        TouchEvent::new(pointer, x, y, phase)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-6 && (a.1 - b.1).abs() < 1e-6
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(Viewport::new(0, 100).is_none());
        assert!(Viewport::new(100, 0).is_none());
        assert!(Viewport::new(-5, 100).is_none());
        assert!(Viewport::new(100, -1).is_none());
        assert!(Viewport::new(1, 1).is_some());
    }

    #[test]
    fn top_centre_of_wide_viewport() {
        let vp = Viewport::new(200, 100).unwrap();
        assert!(approx(vp.normalize(100.0, 0.0), (0.0, 1.0)));
    }

    #[test]
    fn bottom_left_of_wide_viewport_is_aspect_scaled() {
        let vp = Viewport::new(200, 100).unwrap();
        assert!(approx(vp.normalize(0.0, 100.0), (-2.0, -1.0)));
    }

    #[test]
    fn centre_maps_to_origin() {
        let vp = Viewport::new(1080, 1920).unwrap();
        assert!(approx(vp.normalize(540.0, 960.0), (0.0, 0.0)));
    }

    #[test]
    fn tall_viewport_compresses_x() {
        // 100x200: aspect 0.5, so the right edge lands at x = 0.5
        let vp = Viewport::new(100, 200).unwrap();
        assert!(approx(vp.normalize(100.0, 200.0), (0.5, -1.0)));
    }

    #[test]
    fn equal_pixel_distance_gives_equal_normalized_distance() {
        let vp = Viewport::new(300, 150).unwrap();
        let (x0, y0) = vp.normalize(100.0, 50.0);
        let (x1, _) = vp.normalize(130.0, 50.0);
        let (_, y1) = vp.normalize(100.0, 80.0);
        assert!(((x1 - x0) - (y0 - y1)).abs() < 1e-6);
    }

    #[test]
    fn touch_carries_pointer_and_phase() {
        let vp = Viewport::new(200, 100).unwrap();
        let event = vp.touch(PointerId(7), 100.0, 0.0, TouchPhase::Move);
        assert_eq!(event.pointer, PointerId(7));
        assert_eq!(event.phase, TouchPhase::Move);
        assert!(approx((event.x, event.y), (0.0, 1.0)));
    }
}
