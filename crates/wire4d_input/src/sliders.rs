//! Side-panel sliders
//!
//! Four range inputs feed the frame driver: the camera's w position, the x/w
//! rotation angle used by the perspective projector, camera pitch, and the
//! field of view in degrees. Values can be set by dragging on a track
//! (see [`PanelLayout`]) or nudged one step at a time from the keyboard.

use serde::{Deserialize, Serialize};

/// Identifies one slider in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderId {
    /// Camera w position
    W,
    /// x/w rotation angle in radians
    Theta,
    /// Camera pitch in radians
    Pitch,
    /// Field of view in degrees
    Fov,
}

impl SliderId {
    /// Top-to-bottom panel order
    pub const ALL: [SliderId; 4] = [SliderId::W, SliderId::Theta, SliderId::Pitch, SliderId::Fov];

    fn index(self) -> usize {
        match self {
            SliderId::W => 0,
            SliderId::Theta => 1,
            SliderId::Pitch => 2,
            SliderId::Fov => 3,
        }
    }

    /// Short label used in the window title
    pub fn label(self) -> &'static str {
        match self {
            SliderId::W => "w",
            SliderId::Theta => "theta",
            SliderId::Pitch => "pitch",
            SliderId::Fov => "fov",
        }
    }
}

/// Range, step and starting value of a slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    /// Snapping grid (anchored at zero); zero or negative disables snapping
    pub step: f32,
    pub initial: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32, initial: f32) -> Self {
        Self { min, max, step, initial }
    }
}

/// A single range input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    range: SliderRange,
    value: f32,
}

impl Slider {
    pub fn new(range: SliderRange) -> Self {
        let mut slider = Self { range, value: range.min };
        slider.set_value(range.initial);
        slider
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Set the value, snapping to the step grid and clamping to the range
    pub fn set_value(&mut self, value: f32) {
        let SliderRange { min, max, step, .. } = self.range;
        let snapped = if step > 0.0 {
            (value / step).round() * step
        } else {
            value
        };
        self.value = snapped.clamp(min, max);
    }

    /// Position of the value along the track, in `[0, 1]`
    pub fn fraction(&self) -> f32 {
        let span = self.range.max - self.range.min;
        if span > 0.0 {
            (self.value - self.range.min) / span
        } else {
            0.0
        }
    }

    /// Set the value from a position along the track
    pub fn set_fraction(&mut self, fraction: f32) {
        let f = fraction.clamp(0.0, 1.0);
        self.set_value(self.range.min + f * (self.range.max - self.range.min));
    }

    /// Move by a whole number of steps
    pub fn nudge(&mut self, steps: i32) {
        let step = if self.range.step > 0.0 {
            self.range.step
        } else {
            (self.range.max - self.range.min) / 100.0
        };
        self.set_value(self.value + step * steps as f32);
    }

    pub fn reset(&mut self) {
        self.set_value(self.range.initial);
    }
}

/// Slider values read by the frame driver each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderValues {
    pub w: f32,
    pub theta: f32,
    pub pitch: f32,
    pub fov_degrees: f32,
}

/// The four sliders plus drag state
#[derive(Debug, Clone)]
pub struct SliderPanel {
    sliders: [Slider; 4],
    dragging: Option<SliderId>,
}

impl SliderPanel {
    pub fn new(w: SliderRange, theta: SliderRange, pitch: SliderRange, fov_degrees: SliderRange) -> Self {
        Self {
            sliders: [
                Slider::new(w),
                Slider::new(theta),
                Slider::new(pitch),
                Slider::new(fov_degrees),
            ],
            dragging: None,
        }
    }

    pub fn slider(&self, id: SliderId) -> &Slider {
        &self.sliders[id.index()]
    }

    pub fn slider_mut(&mut self, id: SliderId) -> &mut Slider {
        &mut self.sliders[id.index()]
    }

    pub fn values(&self) -> SliderValues {
        SliderValues {
            w: self.slider(SliderId::W).value(),
            theta: self.slider(SliderId::Theta).value(),
            pitch: self.slider(SliderId::Pitch).value(),
            fov_degrees: self.slider(SliderId::Fov).value(),
        }
    }

    /// Restore every slider to its initial value
    pub fn reset(&mut self) {
        for slider in &mut self.sliders {
            slider.reset();
        }
        self.dragging = None;
    }

    pub fn dragging(&self) -> Option<SliderId> {
        self.dragging
    }

    /// Mouse pressed at `(x, y)`; starts a drag if it lands on a track.
    /// Returns true when the press was consumed by the panel.
    pub fn press(&mut self, layout: &PanelLayout, x: f32, y: f32) -> bool {
        match layout.hit_test(x, y) {
            Some((id, fraction)) => {
                self.slider_mut(id).set_fraction(fraction);
                self.dragging = Some(id);
                true
            }
            None => false,
        }
    }

    /// Cursor moved; updates the dragged slider if any
    pub fn drag(&mut self, layout: &PanelLayout, x: f32) {
        if let Some(id) = self.dragging {
            let fraction = layout.track_fraction(id, x);
            self.slider_mut(id).set_fraction(fraction);
        }
    }

    pub fn release(&mut self) {
        self.dragging = None;
    }
}

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Pixel layout of the side panel
///
/// The panel occupies the rightmost `width` pixels of the window. Tracks are
/// stacked from the top with a fixed pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    /// Left edge of the panel in window pixels
    pub origin_x: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelLayout {
    const MARGIN: f32 = 24.0;
    const FIRST_TRACK_Y: f32 = 48.0;
    const TRACK_SPACING: f32 = 56.0;
    const TRACK_HEIGHT: f32 = 6.0;
    const GRAB_SLOP: f32 = 12.0;

    /// Layout for a window of `window_width` x `window_height` with a panel
    /// of `panel_width` on the right
    pub fn new(window_width: f32, window_height: f32, panel_width: f32) -> Self {
        let width = panel_width.clamp(0.0, window_width.max(0.0));
        Self {
            origin_x: window_width - width,
            width,
            height: window_height,
        }
    }

    /// The whole panel area
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin_x, 0.0, self.width, self.height)
    }

    /// Track rectangle for a slider
    pub fn track(&self, id: SliderId) -> Rect {
        let y = Self::FIRST_TRACK_Y + Self::TRACK_SPACING * id.index() as f32;
        Rect::new(
            self.origin_x + Self::MARGIN,
            y,
            (self.width - 2.0 * Self::MARGIN).max(0.0),
            Self::TRACK_HEIGHT,
        )
    }

    /// Fraction along a track for a cursor x position, clamped to `[0, 1]`
    pub fn track_fraction(&self, id: SliderId, x: f32) -> f32 {
        let track = self.track(id);
        if track.width > 0.0 {
            ((x - track.x) / track.width).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Find the track under a cursor position, with some vertical slop
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(SliderId, f32)> {
        if self.width <= 0.0 {
            return None;
        }
        SliderId::ALL.iter().copied().find_map(|id| {
            let t = self.track(id);
            let grab = Rect::new(t.x, t.y - Self::GRAB_SLOP, t.width, t.height + 2.0 * Self::GRAB_SLOP);
            grab.contains(x, y).then(|| (id, self.track_fraction(id, x)))
        })
    }
}
