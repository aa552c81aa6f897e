use nalgebra::{Point2, Vector2};

use crate::consts::{
    MAX_SPEED, MIN_SPEED, SLIDER_BOTTOM_OFFSET, SLIDER_GRAB_ABOVE, SLIDER_GRAB_BELOW,
    SLIDER_HEIGHT, SLIDER_KNOB_RADIUS, SLIDER_WIDTH, SLIDER_X,
};

use super::catalog::PlanetID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Zoomed(PlanetID),
}

impl Mode {
    pub fn zoom_target(&self) -> Option<PlanetID> {
        match self {
            Mode::Normal => None,
            Mode::Zoomed(id) => Some(*id),
        }
    }

    pub fn is_zoomed(&self) -> bool {
        matches!(self, Mode::Zoomed(_))
    }
}

#[derive(Debug, Clone)]
pub struct InteractionState {
    pub paused: bool,
    speed_multiplier: f64,
    pub mode: Mode,
    pub slider_dragging: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        InteractionState {
            paused: false,
            speed_multiplier: 1.0,
            mode: Mode::Normal,
            slider_dragging: false,
        }
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Sets the speed multiplier, clamped to [MIN_SPEED, MAX_SPEED].
    pub fn set_speed_multiplier(&mut self, speed: f64) {
        self.speed_multiplier = speed.clamp(MIN_SPEED, MAX_SPEED);
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Geometry of the speed slider, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSlider {
    /// Top-left corner of the track
    pub origin: Point2<f64>,
    pub size: Vector2<f64>,
    pub knob_radius: f64,
}

impl SpeedSlider {
    /// The slider sits in the bottom-left corner of a viewport of the given height.
    pub fn for_viewport_height(height: f64) -> Self {
        SpeedSlider {
            origin: Point2::new(SLIDER_X, height - SLIDER_BOTTOM_OFFSET),
            size: Vector2::new(SLIDER_WIDTH, SLIDER_HEIGHT),
            knob_radius: SLIDER_KNOB_RADIUS,
        }
    }

    /// Whether a press at `point` grabs the slider. The grab box is the track,
    /// stretched vertically so the knob is covered too.
    pub fn grabs(&self, point: &Point2<f64>) -> bool {
        let x_range = self.origin.x..=(self.origin.x + self.size.x);
        let y_range = (self.origin.y - SLIDER_GRAB_ABOVE)..=(self.origin.y + SLIDER_GRAB_BELOW);
        x_range.contains(&point.x) && y_range.contains(&point.y)
    }

    /// Maps a horizontal pointer position onto the speed range. Positions off
    /// either end of the track give the matching bound.
    pub fn speed_at(&self, x: f64) -> f64 {
        let offset = (x - self.origin.x).max(0.0).min(self.size.x);
        MIN_SPEED + (offset / self.size.x) * (MAX_SPEED - MIN_SPEED)
    }

    pub fn knob_center(&self, speed: f64) -> Point2<f64> {
        let fraction = (speed - MIN_SPEED) / (MAX_SPEED - MIN_SPEED);
        Point2::new(
            self.origin.x + fraction * self.size.x,
            self.origin.y + self.size.y / 2.0,
        )
    }
}
