use log::{debug, info};
use nalgebra::{Point2, Vector2};

use super::catalog;
use super::hit_test::Hit;
use super::interaction::{InteractionState, Mode, SpeedSlider};
use super::layout::Layout;
use super::orrery::Orrery;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Input, already stripped of windowing details. Positions are in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    TogglePause,
    CancelZoom,
    PointerDown(PointerButton, Point2<f64>),
    PointerUp(PointerButton, Point2<f64>),
    PointerMoved(Point2<f64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything that changes while the program runs.
#[derive(Debug, Clone)]
pub struct SimulationState {
    orrery: Orrery,
    interaction: InteractionState,
    slider: SpeedSlider,
    viewport: Vector2<f64>,
}

impl SimulationState {
    pub fn new(viewport: Vector2<f64>) -> Self {
        SimulationState {
            orrery: Orrery::new(),
            interaction: InteractionState::new(),
            slider: SpeedSlider::for_viewport_height(viewport.y),
            viewport,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::Quit => return Flow::Quit,
            InputEvent::TogglePause => {
                self.interaction.paused = !self.interaction.paused;
                info!(
                    "{}",
                    if self.interaction.paused {
                        "Paused"
                    } else {
                        "Resumed"
                    }
                );
            }
            InputEvent::CancelZoom => {
                if let Mode::Zoomed(id) = self.interaction.mode {
                    info!("Leaving zoom on {}", catalog::planet_info(id).info.name);
                    self.interaction.mode = Mode::Normal;
                }
            }
            InputEvent::PointerDown(PointerButton::Primary, pos) => self.press(pos),
            InputEvent::PointerDown(_, _) => {}
            // Any button lets go of the slider
            InputEvent::PointerUp(_, _) => self.interaction.slider_dragging = false,
            InputEvent::PointerMoved(pos) => {
                if self.interaction.slider_dragging {
                    self.interaction
                        .set_speed_multiplier(self.slider.speed_at(pos.x));
                    debug!("Speed is {:.2}x", self.interaction.speed_multiplier());
                }
            }
        }
        Flow::Continue
    }

    fn press(&mut self, pos: Point2<f64>) {
        if self.slider.grabs(&pos) {
            self.interaction.slider_dragging = true;
            return;
        }

        // Zoom can only be entered from the normal view
        if self.interaction.mode != Mode::Normal {
            return;
        }
        if let Some(id) = self.layout().planet_at(&pos) {
            info!("Zooming in on {}", catalog::planet_info(id).info.name);
            self.interaction.mode = Mode::Zoomed(id);
        }
    }

    /// Advances all bodies by one frame, unless paused.
    pub fn tick(&mut self) {
        if !self.interaction.paused {
            self.orrery.tick(self.interaction.speed_multiplier());
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::compute(&self.orrery, self.interaction.mode, self.sun_center())
    }

    pub fn hover(&self, pointer: &Point2<f64>) -> Option<Hit> {
        self.layout().hit_test(pointer)
    }

    pub fn status_text(&self) -> String {
        format!(
            "{} | Speed: {:.1}x",
            if self.interaction.paused {
                "Paused"
            } else {
                "Running"
            },
            self.interaction.speed_multiplier()
        )
    }

    pub fn sun_center(&self) -> Point2<f64> {
        Point2::from(self.viewport / 2.0)
    }

    pub fn viewport(&self) -> Vector2<f64> {
        self.viewport
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn slider(&self) -> &SpeedSlider {
        &self.slider
    }

    pub fn mode(&self) -> Mode {
        self.interaction.mode
    }
}
