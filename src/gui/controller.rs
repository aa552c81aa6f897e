use kiss3d::event::{Action, Event, Key, MouseButton, WindowEvent};
use nalgebra::Point2;

use crate::model::{InputEvent, PointerButton};

use super::window_canvas::ScreenMapping;

// Key config, all in one place
const KEY_TOGGLE_PAUSE: Key = Key::Space;
const KEY_EXIT_ZOOM: Key = Key::Escape;

/// Turns kiss3d window events into `InputEvent`s, and remembers where the
/// cursor is.
pub struct Controller {
    cursor: Option<Point2<f64>>,
    cursor_events_seen: bool,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            cursor: None,
            cursor_events_seen: false,
        }
    }

    /// Takes the cursor position from the window until the first cursor event
    /// arrives, so a click before any mouse motion still lands somewhere.
    pub fn seed_cursor(&mut self, physical: Option<(f64, f64)>, mapping: &ScreenMapping) {
        if self.cursor_events_seen {
            return;
        }
        if let Some((x, y)) = physical {
            self.cursor = Some(mapping.from_physical(x, y));
        }
    }

    /// Last known cursor position in screen pixels, if the cursor is over the window.
    pub fn cursor(&self) -> Option<Point2<f64>> {
        self.cursor
    }

    pub fn process_event(
        &mut self,
        mut event: Event,
        mapping: &ScreenMapping,
    ) -> Option<InputEvent> {
        // kiss3d closes the window on Escape unless we claim it
        if let WindowEvent::Key(KEY_EXIT_ZOOM, _, _) = event.value {
            event.inhibited = true;
        }
        self.translate(event.value, mapping)
    }

    fn translate(&mut self, event: WindowEvent, mapping: &ScreenMapping) -> Option<InputEvent> {
        match event {
            WindowEvent::Close => Some(InputEvent::Quit),
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => Some(InputEvent::TogglePause),
            WindowEvent::Key(KEY_EXIT_ZOOM, Action::Press, _) => Some(InputEvent::CancelZoom),
            WindowEvent::CursorPos(x, y, _) => {
                let pos = mapping.from_physical(x, y);
                self.cursor = Some(pos);
                self.cursor_events_seen = true;
                Some(InputEvent::PointerMoved(pos))
            }
            WindowEvent::CursorEnter(false) => {
                self.cursor = None;
                self.cursor_events_seen = true;
                None
            }
            WindowEvent::MouseButton(button, action, _) => {
                let pos = self.cursor?;
                let button = match button {
                    MouseButton::Button1 => PointerButton::Primary,
                    MouseButton::Button2 => PointerButton::Secondary,
                    MouseButton::Button3 => PointerButton::Middle,
                    _ => return None,
                };
                if action == Action::Press {
                    Some(InputEvent::PointerDown(button, pos))
                } else {
                    Some(InputEvent::PointerUp(button, pos))
                }
            }
            _ => None,
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
