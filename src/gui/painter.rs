use nalgebra::{Point2, Vector2};

use crate::consts::{
    BACKGROUND_COLOR, FOOTER_BOTTOM_OFFSET, GRAY, LABEL_OFFSET, SLIDER_COLOR,
    SUN_COLOR, SUN_FALLBACK_RADIUS, SUN_FALLBACK_RADIUS_ZOOMED, SUN_SPRITE_SIZE,
    SUN_SPRITE_SIZE_ZOOMED, WHITE,
};
use crate::model::catalog::PlanetID;
use crate::model::{Layout, SimulationState};

use super::canvas::{Canvas, TextStyle};
use super::sprites::Sprites;

const HELP_LINES: [(&str, f64); 2] = [
    ("Use the slider to adjust speed", 40.0),
    ("Click on a planet to zoom in", 60.0),
];
const FOOTER: &str = "SPACE: Pause | Click Planet: Zoom | ESC: Exit Zoom";
const STATUS_POSITION: (f64, f64) = (10.0, 10.0);

/// Draws one full frame, back to front.
pub fn paint<C: Canvas>(
    canvas: &mut C,
    state: &SimulationState,
    sprites: &Sprites<C::Texture>,
    pointer: Option<Point2<f64>>,
) {
    let layout = state.layout();
    let hover = pointer.and_then(|pointer| state.hover(&pointer).map(|hit| (pointer, hit)));

    canvas.clear(&BACKGROUND_COLOR);
    draw_sun(canvas, &layout, sprites.sun);
    draw_orbits(canvas, &layout);
    draw_bodies(canvas, &layout, sprites);

    // Label goes on top of all the bodies
    if let Some((pointer, hit)) = hover {
        let pos = pointer + Vector2::new(LABEL_OFFSET.0, LABEL_OFFSET.1);
        canvas.draw_text(hit.name(), &pos, TextStyle::Label, &WHITE);
    }

    draw_slider(canvas, state);
    draw_status(canvas, state);
}

fn draw_sun<C: Canvas>(canvas: &mut C, layout: &Layout, texture: Option<C::Texture>) {
    let zoomed = layout.mode.is_zoomed();
    match texture {
        Some(texture) => {
            let size = if zoomed {
                SUN_SPRITE_SIZE_ZOOMED
            } else {
                SUN_SPRITE_SIZE
            };
            canvas.blit(texture, &layout.sun_center, size);
        }
        None => {
            let radius = if zoomed {
                SUN_FALLBACK_RADIUS_ZOOMED
            } else {
                SUN_FALLBACK_RADIUS
            };
            canvas.fill_circle(&layout.sun_center, radius, &SUN_COLOR);
        }
    }
}

fn draw_orbits<C: Canvas>(canvas: &mut C, layout: &Layout) {
    let placements = layout.planets.iter().chain(layout.moons.iter().map(|(_, p)| p));
    for placement in placements {
        canvas.stroke_circle(&placement.orbit_center, placement.orbit_radius, &GRAY);
    }
}

fn draw_bodies<C: Canvas>(canvas: &mut C, layout: &Layout, sprites: &Sprites<C::Texture>) {
    for (i, placement) in layout.planets.iter().enumerate() {
        let texture = sprites.planet(PlanetID(i));
        draw_body(canvas, texture, &placement.center, placement.draw_size);
    }
    for (id, placement) in layout.moons.iter() {
        draw_body(canvas, sprites.moon(*id), &placement.center, placement.draw_size);
    }
}

/// Blits the texture, or draws a white disc of the same size if there isn't one.
fn draw_body<C: Canvas>(
    canvas: &mut C,
    texture: Option<C::Texture>,
    center: &Point2<f64>,
    draw_size: f64,
) {
    match texture {
        Some(texture) => canvas.blit(texture, center, draw_size),
        None => canvas.fill_circle(center, draw_size / 2.0, &WHITE),
    }
}

fn draw_slider<C: Canvas>(canvas: &mut C, state: &SimulationState) {
    let slider = state.slider();
    canvas.fill_rect(&slider.origin, &slider.size, &GRAY);

    let knob = slider.knob_center(state.interaction().speed_multiplier());
    canvas.fill_circle(&knob, slider.knob_radius, &SLIDER_COLOR);
}

fn draw_status<C: Canvas>(canvas: &mut C, state: &SimulationState) {
    let status_pos = Point2::new(STATUS_POSITION.0, STATUS_POSITION.1);
    canvas.draw_text(&state.status_text(), &status_pos, TextStyle::Status, &WHITE);

    for (line, y) in HELP_LINES.iter() {
        canvas.draw_text(line, &Point2::new(STATUS_POSITION.0, *y), TextStyle::Status, &WHITE);
    }

    let footer_y = state.viewport().y - FOOTER_BOTTOM_OFFSET;
    canvas.draw_text(
        FOOTER,
        &Point2::new(STATUS_POSITION.0, footer_y),
        TextStyle::Status,
        &WHITE,
    );
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    use super::*;
    use crate::model::catalog::{EARTH, MARS};
    use crate::model::{InputEvent, PointerButton};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        FillCircle(Point2<f64>, f64, Point3<f32>),
        StrokeCircle(Point2<f64>, f64),
        FillRect(Point2<f64>, Vector2<f64>),
        Blit(u32, Point2<f64>, f64),
        Text(String, Point2<f64>, TextStyle),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Canvas for Recorder {
        type Texture = u32;

        fn clear(&mut self, _: &Point3<f32>) {
            self.calls.push(Call::Clear);
        }

        fn fill_circle(&mut self, center: &Point2<f64>, radius: f64, color: &Point3<f32>) {
            self.calls.push(Call::FillCircle(*center, radius, *color));
        }

        fn stroke_circle(&mut self, center: &Point2<f64>, radius: f64, _: &Point3<f32>) {
            self.calls.push(Call::StrokeCircle(*center, radius));
        }

        fn fill_rect(&mut self, top_left: &Point2<f64>, size: &Vector2<f64>, _: &Point3<f32>) {
            self.calls.push(Call::FillRect(*top_left, *size));
        }

        fn blit(&mut self, texture: u32, center: &Point2<f64>, size: f64) {
            self.calls.push(Call::Blit(texture, *center, size));
        }

        fn draw_text(
            &mut self,
            text: &str,
            top_left: &Point2<f64>,
            style: TextStyle,
            _: &Point3<f32>,
        ) {
            self.calls.push(Call::Text(text.to_owned(), *top_left, style));
        }
    }

    fn state() -> SimulationState {
        SimulationState::new(Vector2::new(1000.0, 800.0))
    }

    fn all_textures() -> Sprites<u32> {
        let mut next = 0;
        Sprites::load(|_| {
            next += 1;
            Some(next)
        })
    }

    fn kind(call: &Call) -> &'static str {
        match call {
            Call::Clear => "clear",
            Call::FillCircle(..) => "fill",
            Call::StrokeCircle(..) => "orbit",
            Call::FillRect(..) => "rect",
            Call::Blit(..) => "blit",
            Call::Text(..) => "text",
        }
    }

    #[test]
    fn test_draw_order() {
        let mut canvas = Recorder::default();
        // Hover over Earth so a label shows up
        paint(&mut canvas, &state(), &all_textures(), Some(Point2::new(630.0, 400.0)));

        let kinds: Vec<_> = canvas.calls.iter().map(kind).collect();
        let mut expected = vec!["clear", "blit"];
        expected.extend(vec!["orbit"; 8]);
        expected.extend(vec!["blit"; 8]);
        expected.extend(vec!["text", "rect", "fill"]);
        expected.extend(vec!["text"; 4]);
        assert_eq!(kinds, expected);

        assert_eq!(
            canvas.calls[18],
            Call::Text("Earth".to_owned(), Point2::new(642.0, 410.0), TextStyle::Label)
        );
        assert_eq!(canvas.calls[1], Call::Blit(1, Point2::new(500.0, 400.0), 100.0));
    }

    #[test]
    fn test_missing_textures_fall_back_to_discs() {
        let mut canvas = Recorder::default();
        paint(&mut canvas, &state(), &Sprites::none(), None);

        assert!(canvas.calls.iter().all(|c| !matches!(c, Call::Blit(..))));
        assert_eq!(
            canvas.calls[1],
            Call::FillCircle(Point2::new(500.0, 400.0), SUN_FALLBACK_RADIUS, SUN_COLOR)
        );
        // Mercury: 12px sprite becomes a 6px-radius white disc
        assert_eq!(
            canvas.calls[10],
            Call::FillCircle(Point2::new(560.0, 400.0), 6.0, WHITE)
        );
        let white_discs = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, Call::FillCircle(_, _, color) if *color == WHITE))
            .count();
        assert_eq!(white_discs, 8);
    }

    #[test]
    fn test_partial_textures() {
        let sprites = Sprites::load(|name| if name == "mars.png" { Some(7) } else { None });
        let mut canvas = Recorder::default();
        paint(&mut canvas, &state(), &sprites, None);

        let blits: Vec<_> = canvas
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Blit(..)))
            .collect();
        assert_eq!(blits, vec![&Call::Blit(7, Point2::new(670.0, 400.0), 16.0)]);
    }

    #[test]
    fn test_zoomed_frame() {
        let mut state = state();
        state.handle_event(InputEvent::PointerDown(
            PointerButton::Primary,
            Point2::new(670.0, 400.0),
        ));
        assert_eq!(state.mode().zoom_target(), Some(MARS));

        let mut canvas = Recorder::default();
        paint(&mut canvas, &state, &all_textures(), None);

        assert_eq!(canvas.calls[1], Call::Blit(1, Point2::new(500.0, 400.0), 60.0));

        // 8 planet orbits plus Phobos and Deimos
        let orbits: Vec<_> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::StrokeCircle(center, r) => Some((*center, *r)),
                _ => None,
            })
            .collect();
        assert_eq!(orbits.len(), 10);
        assert_relative_eq!(orbits[3].1, 150.0, epsilon = 1e-9);
        assert_relative_eq!(orbits[8].0, Point2::new(650.0, 400.0), epsilon = 1e-9);
        assert_relative_eq!(orbits[8].1, 12.0 * 150.0 / 170.0, epsilon = 1e-9);

        // Planets, then two moons
        let sizes: Vec<_> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Blit(_, _, size) => Some(*size),
                _ => None,
            })
            .collect();
        assert_eq!(
            sizes,
            vec![60.0, 12.0, 18.0, 20.0, 48.0, 38.0, 34.0, 28.0, 27.0, 18.0, 15.0]
        );
    }

    #[test]
    fn test_moon_label_when_zoomed() {
        let mut state = state();
        state.handle_event(InputEvent::PointerDown(
            PointerButton::Primary,
            Point2::new(630.0, 400.0),
        ));
        assert_eq!(state.mode().zoom_target(), Some(EARTH));

        let moon = state.layout().moons[0].1.center;
        let mut canvas = Recorder::default();
        paint(&mut canvas, &state, &Sprites::none(), Some(moon));

        let labels: Vec<_> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(text, _, TextStyle::Label) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Moon"]);
    }

    #[test]
    fn test_status_lines() {
        let mut state = state();
        state.handle_event(InputEvent::TogglePause);
        let mut canvas = Recorder::default();
        paint(&mut canvas, &state, &Sprites::none(), None);

        let texts: Vec<_> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(text, pos, TextStyle::Status) => Some((text.as_str(), pos.y)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![
                ("Paused | Speed: 1.0x", 10.0),
                ("Use the slider to adjust speed", 40.0),
                ("Click on a planet to zoom in", 60.0),
                (FOOTER, 780.0),
            ]
        );

        // Slider track and knob at 1x
        assert!(canvas.calls.contains(&Call::FillRect(
            Point2::new(20.0, 740.0),
            Vector2::new(200.0, 8.0)
        )));
    }
}
