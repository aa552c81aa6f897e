use std::path::Path;
use std::rc::Rc;

use kiss3d::event::EventManager;
use kiss3d::text::Font;
use kiss3d::window::{State, Window};
use nalgebra::Vector2;

use self::controller::Controller;
use self::sprites::Sprites;
use self::textures::{TextureID, TextureRegistry};
use self::window_canvas::{NodePool, ScreenMapping, WindowCanvas};
use crate::model::{Flow, SimulationState};

pub mod canvas;
mod controller;
pub mod painter;
pub mod sprites;
pub mod textures;
mod utils;
pub mod window_canvas;

pub struct Simulation {
    state: SimulationState,
    controller: Controller,
    textures: TextureRegistry,
    sprites: Sprites<TextureID>,
    nodes: NodePool,
    font: Rc<Font>,
}

impl Simulation {
    pub fn new(viewport: Vector2<f64>, texture_dir: &Path) -> Self {
        let mut textures = TextureRegistry::new();
        let sprites = textures.load_sprites(texture_dir);
        Self {
            state: SimulationState::new(viewport),
            controller: Controller::new(),
            textures,
            sprites,
            nodes: NodePool::new(),
            font: Font::default(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager, mapping: &ScreenMapping) -> Flow {
        let mut flow = Flow::Continue;
        for event in events.iter() {
            if let Some(input) = self.controller.process_event(event, mapping) {
                if self.state.handle_event(input) == Flow::Quit {
                    flow = Flow::Quit;
                }
            }
        }
        flow
    }
}

impl State for Simulation {
    fn step(&mut self, window: &mut Window) {
        let mapping = ScreenMapping::for_window(window, self.state.viewport());
        self.controller.seed_cursor(window.cursor_pos(), &mapping);
        if self.process_user_input(window.events(), &mapping) == Flow::Quit {
            window.close();
            return;
        }

        self.state.tick();

        let mut canvas = WindowCanvas::begin(
            window,
            &mut self.nodes,
            &self.textures,
            &self.font,
            mapping,
        );
        painter::paint(&mut canvas, &self.state, &self.sprites, self.controller.cursor());
        canvas.finish();
    }
}
