use std::path::PathBuf;

use clap::Parser;
use kiss3d::window::Window;
use log::info;
use nalgebra::Vector2;

use rust_orrery::consts::{
    DEFAULT_TEXTURE_DIR, FRAMERATE, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use rust_orrery::gui::Simulation;

/// A sun, eight planets and a few moons going around in circles
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding sun.png, earth.png, etc.
    #[arg(long, default_value = DEFAULT_TEXTURE_DIR)]
    textures: PathBuf,
    /// Frame rate cap. Bodies move once per frame, so this also sets their speed.
    #[arg(long, default_value_t = FRAMERATE)]
    fps: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut window = Window::new_with_size(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT);
    window.set_framerate_limit(Some(args.fps));

    info!("Loading textures from {}", args.textures.display());
    let viewport = Vector2::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64);
    let simulation = Simulation::new(viewport, &args.textures);
    window.render_loop(simulation);
}
