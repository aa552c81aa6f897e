use std::collections::HashMap;
use std::f64::consts::PI;
use std::rc::Rc;

use kiss3d::scene::PlanarSceneNode;
use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation2, Vector2};

use crate::consts::{LABEL_TEXT_SIZE, STATUS_TEXT_SIZE};

use super::canvas::{Canvas, TextStyle};
use super::textures::{TextureID, TextureRegistry};
use super::utils::{draw_planar_path, path_iter_parametric};

const CIRCLE_SEGMENTS: usize = 120;

/// Converts between our screen pixels and what kiss3d wants.
///
/// The picture is laid out in a fixed design viewport. kiss3d's planar scene has its
/// origin in the middle of the window with y up, measured in logical pixels, while
/// text and cursor positions are physical pixels from the top-left corner. If the
/// window isn't the design size, the picture stays centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    design: Vector2<f64>,
    window: Vector2<f64>,
    hidpi: f64,
}

impl ScreenMapping {
    pub fn new(design: Vector2<f64>, window_physical: Vector2<f64>, hidpi: f64) -> Self {
        ScreenMapping {
            design,
            window: window_physical / hidpi,
            hidpi,
        }
    }

    pub fn for_window(window: &Window, design: Vector2<f64>) -> Self {
        let size = window.size();
        Self::new(
            design,
            Vector2::new(size.x as f64, size.y as f64),
            window.scale_factor(),
        )
    }

    fn margin(&self) -> Vector2<f64> {
        (self.window - self.design) / 2.0
    }

    pub fn to_planar(&self, p: &Point2<f64>) -> Point2<f32> {
        Point2::new(
            (p.x - self.design.x / 2.0) as f32,
            (self.design.y / 2.0 - p.y) as f32,
        )
    }

    pub fn to_physical(&self, p: &Point2<f64>) -> Point2<f32> {
        let p = (p + self.margin()) * self.hidpi;
        Point2::new(p.x as f32, p.y as f32)
    }

    pub fn from_physical(&self, x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y) / self.hidpi - self.margin()
    }

    pub fn hidpi(&self) -> f64 {
        self.hidpi
    }
}

fn claim<'a, F>(
    nodes: &'a mut Vec<PlanarSceneNode>,
    used: &mut usize,
    make: F,
) -> &'a mut PlanarSceneNode
where
    F: FnOnce() -> PlanarSceneNode,
{
    if *used == nodes.len() {
        nodes.push(make());
    }
    let node = &mut nodes[*used];
    *used += 1;
    node.set_visible(true);
    node
}

fn hide_unused(nodes: &mut [PlanarSceneNode], used: usize) {
    for node in nodes.iter_mut().skip(used) {
        node.set_visible(false);
    }
}

/// Planar scene nodes reused from frame to frame.
///
/// kiss3d keeps drawing a scene node until it's hidden, so a frame claims the nodes it
/// needs and everything it didn't claim gets hidden when it finishes.
#[derive(Default)]
pub struct NodePool {
    discs: Vec<PlanarSceneNode>,
    discs_used: usize,
    rects: Vec<PlanarSceneNode>,
    rects_used: usize,
    sprites: HashMap<TextureID, (Vec<PlanarSceneNode>, usize)>,
}

impl NodePool {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin_frame(&mut self) {
        self.discs_used = 0;
        self.rects_used = 0;
        for (_, used) in self.sprites.values_mut() {
            *used = 0;
        }
    }

    fn end_frame(&mut self) {
        hide_unused(&mut self.discs, self.discs_used);
        hide_unused(&mut self.rects, self.rects_used);
        for (nodes, used) in self.sprites.values_mut() {
            hide_unused(nodes, *used);
        }
    }
}

/// A `Canvas` that draws into a kiss3d window for one frame.
pub struct WindowCanvas<'a> {
    window: &'a mut Window,
    pool: &'a mut NodePool,
    textures: &'a TextureRegistry,
    font: &'a Rc<Font>,
    mapping: ScreenMapping,
}

impl<'a> WindowCanvas<'a> {
    pub fn begin(
        window: &'a mut Window,
        pool: &'a mut NodePool,
        textures: &'a TextureRegistry,
        font: &'a Rc<Font>,
        mapping: ScreenMapping,
    ) -> Self {
        pool.begin_frame();
        WindowCanvas {
            window,
            pool,
            textures,
            font,
            mapping,
        }
    }

    pub fn finish(self) {
        self.pool.end_frame();
    }

    fn place(
        node: &mut PlanarSceneNode,
        mapping: &ScreenMapping,
        center: &Point2<f64>,
        scale: Vector2<f64>,
    ) {
        let center = mapping.to_planar(center);
        node.set_local_translation(Translation2::new(center.x, center.y));
        node.set_local_scale(scale.x as f32, scale.y as f32);
    }
}

impl Canvas for WindowCanvas<'_> {
    type Texture = TextureID;

    fn clear(&mut self, color: &Point3<f32>) {
        self.window.set_background_color(color.x, color.y, color.z);
    }

    fn fill_circle(&mut self, center: &Point2<f64>, radius: f64, color: &Point3<f32>) {
        let window = &mut *self.window;
        let pool = &mut *self.pool;
        let node = claim(&mut pool.discs, &mut pool.discs_used, || {
            window.add_circle(1.0)
        });
        node.set_color(color.x, color.y, color.z);
        Self::place(node, &self.mapping, center, Vector2::new(radius, radius));
    }

    fn stroke_circle(&mut self, center: &Point2<f64>, radius: f64, color: &Point3<f32>) {
        let mapping = self.mapping;
        let center = *center;
        let points = path_iter_parametric(
            move |theta: f64| {
                mapping.to_planar(&Point2::new(
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                ))
            },
            0.0,
            2.0 * PI,
            CIRCLE_SEGMENTS,
        );
        draw_planar_path(self.window, points, color);
    }

    fn fill_rect(&mut self, top_left: &Point2<f64>, size: &Vector2<f64>, color: &Point3<f32>) {
        let window = &mut *self.window;
        let pool = &mut *self.pool;
        let node = claim(&mut pool.rects, &mut pool.rects_used, || {
            window.add_rectangle(1.0, 1.0)
        });
        node.set_color(color.x, color.y, color.z);
        let center = top_left + size / 2.0;
        Self::place(node, &self.mapping, &center, *size);
    }

    fn blit(&mut self, texture: TextureID, center: &Point2<f64>, size: f64) {
        let image = match self.textures.get(texture) {
            Some(image) => image.clone(),
            None => return,
        };
        let window = &mut *self.window;
        let (nodes, used) = self.pool.sprites.entry(texture).or_default();
        let node = claim(nodes, used, || {
            let mut node = window.add_rectangle(1.0, 1.0);
            node.set_color(1.0, 1.0, 1.0);
            node.set_texture(image);
            node
        });
        Self::place(node, &self.mapping, center, Vector2::new(size, size));
    }

    fn draw_text(
        &mut self,
        text: &str,
        top_left: &Point2<f64>,
        style: TextStyle,
        color: &Point3<f32>,
    ) {
        let size = match style {
            TextStyle::Status => STATUS_TEXT_SIZE,
            TextStyle::Label => LABEL_TEXT_SIZE,
        };
        let pos = self.mapping.to_physical(top_left);
        let scale = size * self.mapping.hidpi() as f32;
        self.window.draw_text(text, &pos, scale, self.font, color);
    }
}
