// Draws the tree diagram for an equation in a window.
//
// Usage: window_tree <equation> [font.ttf]
// The font defaults to $EQREPS_FONT, or DejaVu Sans from its usual location.

use std::error::Error;
use std::rc::Rc;

use speedy2d::{
    color::Color,
    dimen::UVec2,
    font::{Font, FormattedTextBlock, TextLayout, TextOptions},
    window::{WindowHandler, WindowHelper},
    Graphics2D, Window,
};

use eqreps::render::{Area, Point, RenderSettings, Renderer};
use eqreps::{Equation, ExpressionNode};

const DEFAULT_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
const WINDOW_SIZE: (u32, u32) = (640, 480);
const TEXT_SCALE: f32 = 14.0;

/// speedy2d only draws filled circles, so arcs are made of this many straight segments.
const ARC_SEGMENTS: usize = 32;

struct Speedy2DRenderer<'a> {
    graphics: &'a mut Graphics2D,
    font: &'a Font,
    size: UVec2,
}

impl<'a> Speedy2DRenderer<'a> {
    fn text_layout(&self, text: &str) -> Rc<FormattedTextBlock> {
        self.font.layout_text(text, TEXT_SCALE, TextOptions::new())
    }
}

impl<'a> Renderer for Speedy2DRenderer<'a> {
    fn canvas_size(&mut self) -> Area {
        Area::new(self.size.x as u64, self.size.y as u64)
    }

    fn draw_arc(&mut self, centre: Point, radius: i64, start_angle: f32, end_angle: f32) {
        let point = |angle: f32| (
            centre.x as f32 + radius as f32 * angle.cos(),
            centre.y as f32 + radius as f32 * angle.sin(),
        );
        let step = (end_angle - start_angle) / ARC_SEGMENTS as f32;

        for i in 0..ARC_SEGMENTS {
            let from = point(start_angle + step * i as f32);
            let to = point(start_angle + step * (i + 1) as f32);
            self.graphics.draw_line(from, to, 1.0, Color::BLACK);
        }
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.graphics.draw_line(
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            1.0,
            Color::BLACK,
        );
    }

    fn draw_text(&mut self, text: &str, centre: Point) {
        let layout = self.text_layout(text);
        self.graphics.draw_text(
            (
                centre.x as f32 - layout.width() / 2.0,
                centre.y as f32 - layout.height() / 2.0,
            ),
            Color::BLACK,
            &layout,
        );
    }
}

struct WindowTree {
    equation: Equation,
    tree: ExpressionNode,
    font: Font,
    size: UVec2,
}

impl WindowHandler for WindowTree {
    fn on_resize(&mut self, helper: &mut WindowHelper, size_pixels: UVec2) {
        self.size = size_pixels;
        helper.request_redraw();
    }

    fn on_draw(&mut self, _helper: &mut WindowHelper, graphics: &mut Graphics2D) {
        graphics.clear_screen(Color::from_rgb(1.0, 1.0, 1.0));

        let mut renderer = Speedy2DRenderer { graphics, font: &self.font, size: self.size };
        renderer.draw_tree(&self.tree, self.equation.as_str(), &RenderSettings::default());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let raw = args.next().ok_or("usage: window_tree <equation> [font.ttf]")?;
    let font_path = args.next()
        .or_else(|| std::env::var("EQREPS_FONT").ok())
        .unwrap_or_else(|| DEFAULT_FONT.to_string());

    let equation = Equation::parse(&raw)?;
    let tree = equation.tree()?;
    println!("{}", equation.postfix());

    let font = Font::new(&std::fs::read(&font_path)?)
        .map_err(|e| format!("unable to load font {}: {:?}", font_path, e))?;
    let window = Window::new_centered("Equation Tree", WINDOW_SIZE)
        .map_err(|e| format!("unable to create window: {:?}", e))?;

    window.run_loop(WindowTree {
        equation,
        tree,
        font,
        size: UVec2::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
    })
}
