use alloc::{string::String, vec, vec::Vec};

use crate::render::{Area, Point, Renderer};

/// Draws onto a grid of characters, one character per unit of [Point]. Use with
/// [RenderSettings::ascii](crate::render::RenderSettings::ascii).
///
/// Circles aren't drawn; a node is just its text.
#[derive(Clone, Debug)]
pub struct AsciiRenderer {
    size: Area,
    grid: Vec<Vec<char>>,
}

impl AsciiRenderer {
    pub fn new(size: Area) -> AsciiRenderer {
        AsciiRenderer {
            size,
            grid: vec![vec![' '; size.width as usize]; size.height as usize],
        }
    }

    /// The drawn rows, with trailing spaces and trailing empty rows removed.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.grid
            .iter()
            .map(|row| String::from(row.iter().collect::<String>().trim_end()))
            .collect::<Vec<_>>();

        while lines.last().map_or(false, |l| l.is_empty()) {
            lines.pop();
        }

        lines
    }

    /// Blanks the whole grid.
    pub fn clear(&mut self) {
        for row in self.grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = ' ';
            }
        }
    }

    fn put_char(&mut self, char: char, point: Point) {
        if point.x < 0 || point.y < 0 {
            return;
        }

        if let Some(cell) = self.grid
            .get_mut(point.y as usize)
            .and_then(|row| row.get_mut(point.x as usize))
        {
            *cell = char;
        }
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        AsciiRenderer::new(Area::new(80, 24))
    }
}

impl Renderer for AsciiRenderer {
    fn canvas_size(&mut self) -> Area {
        self.size
    }

    fn draw_arc(&mut self, _centre: Point, _radius: i64, _start_angle: f32, _end_angle: f32) {}

    fn draw_line(&mut self, from: Point, to: Point) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        let char = if dy == 0 {
            '-'
        } else if dx == 0 {
            '|'
        } else if (dx > 0) == (dy > 0) {
            '\\'
        } else {
            '/'
        };

        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.put_char(char, from);
            return;
        }

        // Shallow lines only use the slope character where they change row
        let shallow = dx.abs() > dy.abs();
        let mut last_row = None;
        for step in 0..=steps {
            let point = Point::new(
                from.x + dx * step / steps,
                from.y + dy * step / steps,
            );
            let char = if shallow && last_row == Some(point.y) { '-' } else { char };
            self.put_char(char, point);
            last_row = Some(point.y);
        }
    }

    fn draw_text(&mut self, text: &str, centre: Point) {
        let start = centre.dx(-(text.chars().count() as i64 / 2));
        for (i, c) in text.chars().enumerate() {
            self.put_char(c, start.dx(i as i64));
        }
    }
}
