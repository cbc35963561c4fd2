//! ASCII grid renderer

use crate::platform::RenderSink;
use crate::sim::Entity;

/// Draw a frame as a bordered character grid.
///
/// Later entities overwrite earlier ones on a shared cell, so the ship
/// (last in a snapshot) is always visible. Off-grid entities are skipped.
pub fn draw_frame(frame: &[Entity], width: i32, height: i32) -> String {
    let (w, h) = (width.max(0) as usize, height.max(0) as usize);
    let mut cells = vec![' '; w * h];
    for entity in frame {
        let (x, y) = (entity.pos.x, entity.pos.y);
        if x < 0 || y < 0 || x >= width || y >= height {
            continue;
        }
        cells[y as usize * w + x as usize] = entity.kind.glyph();
    }

    let border: String = std::iter::once('+')
        .chain(std::iter::repeat_n('-', w))
        .chain(std::iter::once('+'))
        .collect();

    let mut out = String::with_capacity((w + 3) * (h + 2));
    out.push_str(&border);
    out.push('\n');
    for row in cells.chunks(w.max(1)).take(h) {
        out.push('|');
        out.extend(row.iter());
        out.push('|');
        out.push('\n');
    }
    out.push_str(&border);
    out
}

/// Keeps the most recent frame, drawing it on demand
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    width: i32,
    height: i32,
    last_frame: String,
    frames: u64,
}

impl AsciiRenderer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            last_frame: String::new(),
            frames: 0,
        }
    }

    pub fn last_frame(&self) -> &str {
        &self.last_frame
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for AsciiRenderer {
    fn render(&mut self, frame: &[Entity]) {
        self.last_frame = draw_frame(frame, self.width, self.height);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EntityKind;
    use glam::IVec2;

    #[test]
    fn test_draw_small_grid() {
        let frame = [
            Entity::new(1, EntityKind::Asteroid, IVec2::new(0, 0)),
            Entity::new(2, EntityKind::Bullet, IVec2::new(2, 1)),
            Entity::new(0, EntityKind::Ship, IVec2::new(1, 1)),
        ];
        let text = draw_frame(&frame, 3, 2);
        assert_eq!(text, "+---+\n|O  |\n| A||\n+---+");
    }

    #[test]
    fn test_ship_drawn_over_shared_cell() {
        let frame = [
            Entity::new(1, EntityKind::Bullet, IVec2::new(0, 0)),
            Entity::new(0, EntityKind::Ship, IVec2::new(0, 0)),
        ];
        assert_eq!(draw_frame(&frame, 1, 1), "+-+\n|A|\n+-+");
    }

    #[test]
    fn test_renderer_counts_frames() {
        let mut renderer = AsciiRenderer::new(2, 2);
        renderer.render(&[]);
        renderer.render(&[Entity::new(0, EntityKind::Ship, IVec2::new(5, 5))]);
        assert_eq!(renderer.frames(), 2);
        assert_eq!(renderer.last_frame(), "+--+\n|  |\n|  |\n+--+");
    }
}
