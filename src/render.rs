use std::ops::Range;

use crate::{Coords, TermInt};
use crate::snake::{Field, Position};
use crate::term::Cell;
use crate::theme::Theme;
use crate::world::World;

use rand::Rng;

/// Maps continuous field coordinates onto a rectangle of terminal cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub top_left: Coords,
    pub cols: TermInt,
    pub rows: TermInt,
    field: Field,
}

impl Viewport {
    pub fn new(top_left: Coords, cols: TermInt, rows: TermInt, field: Field) -> Self {
        Viewport { top_left, cols, rows, field }
    }

    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Terminal position of the cell at `idx` in a frame buffer.
    pub fn coords_of(&self, idx: usize) -> Coords {
        let cols = self.cols as usize;
        (self.top_left.0 + (idx % cols) as TermInt, self.top_left.1 + (idx / cols) as TermInt)
    }

    fn span(start: f64, len: f64, dim: f64, cells: TermInt) -> Range<TermInt> {
        let scale = cells as f64 / dim;
        let first = ((start * scale).floor().max(0.0) as TermInt).min(cells - 1);
        let last = ((start + len) * scale).ceil().min(cells as f64) as TermInt;
        first..last.max(first + 1)
    }

    /// Cells covered by the axis-aligned box at `pos`, clipped to the field.
    fn cells_of(&self, pos: Position, size: f64) -> (Range<TermInt>, Range<TermInt>) {
        (
            Self::span(pos.x, size, self.field.width, self.cols),
            Self::span(pos.y, size, self.field.height, self.rows),
        )
    }

    fn fill(&self, frame: &mut [Cell], pos: Position, size: f64, cell: Cell) {
        let (xs, ys) = self.cells_of(pos, size);
        for y in ys {
            for x in xs.clone() {
                frame[y as usize * self.cols as usize + x as usize] = cell;
            }
        }
    }
}

/// Paints one frame: canvas, pickup, body, then the head marker.
pub fn compose<R: Rng>(world: &World<R>, theme: &Theme, viewport: &Viewport) -> Vec<Cell> {
    let mut frame = vec![Cell::blank(theme.canvas); viewport.cell_count()];

    let pickup = world.pickup();
    viewport.fill(&mut frame, pickup.pos, pickup.size, Cell::blank(theme.pickup));

    let player = world.player();
    let size = player.size();
    for pos in player.body() {
        viewport.fill(&mut frame, *pos, size, Cell::blank(theme.player));
    }

    let head = player.head();
    let marker = Position::new(head.x + size / 4.0, head.y + size / 4.0);
    viewport.fill(&mut frame, marker, size / 2.0, Cell::blank(theme.player_stroke));

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::theme::LIGHT;
    use crossterm::style::Color;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn viewport() -> Viewport {
        Viewport::new((1, 1), 80, 30, Field::new(800.0, 600.0))
    }

    #[test]
    fn span_scales_and_clips() {
        assert_eq!(Viewport::span(0.0, 20.0, 800.0, 80), 0..2);
        assert_eq!(Viewport::span(405.0, 20.0, 800.0, 80), 40..43);
        assert_eq!(Viewport::span(790.0, 20.0, 800.0, 80), 79..80);
        assert_eq!(Viewport::span(799.0, 0.1, 800.0, 80), 79..80);
    }

    #[test]
    fn tiny_boxes_still_cover_a_cell() {
        let r = Viewport::span(100.0, 1.0, 800.0, 10);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn coords_are_offset_by_top_left() {
        let vp = viewport();
        assert_eq!(vp.coords_of(0), (1, 1));
        assert_eq!(vp.coords_of(81), (2, 2));
        assert_eq!(vp.coords_of(vp.cell_count() - 1), (80, 30));
    }

    #[test]
    fn frame_shows_pickup_body_and_head() {
        let config = Config::default();
        let world = World::new_with_rng(&config, ChaCha8Rng::seed_from_u64(7));
        let vp = viewport();

        let frame = compose(&world, &LIGHT, &vp);
        assert_eq!(frame.len(), vp.cell_count());

        let count = |bg: Color| frame.iter().filter(|c| c.bg == bg).count();
        assert!(count(LIGHT.player_stroke) >= 1);
        assert!(count(LIGHT.canvas) > vp.cell_count() / 2);
        assert!(count(LIGHT.player) + count(LIGHT.player_stroke) + count(LIGHT.pickup) >= 2);
    }
}
