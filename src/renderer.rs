use crate::{LifeEngine, Point};

/// Renders a generation as a character grid.
///
/// The viewport `[min, max]` is inclusive on both axes and independent of
/// the engine's own bounds; positions outside a bounded engine's rectangle
/// simply read as dead.
#[derive(Clone, Copy, Debug)]
pub struct TextRenderer {
    /// Character printed for a live cell.
    pub alive: char,
    /// Character printed for a dead cell.
    pub dead: char,
    pub min: Point,
    pub max: Point,
}

impl TextRenderer {
    /// Renders one row per y value from `min.y` to `max.y`, one character
    /// per x value from `min.x` to `max.x`, rows separated by `'\n'` with
    /// no trailing newline.
    pub fn render(&self, engine: &LifeEngine) -> String {
        let rows = (self.max.y - self.min.y + 1).max(0) as usize;
        let columns = (self.max.x - self.min.x + 1).max(0) as usize;
        let mut out = String::with_capacity(rows * columns + rows.saturating_sub(1));

        for y in self.min.y..=self.max.y {
            if y > self.min.y {
                out.push('\n');
            }
            for x in self.min.x..=self.max.x {
                let cell = if engine.is_alive(Point::new(x, y)) {
                    self.alive
                } else {
                    self.dead
                };
                out.push(cell);
            }
        }

        out
    }
}
