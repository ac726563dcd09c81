//! Drawing the grid to a terminal.
//!
//! A frame is first drawn into a [`Canvas`] of [`Glyph`]s; only the glyphs
//! that differ from the previous frame are written out.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use pathviz_core::{Grid, Pos, Role};

/// Terminal columns per grid cell. Two columns make cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Colour of each role. This is the only place roles meet colours.
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Empty => Color::Rgb { r: 255, g: 255, b: 255 },
        Role::Start => Color::Rgb { r: 255, g: 165, b: 0 },
        Role::End => Color::Rgb { r: 64, g: 224, b: 208 },
        Role::Barrier => Color::Rgb { r: 0, g: 0, b: 0 },
        Role::Open => Color::Rgb { r: 0, g: 255, b: 0 },
        Role::Closed => Color::Rgb { r: 255, g: 0, b: 0 },
        Role::Path => Color::Rgb { r: 128, g: 0, b: 128 },
    }
}

/// Map a terminal cell to the grid cell drawn there, if any.
pub fn cell_at(grid_size: usize, column: u16, row: u16) -> Option<Pos> {
    let p = Pos::new(row as i32, (column / CELL_WIDTH) as i32);
    let n = grid_size as i32;
    (p.row < n && p.col < n).then_some(p)
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A character with colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// An off-screen terminal image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn at(&self, x: u16, y: u16) -> Glyph {
        if x >= self.width || y >= self.height {
            return Glyph::default();
        }
        self.glyphs[y as usize * self.width as usize + x as usize]
    }

    /// No-op outside the canvas.
    pub fn set(&mut self, x: u16, y: u16, g: Glyph) {
        if x < self.width && y < self.height {
            self.glyphs[y as usize * self.width as usize + x as usize] = g;
        }
    }

    /// Write `text` from (x, y), clipped at the right edge.
    pub fn print(&mut self, x: u16, y: u16, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            let Ok(dx) = u16::try_from(i) else { break };
            self.set(
                x.saturating_add(dx),
                y,
                Glyph {
                    ch,
                    ..Glyph::default()
                },
            );
        }
    }

    /// Blank the canvas.
    pub fn clear(&mut self) {
        self.glyphs.fill(Glyph::default());
    }

    /// Draw the grid at the top-left corner and `status` on the line below.
    pub fn draw(&mut self, grid: &Grid, status: &str) {
        self.clear();
        for (p, role) in grid.iter() {
            let bg = role_color(role);
            let x0 = p.col as u16 * CELL_WIDTH;
            for dx in 0..CELL_WIDTH {
                self.set(
                    x0 + dx,
                    p.row as u16,
                    Glyph {
                        ch: ' ',
                        fg: Color::Reset,
                        bg,
                    },
                );
            }
        }
        self.print(0, grid.size() as u16 + 1, status);
    }
}

/// A glyph that changed between two frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Change {
    pub x: u16,
    pub y: u16,
    pub glyph: Glyph,
}

/// Glyphs of `curr` that differ from `prev`, row-major. Both canvases must
/// have the same size.
pub fn diff(prev: &Canvas, curr: &Canvas) -> Vec<Change> {
    let mut out = Vec::new();
    for y in 0..curr.height {
        for x in 0..curr.width {
            let g = curr.at(x, y);
            if prev.at(x, y) != g {
                out.push(Change { x, y, glyph: g });
            }
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Draws frames to `out`, sending only what changed since the last one.
pub struct Renderer<W: Write> {
    out: W,
    prev: Canvas,
    curr: Canvas,
}

impl<W: Write> Renderer<W> {
    /// A renderer for a `width`×`height` terminal area. The screen is
    /// assumed blank.
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            prev: Canvas::new(width, height),
            curr: Canvas::new(width, height),
        }
    }

    /// Draw `grid` and `status`, then flush the changes.
    pub fn present(&mut self, grid: &Grid, status: &str) -> io::Result<()> {
        self.curr.draw(grid, status);
        let changes = diff(&self.prev, &self.curr);
        if !changes.is_empty() {
            self.flush(&changes)?;
        }
        std::mem::swap(&mut self.prev, &mut self.curr);
        Ok(())
    }

    /// Forget what is on screen so the next frame is drawn in full.
    pub fn invalidate(&mut self) {
        // No frame ever draws NUL, so every cell differs next time.
        self.prev.glyphs.fill(Glyph {
            ch: '\0',
            ..Glyph::default()
        });
    }

    fn flush(&mut self, changes: &[Change]) -> io::Result<()> {
        for c in changes {
            queue!(
                self.out,
                cursor::MoveTo(c.x, c.y),
                SetForegroundColor(c.glyph.fg),
                SetBackgroundColor(c.glyph.bg),
                Print(c.glyph.ch)
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// The underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }
}
