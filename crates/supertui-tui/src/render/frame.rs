//! Double-buffered differential renderer

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate},
};
use tracing::trace;
use unicode_width::UnicodeWidthStr;

use crate::buffer::{Buffer, Cell};
use crate::error::{Result, TuiError};
use crate::geometry::{Rect, Size};
use crate::style::{Color, Modifier};
use crate::theme::Theme;

/// Outcome of a single [`FrameRenderer::flush`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlushStats {
    pub cells_written: usize,
    pub bytes_written: usize,
    pub full_redraw: bool,
}

/// Owns the committed frame (`current`) and the frame being built (`next`).
///
/// Widgets draw into [`FrameRenderer::next_mut`]; [`FrameRenderer::flush`]
/// writes only the cells that differ from what the terminal already shows,
/// then promotes `next` to `current`.
#[derive(Debug)]
pub struct FrameRenderer {
    current: Buffer,
    next: Buffer,
    force_full: bool,
    damage: Vec<Rect>,
    scratch: Vec<u8>,
}

/// Last emitted terminal state while staging one flush
#[derive(Default)]
struct Pen {
    cursor: Option<(u16, u16)>,
    fg: Option<Color>,
    bg: Option<Color>,
    modifier: Modifier,
}

impl FrameRenderer {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let area = checked_area(width, height)?;
        Ok(Self {
            current: Buffer::new(area),
            next: Buffer::new(area),
            force_full: true,
            damage: Vec::new(),
            scratch: Vec::with_capacity(area.area() * 4),
        })
    }

    /// Reallocate both buffers; the next flush repaints everything
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        let area = checked_area(width, height)?;
        self.current = Buffer::new(area);
        self.next = Buffer::new(area);
        self.damage.clear();
        self.force_full = true;
        Ok(())
    }

    pub fn size(&self) -> Size {
        self.next.area().size()
    }

    pub fn area(&self) -> Rect {
        self.next.area()
    }

    /// Write one cell of the next frame; coordinates off the frame are ignored
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(col), Ok(row)) if self.next.area().contains(col, row) => self.next.set(col, row, cell),
            _ => trace!(x, y, "clipped write outside frame"),
        }
    }

    pub fn next(&self) -> &Buffer {
        &self.next
    }

    pub fn next_mut(&mut self) -> &mut Buffer {
        &mut self.next
    }

    /// What the terminal is showing as of the last flush
    pub fn current(&self) -> &Buffer {
        &self.current
    }

    /// Reset the next frame to blank cells in the theme's base colors
    pub fn clear(&mut self, theme: &Theme) {
        self.next.reset(&Cell::blank(theme.base_style()));
    }

    /// Mark part of the committed frame as stale so it is re-emitted
    pub fn invalidate(&mut self, rect: Rect) {
        let clipped = self.current.area().intersect(&rect);
        if !clipped.is_empty() {
            self.damage.push(clipped);
        }
    }

    /// Force the next flush to clear and repaint the whole terminal
    pub fn invalidate_all(&mut self) {
        self.force_full = true;
    }

    /// Number of cells the next flush would write
    pub fn pending_changes(&self) -> usize {
        if self.force_full {
            return self.next.cells().len();
        }
        self.changed_cells().len()
    }

    fn changed_cells(&self) -> Vec<usize> {
        let cells = self.next.cells();
        let old = self.current.cells();
        let width = self.next.area().width as usize;

        let mut dirty: Vec<bool> = cells.iter().zip(old).map(|(new, old)| new != old).collect();
        for rect in &self.damage {
            for (x, y) in rect.positions() {
                if let Some(i) = self.next.index(x, y) {
                    dirty[i] = true;
                }
            }
        }

        // A stale trailing half is repainted through its leading glyph
        for i in 0..dirty.len() {
            if dirty[i] && cells[i].is_continuation() && i % width != 0 {
                dirty[i - 1] = true;
            }
        }

        dirty
            .iter()
            .enumerate()
            .filter(|&(i, &d)| d && !cells[i].is_continuation())
            .map(|(i, _)| i)
            .collect()
    }

    /// Emit the difference between `current` and `next` with one write.
    ///
    /// Writes nothing at all when the frames are identical and nothing was
    /// invalidated.
    pub fn flush<W: Write + ?Sized>(&mut self, writer: &mut W) -> io::Result<FlushStats> {
        let total = self.next.cells().len();
        let mut changed = if self.force_full {
            Vec::new()
        } else {
            self.changed_cells()
        };
        let full = self.force_full || (total > 0 && changed.len() == total);
        if full {
            changed = (0..total)
                .filter(|&i| !self.next.cells()[i].is_continuation())
                .collect();
        }

        if changed.is_empty() && !full {
            self.commit();
            return Ok(FlushStats::default());
        }

        let Self { next, scratch, .. } = self;
        scratch.clear();
        queue!(scratch, BeginSynchronizedUpdate)?;
        if full {
            queue!(scratch, ResetColor, Clear(ClearType::All))?;
        }

        let mut pen = Pen::default();
        for &i in &changed {
            let (x, y) = next.position(i);
            stage_cell(scratch, &mut pen, x, y, &next.cells()[i])?;
        }

        queue!(scratch, SetAttribute(Attribute::Reset), ResetColor, EndSynchronizedUpdate)?;
        writer.write_all(scratch.as_slice())?;
        writer.flush()?;

        let stats = FlushStats {
            cells_written: changed.len(),
            bytes_written: scratch.len(),
            full_redraw: full,
        };
        trace!(
            cells = stats.cells_written,
            bytes = stats.bytes_written,
            full = stats.full_redraw,
            "frame flushed"
        );
        self.commit();
        Ok(stats)
    }

    fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.reset(&Cell::default());
        self.damage.clear();
        self.force_full = false;
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        let area = Rect::sized(80, 24);
        Self {
            current: Buffer::new(area),
            next: Buffer::new(area),
            force_full: true,
            damage: Vec::new(),
            scratch: Vec::new(),
        }
    }
}

fn checked_area(width: u16, height: u16) -> Result<Rect> {
    if width == 0 || height == 0 {
        return Err(TuiError::InvalidDimension { width, height });
    }
    Ok(Rect::sized(width, height))
}

fn stage_cell(out: &mut Vec<u8>, pen: &mut Pen, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
    if pen.cursor != Some((x, y)) {
        queue!(out, MoveTo(x, y))?;
    }

    if cell.modifier != pen.modifier {
        if !pen.modifier.is_empty() {
            // SGR 0 also drops both colors
            queue!(out, SetAttribute(Attribute::Reset))?;
            pen.fg = None;
            pen.bg = None;
        }
        for attr in cell.modifier.attributes() {
            queue!(out, SetAttribute(attr))?;
        }
        pen.modifier = cell.modifier;
    }
    if pen.fg != Some(cell.fg) {
        queue!(out, SetForegroundColor(cell.fg.into()))?;
        pen.fg = Some(cell.fg);
    }
    if pen.bg != Some(cell.bg) {
        queue!(out, SetBackgroundColor(cell.bg.into()))?;
        pen.bg = Some(cell.bg);
    }

    queue!(out, Print(&cell.symbol))?;
    let advance = UnicodeWidthStr::width(cell.symbol.as_str()).max(1) as u16;
    pen.cursor = Some((x.saturating_add(advance), y));
    Ok(())
}
