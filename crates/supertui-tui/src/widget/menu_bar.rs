//! Menu strip with keyboard-driven dropdowns

use super::{BorderStyle, Widget};
use crate::buffer::{Buffer, Cell};
use crate::error::{Result, TuiError};
use crate::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::geometry::Rect;
use crate::style::{text, Style};
use crate::theme::Theme;

/// A selectable dropdown entry carrying the action it triggers
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<A> {
    pub label: String,
    pub mnemonic: char,
    pub action: A,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry<A> {
    Item(MenuItem<A>),
    Separator,
}

impl<A> MenuEntry<A> {
    fn item(&self) -> Option<&MenuItem<A>> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        }
    }
}

/// One top-level menu of the strip
#[derive(Debug, Clone, PartialEq)]
pub struct Menu<A> {
    pub label: String,
    pub mnemonic: char,
    pub entries: Vec<MenuEntry<A>>,
}

impl<A> Menu<A> {
    pub fn new(label: impl Into<String>, mnemonic: char) -> Self {
        Self {
            label: label.into(),
            mnemonic,
            entries: Vec::new(),
        }
    }

    pub fn item(mut self, label: impl Into<String>, mnemonic: char, action: A) -> Self {
        self.entries.push(MenuEntry::Item(MenuItem {
            label: label.into(),
            mnemonic,
            action,
        }));
        self
    }

    pub fn separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    fn first_item(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.item().is_some())
    }

    /// Next selectable entry after `from`, wrapping around
    fn step_item(&self, from: usize, forward: bool) -> Option<usize> {
        let len = self.entries.len();
        (1..=len)
            .map(|n| if forward { (from + n) % len } else { (from + len * 2 - n) % len })
            .find(|&i| self.entries[i].item().is_some())
    }
}

/// Result of offering a key to an open menu
#[derive(Debug, Clone, PartialEq)]
pub enum MenuOutcome<A> {
    /// No menu is open; the key belongs to someone else
    Ignored,
    /// The menu used or swallowed the key
    Consumed,
    /// An item was chosen and the menu closed
    Activate(A),
}

/// Horizontal strip of menus, at most one of them open.
///
/// Closing a dropdown records the rectangle it covered; the owner collects it
/// with [`MenuBar::take_damage`] and invalidates that area on the renderer so
/// the screen underneath is repainted.
#[derive(Debug, Clone)]
pub struct MenuBar<A> {
    bounds: Rect,
    menus: Vec<Menu<A>>,
    open: Option<usize>,
    highlighted: usize,
    damage: Vec<Rect>,
}

impl<A> Default for MenuBar<A> {
    fn default() -> Self {
        Self {
            bounds: Rect::empty(),
            menus: Vec::new(),
            open: None,
            highlighted: 0,
            damage: Vec::new(),
        }
    }
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn check_unique<'a>(scope: &str, keys: impl Iterator<Item = &'a char>) -> Result<()> {
    let mut seen = Vec::new();
    for &key in keys {
        let key = fold(key);
        if seen.contains(&key) {
            return Err(TuiError::DuplicateMnemonic {
                menu: scope.to_string(),
                mnemonic: key,
            });
        }
        seen.push(key);
    }
    Ok(())
}

impl<A> MenuBar<A> {
    /// Build a bar, rejecting mnemonics that repeat within the bar or a menu
    pub fn new(menus: Vec<Menu<A>>) -> Result<Self> {
        check_unique("menu bar", menus.iter().map(|m| &m.mnemonic))?;
        for menu in &menus {
            check_unique(&menu.label, menu.entries.iter().filter_map(|e| e.item()).map(|i| &i.mnemonic))?;
        }
        Ok(Self {
            menus,
            ..Self::default()
        })
    }

    pub fn menus(&self) -> &[Menu<A>] {
        &self.menus
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Entry index highlighted in the open dropdown
    pub fn highlighted(&self) -> Option<usize> {
        self.open.map(|_| self.highlighted)
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.menus.len() || self.open == Some(index) {
            return;
        }
        self.close();
        self.open = Some(index);
        self.highlighted = self.menus[index].first_item().unwrap_or(0);
    }

    /// Open the menu whose mnemonic is `c`; false if there is none
    pub fn open_by_mnemonic(&mut self, c: char) -> bool {
        match self.menus.iter().position(|m| fold(m.mnemonic) == fold(c)) {
            Some(index) => {
                self.open(index);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        if let Some(area) = self.dropdown_area() {
            self.damage.push(area);
        }
        self.open = None;
    }

    /// Rectangles vacated by closed dropdowns since the last call
    pub fn take_damage(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.damage)
    }

    /// Column where each menu label starts, and the label cell width
    fn label_spans(&self) -> Vec<(u16, u16)> {
        let mut x = self.bounds.x.saturating_add(1);
        self.menus
            .iter()
            .map(|menu| {
                let width = text::width(&menu.label) as u16 + 2;
                let span = (x, width);
                x = x.saturating_add(width);
                span
            })
            .collect()
    }

    /// Screen area covered by the open dropdown, anchored below its label
    pub fn dropdown_area(&self) -> Option<Rect> {
        let index = self.open?;
        let menu = &self.menus[index];
        let (label_x, _) = self.label_spans()[index];

        let widest = menu
            .entries
            .iter()
            .filter_map(|e| e.item())
            .map(|item| text::width(&item.label))
            .max()
            .unwrap_or(0) as u16;
        let width = widest.saturating_add(4).max(8);
        let height = menu.entries.len() as u16 + 2;

        // Shift left rather than run off the strip's right edge
        let x = if self.bounds.width > 0 {
            label_x.min(self.bounds.right().saturating_sub(width)).max(self.bounds.x)
        } else {
            label_x
        };
        Some(Rect::new(x, self.bounds.y.saturating_add(1), width, height))
    }

    /// Label text with its mnemonic letter drawn in `accent`
    fn render_label(buf: &mut Buffer, x: u16, y: u16, label: &str, mnemonic: char, (style, accent): (Style, Style), max: usize) {
        let written = buf.set_stringn(x, y, label, max, style);
        let hit = label.char_indices().find(|&(_, c)| fold(c) == fold(mnemonic));
        if let Some((byte, c)) = hit {
            let col = x + text::width(&label[..byte]) as u16;
            if col < x + written {
                buf.set_stringn(col, y, &c.to_string(), 1, accent);
            }
        }
    }

    fn render_dropdown(&self, buf: &mut Buffer, theme: &Theme) {
        let (Some(index), Some(area)) = (self.open, self.dropdown_area()) else {
            return;
        };
        let base = theme.surface_style();
        buf.fill(area, &Cell::blank(base));
        BorderStyle::Rounded.draw(area, buf, base.fg(theme.primary));

        let inner = area.inner(1);
        for (row, entry) in self.menus[index].entries.iter().enumerate() {
            let y = inner.y + row as u16;
            match entry {
                MenuEntry::Separator => {
                    let rule = "─".repeat(inner.width as usize);
                    buf.set_string(inner.x, y, &rule, base.fg(theme.palette.border));
                }
                MenuEntry::Item(item) => {
                    let highlighted = row == self.highlighted;
                    let style = if highlighted { theme.selection_style() } else { base };
                    let accent = if highlighted { style } else { theme.accent_style() };
                    buf.fill(Rect::new(inner.x, y, inner.width, 1), &Cell::blank(style));
                    Self::render_label(
                        buf,
                        inner.x + 1,
                        y,
                        &item.label,
                        item.mnemonic,
                        (style, accent),
                        inner.width.saturating_sub(2) as usize,
                    );
                }
            }
        }
    }
}

impl<A: Clone> MenuBar<A> {
    fn activate(&mut self, entry: usize) -> MenuOutcome<A> {
        let action = self
            .open
            .and_then(|menu| self.menus[menu].entries.get(entry))
            .and_then(|e| e.item())
            .map(|item| item.action.clone());
        self.close();
        match action {
            Some(action) => MenuOutcome::Activate(action),
            None => MenuOutcome::Consumed,
        }
    }

    /// Keys for an open menu: Up/Down move between items, Left/Right
    /// switch menus, Enter or an item mnemonic activates and Esc closes.
    /// Every other key is swallowed while a menu is open.
    pub fn handle_key(&mut self, key: &KeyEvent) -> MenuOutcome<A> {
        let Some(index) = self.open else {
            return MenuOutcome::Ignored;
        };
        let count = self.menus.len();

        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Up | KeyCode::Down => {
                let forward = key.code == KeyCode::Down;
                if let Some(next) = self.menus[index].step_item(self.highlighted, forward) {
                    self.highlighted = next;
                }
            }
            KeyCode::Left => self.open((index + count - 1) % count),
            KeyCode::Right => self.open((index + 1) % count),
            KeyCode::Enter => return self.activate(self.highlighted),
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL) => {
                let hit = self.menus[index]
                    .entries
                    .iter()
                    .position(|e| e.item().is_some_and(|item| fold(item.mnemonic) == fold(c)));
                if let Some(entry) = hit {
                    return self.activate(entry);
                }
            }
            _ => {}
        }
        MenuOutcome::Consumed
    }
}

impl<A> Widget for MenuBar<A> {
    /// Draws the strip into `area` and, when open, the dropdown below it
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let base = theme.surface_style();
        buf.fill(Rect::new(area.x, area.y, area.width, 1), &Cell::blank(base));

        for (i, (menu, (x, width))) in self.menus.iter().zip(self.label_spans()).enumerate() {
            if x >= area.right() {
                break;
            }
            let open = self.open == Some(i);
            let style = if open { theme.selection_style() } else { base };
            let accent = if open { style } else { theme.accent_style() };
            let room = (area.right() - x) as usize;
            buf.fill(Rect::new(x, area.y, width.min(room as u16), 1), &Cell::blank(style));
            Self::render_label(buf, x + 1, area.y, &menu.label, menu.mnemonic, (style, accent), room.saturating_sub(1));
        }

        self.render_dropdown(buf, theme);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}
