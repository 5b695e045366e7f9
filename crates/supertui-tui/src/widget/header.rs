//! Screen header: icon, breadcrumb trail and a right-aligned context string

use super::Widget;
use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::style::text;
use crate::theme::Theme;

const CRUMB_SEPARATOR: &str = " › ";

#[derive(Debug, Clone, Default)]
pub struct Header {
    bounds: Rect,
    icon: String,
    breadcrumbs: Vec<String>,
    context: String,
}

impl Header {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            ..Self::default()
        }
    }

    pub fn breadcrumbs<I, S>(mut self, crumbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_breadcrumbs(crumbs);
        self
    }

    pub fn set_breadcrumbs<I, S>(&mut self, crumbs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breadcrumbs = crumbs.into_iter().map(Into::into).collect();
    }

    pub fn crumbs(&self) -> &[String] {
        &self.breadcrumbs
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}

impl Widget for Header {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        buf.fill(area, &Cell::blank(theme.base_style()));

        let limit = area.right();
        let mut x = area.x + 1;
        if !self.icon.is_empty() {
            x += buf.set_stringn(x, area.y, &self.icon, (limit - x.min(limit)) as usize, theme.title_style());
            x = x.saturating_add(1);
        }

        let last = self.breadcrumbs.len().saturating_sub(1);
        for (i, crumb) in self.breadcrumbs.iter().enumerate() {
            if x >= limit {
                break;
            }
            if i > 0 {
                x += buf.set_stringn(x, area.y, CRUMB_SEPARATOR, (limit - x) as usize, theme.muted_style());
            }
            let style = if i == last { theme.title_style() } else { theme.muted_style() };
            x += buf.set_stringn(x, area.y, crumb, (limit.saturating_sub(x)) as usize, style);
        }

        // Context yields to the breadcrumbs when space runs out
        let room = limit.saturating_sub(x.saturating_add(2)) as usize;
        if !self.context.is_empty() && room > 0 {
            let context = text::truncate(&self.context, room.min(area.width as usize));
            let cx = limit - 1 - text::width(&context) as u16;
            buf.set_string(cx, area.y, &context, theme.muted_style());
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(header: &Header, width: u16) -> String {
        let mut buf = Buffer::new(Rect::sized(width, 1));
        header.render(Rect::sized(width, 1), &mut buf, &Theme::default());
        buf.row_text(0)
    }

    #[test]
    fn crumbs_left_context_right() {
        let mut header = Header::new("#").breadcrumbs(["Home", "Tasks"]);
        header.set_context("3 open");
        assert_eq!(row(&header, 30), " # Home › Tasks        3 open ");
    }

    #[test]
    fn context_is_dropped_when_crumbs_fill_the_row() {
        let mut header = Header::new("").breadcrumbs(["Dashboard"]);
        header.set_context("context");
        assert_eq!(row(&header, 11), " Dashboard ");
    }

    #[test]
    fn last_crumb_is_emphasized() {
        let theme = Theme::default();
        let header = Header::new("").breadcrumbs(["A", "B"]);
        let mut buf = Buffer::new(Rect::sized(10, 1));
        header.render(Rect::sized(10, 1), &mut buf, &theme);
        assert_eq!(buf.get(1, 0).unwrap().fg, theme.palette.text_muted);
        assert_eq!(buf.get(5, 0).unwrap().fg, theme.primary);
    }
}
