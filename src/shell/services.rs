use std::rc::Rc;

use chrono::NaiveDate;
use supertui_tui::app::GlobalKeys;
use supertui_tui::widget::{Footer, Header, MenuBar, Shortcut};
use supertui_tui::ScreenChrome;

use super::{standard_menu_bar, ShellAction};
use crate::data::TaskSource;

const ICON: &str = "▤";
const APP_NAME: &str = "SuperTUI";

/// Collaborators shared by every screen
#[derive(Clone)]
pub struct ShellServices {
    pub source: Rc<dyn TaskSource>,
    /// Reference date for due-date math, captured once at startup
    pub today: NaiveDate,
    pub keys: GlobalKeys,
    menu_bar: MenuBar<ShellAction>,
}

impl ShellServices {
    pub fn new(source: Rc<dyn TaskSource>, today: NaiveDate, keys: GlobalKeys) -> anyhow::Result<Self> {
        Ok(Self {
            source,
            today,
            keys,
            menu_bar: standard_menu_bar()?,
        })
    }

    /// Chrome with the standard menu bar, a breadcrumb trail under the app
    /// name and the given footer hints
    pub fn chrome(&self, crumbs: &[&str], shortcuts: Vec<Shortcut>) -> ScreenChrome<ShellAction> {
        let mut header = Header::new(ICON).breadcrumbs(std::iter::once(APP_NAME).chain(crumbs.iter().copied()));
        header.set_context(self.today.format("%a %d %b %Y").to_string());
        let mut chrome = ScreenChrome::new(header, Footer::new(shortcuts), self.menu_bar.clone());
        chrome.status.set_left(self.source.describe());
        chrome
    }
}
