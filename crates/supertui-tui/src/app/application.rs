//! The application object and its input loop

use std::collections::VecDeque;
use std::io::{self, Write};

use anyhow::Context;
use tracing::{debug, info, warn};

use super::{ActionContext, ActionHandler, GlobalKeys, ScreenStack};
use crate::error::{Result, TuiError};
use crate::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crate::geometry::Size;
use crate::layout::LayoutManager;
use crate::render::{FlushStats, FrameRenderer};
use crate::screen::{Request, Screen, ScreenContext, ScreenState};
use crate::terminal::TerminalIo;
use crate::theme::ThemeManager;
use crate::widget::{MenuOutcome, StatusLevel};

/// Deepest stack allowed unless configured otherwise
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Builds the screen pushed by the help key
pub type HelpFactory<A> = Box<dyn Fn() -> Box<dyn Screen<A>>>;

/// Idle until the first push, running while screens are stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

/// Owns the screen stack, the active theme, the renderer and the action
/// handler, and routes input between them.
///
/// Keys go, in order, to an open menu, the active screen, the menu bar
/// activation keys and finally the global keys. Stack changes requested
/// from hooks and handlers are queued and applied once the current hook
/// has returned, so a screen is never replaced while one of its own methods
/// is running.
pub struct Application<A> {
    stack: ScreenStack<A>,
    theme: ThemeManager,
    layout: LayoutManager,
    renderer: FrameRenderer,
    keys: GlobalKeys,
    handler: Box<dyn ActionHandler<A>>,
    help: Option<HelpFactory<A>>,
    pending: VecDeque<Request<A>>,
    max_depth: usize,
    state: RunState,
}

impl<A: Clone + 'static> Application<A> {
    pub fn new(handler: impl ActionHandler<A> + 'static) -> Self {
        Self {
            stack: ScreenStack::default(),
            theme: ThemeManager::default(),
            layout: LayoutManager::default(),
            renderer: FrameRenderer::default(),
            keys: GlobalKeys::default(),
            handler: Box::new(handler),
            help: None,
            pending: VecDeque::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            state: RunState::Idle,
        }
    }

    pub fn with_theme(mut self, theme: ThemeManager) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_layout(mut self, layout: LayoutManager) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_global_keys(mut self, keys: GlobalKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_help(mut self, factory: impl Fn() -> Box<dyn Screen<A>> + 'static) -> Self {
        self.help = Some(Box::new(factory));
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running && !self.stack.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn stack(&self) -> &ScreenStack<A> {
        &self.stack
    }

    pub fn active_screen(&self) -> Option<&(dyn Screen<A> + 'static)> {
        self.stack.top()
    }

    pub fn active_screen_mut(&mut self) -> Option<&mut (dyn Screen<A> + 'static)> {
        self.stack.top_mut()
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme
    }

    pub fn layout(&self) -> &LayoutManager {
        &self.layout
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    pub fn size(&self) -> Size {
        self.renderer.size()
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.renderer.resize(width, height)
    }

    /// Load `screen`, suspend the current top and make `screen` active.
    ///
    /// A failing `load` is reported on the new screen's status bar; the
    /// screen is still pushed.
    pub fn push_screen(&mut self, screen: Box<dyn Screen<A>>) -> Result<()> {
        self.push_inner(screen)?;
        self.apply_requests();
        Ok(())
    }

    /// Destroy the top screen and resume the one below it.
    ///
    /// Popping the last screen stops the application.
    pub fn pop_screen(&mut self) -> Result<()> {
        self.pop_inner()?;
        self.apply_requests();
        Ok(())
    }

    /// Destroy every screen, top first, and stop
    pub fn quit(&mut self) {
        while let Some(mut screen) = self.stack.pop() {
            transition(screen.as_mut(), ScreenState::Destroyed);
            screen.on_destroy();
        }
        info!("application quit");
        self.stop();
    }

    /// Run `action` through the handler, then apply whatever it queued
    pub fn dispatch(&mut self, action: A) {
        self.run_action(&action);
        self.apply_requests();
    }

    /// Route one key press
    pub fn dispatch_key(&mut self, key: &KeyEvent) {
        let Some(screen) = self.stack.top_mut() else {
            return;
        };
        // a flash lives until the next key
        screen.chrome_mut().status.clear_flash();

        match screen.chrome_mut().menu_bar.handle_key(key) {
            MenuOutcome::Activate(action) => {
                self.absorb_menu_damage();
                debug!(key = ?key.code, "menu item activated");
                self.dispatch(action);
                return;
            }
            MenuOutcome::Consumed => {
                self.absorb_menu_damage();
                return;
            }
            MenuOutcome::Ignored => {}
        }

        if self.screen_input(key) {
            self.apply_requests();
            return;
        }

        if self.open_menu(key) {
            return;
        }

        if self.keys.is_quit(key) {
            self.quit();
        } else if self.keys.is_help(key) {
            self.show_help();
        } else if self.keys.is_back(key) && self.stack.len() > 1 {
            if let Err(err) = self.pop_screen() {
                debug!(error = %err, "back key ignored");
            }
        }
    }

    /// Lay out and draw the active screen into the next frame
    pub fn render(&mut self) {
        self.absorb_menu_damage();
        let Size { width, height } = self.renderer.size();
        let theme = self.theme.theme();
        self.renderer.clear(theme);
        if let Some(screen) = self.stack.top_mut() {
            screen.chrome_mut().layout(&self.layout, width, height);
            screen.apply_content_layout(&self.layout, width, height);
            screen.render(self.renderer.next_mut(), theme);
        }
    }

    /// Render, then write the changed cells to `out`
    pub fn draw<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<FlushStats> {
        self.render();
        self.renderer.flush(out)
    }

    /// Draw, read an event, dispatch it and redraw until no screen is left.
    ///
    /// The cursor is hidden for the duration and shown again on every exit
    /// path, including errors.
    pub fn run<T: TerminalIo + ?Sized>(&mut self, terminal: &mut T) -> anyhow::Result<()> {
        terminal.set_cursor_visible(false).context("failed to hide cursor")?;
        let result = self.event_loop(terminal);
        let restored = terminal.set_cursor_visible(true).context("failed to show cursor");
        result.and(restored)
    }

    fn event_loop<T: TerminalIo + ?Sized>(&mut self, terminal: &mut T) -> anyhow::Result<()> {
        if !self.is_running() {
            debug!(state = ?self.state, "nothing to run");
            return Ok(());
        }
        info!(depth = self.stack.len(), "application loop started");

        self.sync_size(terminal);
        self.draw(terminal.writer()).context("failed to draw frame")?;

        while self.is_running() {
            let event = terminal.read_event().context("failed to read terminal event")?;
            match event {
                Event::Key(key) => self.dispatch_key(&key),
                Event::Resize { width, height } => debug!(width, height, "resize event"),
            }
            if !self.is_running() {
                break;
            }
            self.sync_size(terminal);
            self.draw(terminal.writer()).context("failed to draw frame")?;
        }

        info!("application loop finished");
        Ok(())
    }

    /// Adopt the terminal's size; keep the last one if it is unknown or zero
    fn sync_size<T: TerminalIo + ?Sized>(&mut self, terminal: &T) {
        let current = self.renderer.size();
        match terminal.size() {
            Ok(size) if size == current => {}
            Ok(size) => match self.renderer.resize(size.width, size.height) {
                Ok(()) => debug!(%size, "terminal resized"),
                Err(err) => warn!(error = %err, size = %current, "ignoring terminal size"),
            },
            Err(err) => warn!(error = %err, size = %current, "terminal size unavailable; keeping last size"),
        }
    }

    fn push_inner(&mut self, mut screen: Box<dyn Screen<A>>) -> Result<()> {
        if self.stack.len() >= self.max_depth {
            warn!(title = screen.title(), max = self.max_depth, "screen stack full");
            return Err(TuiError::StackOverflow(self.max_depth));
        }

        transition(screen.as_mut(), ScreenState::Created);
        let size = self.renderer.size();
        let mut ctx = ScreenContext::new(self.theme.theme(), size, &mut self.pending);
        if let Err(err) = screen.load(&mut ctx) {
            warn!(title = screen.title(), error = %format!("{err:#}"), "screen failed to load");
            let message = format!("Failed to load {}: {err}", screen.title());
            screen.chrome_mut().status.flash(message, StatusLevel::Error);
        }
        transition(screen.as_mut(), ScreenState::Loaded);

        if let Some(previous) = self.stack.top_mut() {
            transition(previous, ScreenState::Suspended);
            previous.on_suspend();
        }

        info!(title = screen.title(), depth = self.stack.len() + 1, "screen pushed");
        transition(screen.as_mut(), ScreenState::Active);
        self.stack.push(screen);
        self.state = RunState::Running;
        Ok(())
    }

    fn pop_inner(&mut self) -> Result<()> {
        let mut screen = self.stack.pop().ok_or(TuiError::StackEmpty)?;
        transition(screen.as_mut(), ScreenState::Destroyed);
        screen.on_destroy();
        info!(title = screen.title(), depth = self.stack.len(), "screen popped");
        drop(screen);

        let size = self.renderer.size();
        match self.stack.top_mut() {
            Some(top) => {
                let mut ctx = ScreenContext::new(self.theme.theme(), size, &mut self.pending);
                transition(top, ScreenState::Active);
                top.on_resume(&mut ctx);
            }
            None => self.stop(),
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.state = RunState::Stopped;
        self.pending.clear();
    }

    /// Apply queued requests in order; a request may queue more
    fn apply_requests(&mut self) {
        while let Some(request) = self.pending.pop_front() {
            match request {
                Request::Push(screen) => {
                    if let Err(err) = self.push_inner(screen) {
                        self.flash_error(err.to_string());
                    }
                }
                Request::Pop => {
                    if let Err(err) = self.pop_inner() {
                        debug!(error = %err, "pop request ignored");
                    }
                }
                Request::Quit => self.quit(),
                Request::Action(action) => self.run_action(&action),
            }
        }
    }

    fn run_action(&mut self, action: &A) {
        let size = self.renderer.size();
        let mut ctx = ActionContext::new(&mut self.stack, &mut self.theme, size, &mut self.pending);
        if let Err(err) = self.handler.handle(action, &mut ctx) {
            warn!(error = %format!("{err:#}"), "action failed");
            self.flash_error(format!("{err:#}"));
        }
    }

    fn screen_input(&mut self, key: &KeyEvent) -> bool {
        let size = self.renderer.size();
        let Some(screen) = self.stack.top_mut() else {
            return false;
        };
        let mut ctx = ScreenContext::new(self.theme.theme(), size, &mut self.pending);
        screen.handle_input(key, &mut ctx)
    }

    /// F10 opens the first menu, Alt plus a mnemonic opens that menu
    fn open_menu(&mut self, key: &KeyEvent) -> bool {
        let is_menu_key = self.keys.is_menu(key);
        let Some(screen) = self.stack.top_mut() else {
            return false;
        };
        let menu_bar = &mut screen.chrome_mut().menu_bar;
        if menu_bar.menus().is_empty() {
            return false;
        }
        if is_menu_key {
            menu_bar.open(0);
            return true;
        }
        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => menu_bar.open_by_mnemonic(c),
            _ => false,
        }
    }

    fn show_help(&mut self) {
        let Some(screen) = self.help.as_ref().map(|factory| factory()) else {
            return;
        };
        if self.stack.top().map(|top| top.title()) == Some(screen.title()) {
            return;
        }
        if let Err(err) = self.push_screen(screen) {
            self.flash_error(err.to_string());
        }
    }

    fn flash_error(&mut self, message: String) {
        if let Some(screen) = self.stack.top_mut() {
            screen.chrome_mut().status.flash(message, StatusLevel::Error);
        }
    }

    fn absorb_menu_damage(&mut self) {
        if let Some(screen) = self.stack.top_mut() {
            for rect in screen.chrome_mut().menu_bar.take_damage() {
                self.renderer.invalidate(rect);
            }
        }
    }
}

fn transition<A>(screen: &mut dyn Screen<A>, state: ScreenState) {
    debug!(title = screen.title(), from = ?screen.state(), to = ?state, "screen state");
    screen.chrome_mut().set_state(state);
}
