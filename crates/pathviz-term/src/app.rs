//! The interactive session: terminal setup, the event loop, and animated
//! search runs.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{self, ClearType},
};

use pathviz_core::Grid;
use pathviz_search::{Cancel, Editor, Outcome, Placed, Search, reachable_count};

use crate::config::Config;
use crate::input::{Command, is_abort, to_command};
use crate::render::{CELL_WIDTH, Renderer};

const HELP: &str = "click: start/end/wall  right-click: erase  space: run  c: clear  q: quit";

// ---------------------------------------------------------------------------
// Terminal guard
// ---------------------------------------------------------------------------

/// Raw mode, alternate screen and (optionally) mouse capture, undone on drop.
struct Terminal {
    mouse: bool,
}

impl Terminal {
    fn enter(mouse: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if mouse {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        Ok(Self { mouse })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Errors that end a session.
#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Grid(pathviz_core::GridError),
    /// The grid does not fit the terminal.
    TooSmall { need: (u16, u16), have: (u16, u16) },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "terminal: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::TooSmall { need, have } => write!(
                f,
                "terminal is {}x{}, the grid needs {}x{}; try a smaller --size",
                have.0, have.1, need.0, need.1
            ),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::TooSmall { .. } => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<pathviz_core::GridError> for AppError {
    fn from(e: pathviz_core::GridError) -> Self {
        Self::Grid(e)
    }
}

/// Terminal columns and rows needed for a grid of side `size`, status line
/// included.
pub fn screen_size(size: usize) -> Option<(u16, u16)> {
    let cols = u16::try_from(size).ok()?.checked_mul(CELL_WIDTH)?;
    let rows = u16::try_from(size).ok()?.checked_add(2)?;
    Some((cols.max(HELP.len() as u16), rows))
}

/// One line describing a finished run.
pub fn describe(outcome: Option<&Outcome>, search: &Search, grid: &Grid) -> String {
    let stats = search.stats();
    match outcome {
        None => "place a start and an end first".to_string(),
        Some(Outcome::Success { path }) => format!(
            "path found: {} steps, {} cells expanded",
            path.len().saturating_sub(1),
            stats.expanded
        ),
        Some(Outcome::Exhausted) => {
            format!("no path: all {} reachable cells explored", stats.expanded)
        }
        Some(Outcome::Cancelled) => format!(
            "stopped after {} expansions ({} cells open)",
            stats.expanded,
            grid.count(pathviz_core::Role::Open)
        ),
    }
}

/// A visualizer session.
pub struct App<W: Write> {
    config: Config,
    editor: Editor,
    search: Search,
    cancel: Cancel,
    renderer: Renderer<W>,
    status: String,
}

impl<W: Write> App<W> {
    /// Build a session drawing to `out`.
    pub fn new(config: Config, out: W) -> Result<Self, AppError> {
        let editor = Editor::new(config.size)?;
        let (cols, rows) = screen_size(config.size).ok_or(AppError::TooSmall {
            need: (u16::MAX, u16::MAX),
            have: (0, 0),
        })?;
        let cancel = Cancel::new();
        Ok(Self {
            search: Search::new().with_cancel(cancel.clone()),
            cancel,
            editor,
            renderer: Renderer::new(out, cols, rows),
            status: HELP.to_string(),
            config,
        })
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Redraw the grid and status line.
    pub fn draw(&mut self) -> io::Result<()> {
        self.renderer.present(self.editor.grid(), &self.status)
    }

    /// Apply one command. Returns `false` when the session should end.
    ///
    /// `poll_abort` is consulted between animation frames of a run; if it
    /// returns `true` the run is cancelled.
    pub fn handle<P>(&mut self, cmd: Command, mut poll_abort: P) -> Result<bool, AppError>
    where
        P: FnMut() -> io::Result<bool>,
    {
        match cmd {
            Command::Quit => return Ok(false),
            Command::Place(p) => match self.editor.place(p) {
                Ok(Placed::Ignored) => {}
                Ok(placed) => log::debug!("placed {placed:?} at {p}"),
                Err(e) => log::warn!("{e}"),
            },
            Command::Erase(p) => {
                if let Err(e) = self.editor.erase(p) {
                    log::warn!("{e}");
                }
            }
            Command::Rebuild => {
                self.editor.rebuild();
                self.status = HELP.to_string();
            }
            Command::Redraw => self.renderer.invalidate(),
            Command::Run => {
                self.cancel.reset();
                self.status = "searching...".to_string();
                let delay = self.config.delay;
                let renderer = &mut self.renderer;
                let status = &self.status;
                let cancel = &self.cancel;
                let mut failure: Option<io::Error> = None;

                let outcome = self.editor.run(&mut self.search, |grid| {
                    if failure.is_some() {
                        return;
                    }
                    let frame = renderer.present(grid, status).and_then(|()| {
                        if !delay.is_zero() {
                            std::thread::sleep(delay);
                        }
                        poll_abort()
                    });
                    match frame {
                        Ok(true) => cancel.cancel(),
                        Ok(false) => {}
                        Err(e) => {
                            cancel.cancel();
                            failure = Some(e);
                        }
                    }
                });

                if let Some(e) = failure {
                    return Err(e.into());
                }
                self.status = describe(outcome.as_ref(), &self.search, self.editor.grid());
                if let (Some(Outcome::Exhausted), Some(start)) = (&outcome, self.editor.start()) {
                    let reachable = reachable_count(self.editor.grid(), start)?;
                    log::debug!("end unreachable; {reachable} cells reachable from start");
                }
            }
        }
        self.draw()?;
        Ok(true)
    }
}

/// Whether an abort key is waiting in the terminal's input queue. Other
/// events are dropped.
fn abort_pending() -> io::Result<bool> {
    while event::poll(Duration::ZERO)? {
        if is_abort(&event::read()?) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run an interactive session on the current terminal.
pub fn run(config: Config) -> Result<(), AppError> {
    let need = screen_size(config.size).ok_or(AppError::TooSmall {
        need: (u16::MAX, u16::MAX),
        have: (0, 0),
    })?;
    let have = terminal::size()?;
    if need.0 > have.0 || need.1 > have.1 {
        return Err(AppError::TooSmall { need, have });
    }

    let _term = Terminal::enter(config.mouse)?;
    let mut app = App::new(config, io::stdout())?;
    app.draw()?;

    loop {
        let ev: Event = event::read()?;
        let Some(cmd) = to_command(&ev, app.editor().grid().size()) else {
            continue;
        };
        if !app.handle(cmd, abort_pending)? {
            break;
        }
    }
    Ok(())
}
