//! Screen editor — the interactive loop around an editor session.

use crate::highlight::CHighlighter;
use crate::keys::{KeyAction, map_key};
use crate::render::Screen;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use mintmind_core::EditorSession;
use std::io;
use tracing::debug;

/// Why the editor loop handed control back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorExit {
    /// User pressed Esc or Ctrl+C.
    Quit,
    /// User asked to save the document.
    Save,
    /// User asked to save, compile and run the document.
    Run,
}

/// RAII guard that holds raw mode and the alternate screen, restoring both
/// on drop.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Full-screen editor: owns the session and the screen it is painted on.
pub struct ScreenEditor {
    session: EditorSession,
    screen: Screen,
}

impl ScreenEditor {
    /// Create an editor sized to the current terminal.
    pub fn new(session: EditorSession, highlighter: Option<CHighlighter>) -> Self {
        let (width, height) = terminal::size().unwrap_or((120, 30));
        Self {
            session,
            screen: Screen::new(width, height, highlighter),
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Show `message` on the next paint; cleared by the next key.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.screen.set_status(message);
    }

    /// Run the editor until the user saves, runs or quits.
    ///
    /// The blocking terminal loop runs inside `spawn_blocking`; the editor is
    /// moved in and handed back with the exit reason.
    pub async fn run(self) -> io::Result<(Self, EditorExit)> {
        tokio::task::spawn_blocking(move || {
            let mut editor = self;
            let exit = editor.run_blocking()?;
            Ok::<_, io::Error>((editor, exit))
        })
        .await
        .map_err(io::Error::other)?
    }

    /// Synchronous editor loop. Raw mode is always restored when this
    /// returns (via RAII guard).
    pub fn run_blocking(&mut self) -> io::Result<EditorExit> {
        let _guard = RawModeGuard::enable()?;
        let mut stdout = io::stdout();

        loop {
            self.screen.draw(&mut stdout, &self.session)?;

            match event::read()? {
                Event::Key(key_event) => {
                    // crossterm sends Release/Repeat events on some platforms
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let action = map_key(key_event);
                    if action != KeyAction::Noop {
                        self.screen.clear_status();
                    }
                    match action {
                        KeyAction::Edit(edit) => self.session.handle(edit),
                        KeyAction::Save => return Ok(EditorExit::Save),
                        KeyAction::Run => return Ok(EditorExit::Run),
                        KeyAction::Quit => {
                            debug!("editor closed");
                            return Ok(EditorExit::Quit);
                        }
                        KeyAction::Help => {
                            self.screen.draw_help(&mut stdout)?;
                            wait_for_key()?;
                        }
                        KeyAction::Noop => {}
                    }
                }
                Event::Resize(width, height) => self.screen.set_size(width, height),
                _ => {}
            }
        }
    }
}

/// Block until any key is pressed.
fn wait_for_key() -> io::Result<()> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
