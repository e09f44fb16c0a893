//! Terminal setup and RAII restoration for the chores TUI.
//!
//! [`Tui`] wraps a ratatui terminal and owns the raw-mode/alternate-screen
//! lifecycle: both are entered on creation and restored on drop, on an
//! explicit [`Tui::restore`] call, or by the hook installed with
//! [`install_panic_hook`] if a panic fires before the drop handler can run.
//! The [`Drop`] implementation ignores restoration errors to avoid
//! panicking during unwinding.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Installs a panic hook that restores the terminal before the panic
/// message is printed.
///
/// Call this once at startup, before creating any [`Tui`]. The hook leaves
/// the alternate screen, shows the cursor, and disables raw mode, then
/// delegates to the previous panic handler so the message lands in the
/// normal terminal buffer. Restoration errors are ignored; the terminal may
/// already be in a bad state when a panic occurs.
pub fn install_panic_hook() {
    let previous_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        previous_hook(panic_info);
    }));
}

/// A ratatui terminal with RAII-based cleanup.
///
/// Raw mode and the alternate screen are entered in [`Tui::new`] and undone
/// when the value is dropped, so the caller's shell is restored even on an
/// early return.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Set once restoration has run, so drop skips the double cleanup.
    restored: bool,
}

impl Tui {
    /// Initializes the terminal: raw mode, alternate screen, hidden cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if any initialization step fails; partially applied
    /// state is rolled back before returning.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e);
            }
        };

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Draws a frame using the provided closure.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Explicitly restores the terminal to its original state.
    ///
    /// After this the [`Tui`] should no longer be used for drawing; the
    /// drop handler will skip cleanup.
    ///
    /// # Errors
    ///
    /// Unlike the drop path, restoration errors are propagated.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        execute!(io::stdout(), Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Errors are ignored: we may be unwinding, and a second panic
        // would abort the process.
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
