use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::DefaultTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set when the terminal accepted keyboard enhancement flags and they must be popped
static KEYBOARD_ENHANCED: AtomicBool = AtomicBool::new(false);

/// Initialize the terminal: alternate screen, raw mode, mouse capture and,
/// where supported, key event types so auto-repeat can be told apart from presses
pub fn init_terminal() -> color_eyre::Result<DefaultTerminal> {
    install_panic_hook();

    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    or_restore(enter_raw_mode, restore_terminal)
}

fn enter_raw_mode() -> color_eyre::Result<DefaultTerminal> {
    enable_raw_mode()?;

    if supports_keyboard_enhancement().unwrap_or(false) {
        execute!(
            std::io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        KEYBOARD_ENHANCED.store(true, Ordering::SeqCst);
        log::debug!("Keyboard enhancement enabled, key repeats will be reported");
    }

    let terminal =
        ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(std::io::stdout()))?;

    Ok(terminal)
}

/// Run a setup step; if it fails, undo what was already set up before
/// returning the original error
fn or_restore<T>(
    setup: impl FnOnce() -> color_eyre::Result<T>,
    restore: impl FnOnce() -> color_eyre::Result<()>,
) -> color_eyre::Result<T> {
    setup().inspect_err(|e| {
        log::error!("Terminal setup failed: {}", e);
        if let Err(restore_err) = restore() {
            log::error!("Failed to restore terminal: {}", restore_err);
        }
    })
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> color_eyre::Result<()> {
    if KEYBOARD_ENHANCED.swap(false, Ordering::SeqCst) {
        execute!(std::io::stdout(), PopKeyboardEnhancementFlags)?;
    }
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Give the screen back before a panic message is printed
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: color_eyre::Result<()> = or_restore(
            || Err(color_eyre::eyre::eyre!("raw mode unavailable")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap_err().to_string(), "raw mode unavailable");
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_skips_restore() {
        let restored = Cell::new(false);
        let result = or_restore(
            || Ok(5),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap(), 5);
        assert!(!restored.get());
    }
}
