use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::DefaultTerminal;

use super::App;
use crate::app::event_handlers::EventHandlers;

/// Trait for main application loop
pub trait AppMainLoop {
    async fn run(self, terminal: DefaultTerminal) -> color_eyre::Result<()>
    where
        Self: Sized;
}

/// Process termination requests that should end the loop cleanly
struct ShutdownSignals {
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl ShutdownSignals {
    fn new() -> std::io::Result<Self> {
        Ok(Self {
            #[cfg(unix)]
            terminate: tokio::signal::unix::signal(
                tokio::signal::unix::SignalKind::terminate(),
            )?,
        })
    }

    /// Resolves with the name of the received signal
    async fn recv(&mut self) -> &'static str {
        #[cfg(unix)]
        return tokio::select! {
            _ = tokio::signal::ctrl_c() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
        };

        #[cfg(not(unix))]
        let _ = tokio::signal::ctrl_c().await;
        #[cfg(not(unix))]
        return "Ctrl-C";
    }
}

impl AppMainLoop for App {
    /// Run the application's main loop: draw, then wait for exactly one
    /// event and apply it before drawing again.
    async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        let mut events = EventStream::new();
        let mut signals = ShutdownSignals::new()?;

        log::info!("Entering event-driven main loop");

        while self.running {
            terminal.draw(|frame| {
                let view = self.player.view();
                let warnings = self
                    .show_config_warnings_popup
                    .then_some(self.config_warnings.as_slice());
                self.hit_map = crate::ui::render(frame, &view, &self.config, warnings);
            })?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => self.handle_crossterm_event(event),
                    Some(Err(e)) => {
                        log::error!("Failed to read terminal event: {}", e);
                        return Err(e.into());
                    }
                    None => {
                        log::info!("Terminal event stream closed");
                        self.quit();
                    }
                },
                signal = signals.recv() => {
                    log::info!("Received {}, shutting down gracefully", signal);
                    self.quit();
                }
            }
        }

        log::info!("Exiting main loop");
        Ok(())
    }
}
