//! Main TUI runner - entry point and event loop

use espremote_app::Engine;
use espremote_core::prelude::*;
use espremote_device::DeviceClient;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run<C>(mut engine: Engine<C>) -> Result<()>
where
    C: DeviceClient + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: DeviceClient + Sync + 'static,
{
    while !engine.should_quit() {
        // Request outcomes and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested");
    Ok(())
}
