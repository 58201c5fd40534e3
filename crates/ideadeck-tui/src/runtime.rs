use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedReceiver;

use ideadeck_core::events::ApiEvent;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui, View};

pub(crate) async fn run_app(
    terminal: &mut Tui,
    app: &mut App,
    mut api_rx: UnboundedReceiver<ApiEvent>,
) -> Result<()> {
    // Async stream of terminal events plus a tick for notification expiry
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            // Terminal UI events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Char('c')
                                && key.modifiers.contains(KeyModifiers::CONTROL)
                            {
                                if app.pending_quit {
                                    app.quit();
                                } else {
                                    // First Ctrl+C arms the quit warning in the footer
                                    app.pending_quit = true;
                                }
                            } else {
                                app.pending_quit = false;
                                handle_key(app, key);
                            }
                        }
                        Event::Mouse(mouse) if app.view == View::Dashboard => {
                            match mouse.kind {
                                MouseEventKind::ScrollDown => app.select_next(),
                                MouseEventKind::ScrollUp => app.select_prev(),
                                _ => {}
                            }
                        }
                        _ => {}
                    }
                }
            }

            // Completions from spawned remote operations
            Some(event) = api_rx.recv() => {
                app.handle_api_event(event);
            }

            // Tick for notification auto-dismiss
            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }
    Ok(())
}
