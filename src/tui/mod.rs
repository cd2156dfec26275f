pub mod app;
pub mod event;
pub mod layout;
pub mod tags;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::{AppContext, Result};
use crate::client::resolve_image_url;
use crate::domain::Severity;

use self::app::{Command, TuiApp};
use self::event::{AppEvent, EventHandler, FetchEvent};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let config = ctx.config.clone();
    let mut tui_app = TuiApp::new(config.notifications.display());
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchEvent>();

    loop {
        let now = Instant::now();

        // Completed requests first, so a frame never shows a stale spinner.
        while let Ok(fetch) = rx.try_recv() {
            tui_app.apply_fetch(fetch, now);
        }
        tui_app.tick(now);

        let colors = config.palette(tui_app.controller.is_dark_theme());
        terminal.draw(|frame| layout::render(frame, &mut tui_app, colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let command = tui_app.handle_key(
                    key,
                    &config.keybindings,
                    &config.quick_ingredients,
                    Instant::now(),
                );
                dispatch(command, &mut tui_app, &ctx, &tx);
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Run the side effect of a key press. Requests go to the runtime and
/// report back through `tx`; nothing here waits on the network.
fn dispatch(
    command: Command,
    tui_app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<FetchEvent>,
) {
    match command {
        Command::None => {}
        Command::Search(ticket) => {
            let backend = ctx.backend.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = backend.search(&ticket.ingredients).await;
                if tx
                    .send(FetchEvent::Search {
                        generation: ticket.generation,
                        outcome,
                    })
                    .is_err()
                {
                    debug!("UI closed before search {} completed", ticket.generation);
                }
            });
        }
        Command::Detail(ticket) => {
            let backend = ctx.backend.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = backend.detail(&ticket.key).await;
                if tx
                    .send(FetchEvent::Detail {
                        generation: ticket.generation,
                        outcome,
                    })
                    .is_err()
                {
                    debug!("UI closed before detail {} completed", ticket.generation);
                }
            });
        }
        Command::OpenImage(image) => open_image(
            tui_app,
            &ctx.config.server.base_url,
            &image,
            |url| open::that(url),
            Instant::now(),
        ),
    }
}

/// Resolve `image` against the server and hand it to `opener`. Failures
/// end up as an error notification.
fn open_image<F>(tui_app: &mut TuiApp, base: &str, image: &str, opener: F, now: Instant)
where
    F: FnOnce(&str) -> io::Result<()>,
{
    let opened =
        resolve_image_url(base, image).and_then(|url| opener(url.as_str()).map_err(Into::into));
    if let Err(e) = opened {
        warn!("Failed to open image {}: {}", image, e);
        tui_app.controller.notify(
            format!("Failed to open image: {}", e),
            Severity::Error,
            now,
        );
    }
}
