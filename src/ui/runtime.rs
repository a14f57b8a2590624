use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::{Duration, Instant};

pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(config, cols, rows, Instant::now());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        // Sleep no longer than the nearest timer deadline, so the resize
        // debounce and auto-advance fire close to on time.
        let now = Instant::now();
        let timeout = app
            .next_deadline()
            .map(|at| at.saturating_duration_since(now))
            .unwrap_or(tick_rate)
            .min(tick_rate);

        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key, Instant::now()),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse, Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows, Instant::now()),
            Ok(AppEvent::Tick) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        app.fire_due_timers(Instant::now());
    }

    drop(guard);
    Ok(())
}
