use crate::carousel::CarouselIntent;
use crate::ui::app::App;
use crate::ui::layout::{
    arrow_rects, dot_at, hover_region, layout_regions, rect_contains, track_interior,
};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Left => app.dispatch(CarouselIntent::Prev, now),
        KeyCode::Right => app.dispatch(CarouselIntent::Next, now),
        KeyCode::Home => app.dispatch(CarouselIntent::GoTo(0), now),
        KeyCode::End => {
            let last = app.carousel().max_index();
            app.dispatch(CarouselIntent::GoTo(last), now);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.dispatch(CarouselIntent::GoTo(index), now);
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let (cols, rows) = app.size();
    let regions = layout_regions(Rect::new(0, 0, cols, rows));

    // Hover edge detection runs for every pointer event, including drags
    // that stray outside the region.
    let inside = rect_contains(hover_region(&regions), mouse.column, mouse.row);
    app.set_pointer_in_region(inside, now);

    let x = mouse.column as i32 * app.config().terminal.cell_width_px as i32;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let dots = app.carousel().pagination.count;
            if let Some(index) = dot_at(regions.dots, dots, mouse.column, mouse.row) {
                app.dispatch(CarouselIntent::GoTo(index), now);
                return;
            }
            let (prev, next) = arrow_rects(regions.track);
            if rect_contains(prev, mouse.column, mouse.row) {
                app.dispatch(CarouselIntent::Prev, now);
            } else if rect_contains(next, mouse.column, mouse.row) {
                app.dispatch(CarouselIntent::Next, now);
            } else if rect_contains(track_interior(regions.track), mouse.column, mouse.row) {
                app.dispatch(CarouselIntent::DragStart { x }, now);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.dispatch(CarouselIntent::DragMove { x }, now);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.dispatch(CarouselIntent::DragEnd, now);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
