use crate::carousel::layout::{translation_px, CardMetrics};
use crate::carousel::CarouselState;
use crate::config::Review;
use crate::ui::app::App;
use crate::ui::layout::{
    arrow_rects, card_geometry, dot_row_origin, dot_row_width, layout_regions, track_interior,
    Regions,
};
use crate::ui::theme::{
    ACCENT, CARD_BORDER, CARD_TEXT, DOT_INACTIVE, GLOBAL_BORDER, HEADER_TEXT, STAR_EMPTY,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let state = app.carousel();

    draw_header(frame, state, regions.header);

    if state.is_active() {
        draw_track(frame, app, regions.track);
        draw_dots(frame, state, regions.dots);
    } else {
        let placeholder = Paragraph::new("No reviews configured.")
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, centered_line(regions.track));
    }

    draw_footer(frame, regions);
}

fn draw_header(frame: &mut Frame<'_>, state: &CarouselState, area: Rect) {
    let position = if state.is_active() {
        let first = state.current_index + 1;
        let last = (state.current_index + state.cards_per_view).min(state.total_cards);
        format!("reviews {}\u{2013}{} of {}", first, last, state.total_cards)
    } else {
        String::new()
    };

    let line = Line::from(vec![
        Span::styled(
            " Guest Reviews ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(position, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(header, area);
}

fn draw_track(frame: &mut Frame<'_>, app: &App, track: Rect) {
    let state = app.carousel();
    let (prev, next) = arrow_rects(track);
    draw_arrow(frame, "\u{276e}", prev);
    draw_arrow(frame, "\u{276f}", next);

    let interior = track_interior(track);
    if interior.width == 0 || interior.height == 0 {
        return;
    }

    let geometry = card_geometry(
        interior,
        state.cards_per_view,
        app.config().terminal.card_gap_cells,
    );

    // Metrics are measured from the live cell geometry on every frame, so a
    // width change is reflected the moment it is drawn.
    let cell_width = app.config().terminal.cell_width_px as f32;
    let metrics = CardMetrics {
        card_width: geometry.card_width as f32 * cell_width,
        gap: geometry.gap as f32 * cell_width,
    };
    let translation = translation_px(state.current_index, metrics)
        + state.drag_offset_px() as f32;
    let offset_cells = (translation / cell_width).round() as i32;

    let stride = (geometry.card_width + geometry.gap) as i32;
    for (index, review) in app.config().reviews.iter().enumerate() {
        let left = interior.x as i32 + offset_cells + index as i32 * stride;
        let right = left + geometry.card_width as i32;
        let clipped_left = left.max(interior.x as i32);
        let clipped_right = right.min((interior.x + interior.width) as i32);
        if clipped_right <= clipped_left {
            continue;
        }
        let card_rect = Rect {
            x: clipped_left as u16,
            y: interior.y,
            width: (clipped_right - clipped_left) as u16,
            height: interior.height,
        };
        draw_card(frame, review, card_rect);
    }
}

fn draw_arrow(frame: &mut Frame<'_>, glyph: &str, strip: Rect) {
    if strip.width == 0 || strip.height == 0 {
        return;
    }
    let arrow = Paragraph::new(glyph)
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(arrow, centered_line(strip));
}

fn draw_card(frame: &mut Frame<'_>, review: &Review, area: Rect) {
    let filled = review.rating.min(5) as usize;
    let stars = Line::from(vec![
        Span::styled("\u{2605}".repeat(filled), Style::default().fg(ACCENT)),
        Span::styled("\u{2606}".repeat(5 - filled), Style::default().fg(STAR_EMPTY)),
    ]);

    let mut lines = vec![stars, Line::from("")];
    lines.push(Line::from(Span::styled(
        review.text.clone(),
        Style::default().fg(CARD_TEXT),
    )));
    if let Some(date) = &review.date {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            date.clone(),
            Style::default().fg(CARD_TEXT).add_modifier(Modifier::DIM),
        )));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER))
            .title(Span::styled(
                format!(" {} ", review.author),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(card, area);
}

fn draw_dots(frame: &mut Frame<'_>, state: &CarouselState, dots: Rect) {
    if dots.height == 0 || state.pagination.count == 0 {
        return;
    }

    let mut spans = Vec::new();
    for index in 0..state.pagination.count {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if state.pagination.is_active(index) {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(DOT_INACTIVE)
        };
        spans.push(Span::styled("\u{25cf}", style));
    }

    // Drawn at the same origin the hit-testing uses.
    let row = Rect {
        x: dot_row_origin(dots, state.pagination.count),
        y: dots.y,
        width: dot_row_width(state.pagination.count).min(dots.width),
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn draw_footer(frame: &mut Frame<'_>, regions: Regions) {
    let hints = " \u{2190} \u{2192} Navigate \u{2502} Drag: Swipe \u{2502} Click dots: Jump \u{2502} q: Quit";
    let version = format!("v{} ", VERSION);

    // Pad using char count, not byte count, since the hints hold Unicode.
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = regions.footer.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    let footer = Paragraph::new(line).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(footer, regions.footer);
}

/// One-line rect vertically centered inside `area`.
fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    }
}
