//! Layout resolver: viewport breakpoints and slide translation.

/// Widths at or below this show a single card.
pub const NARROW_BREAKPOINT_PX: u32 = 768;
/// Widths at or below this (and above narrow) show two cards.
pub const MEDIUM_BREAKPOINT_PX: u32 = 1024;

/// Measured geometry of one card slot, in pixels.
///
/// Callers measure this from the render surface at call time rather than
/// caching it; card widths shift whenever the viewport does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMetrics {
    pub card_width: f32,
    pub gap: f32,
}

/// Number of cards simultaneously visible at the given viewport width.
pub fn cards_per_view(width_px: u32) -> usize {
    if width_px <= NARROW_BREAKPOINT_PX {
        1
    } else if width_px <= MEDIUM_BREAKPOINT_PX {
        2
    } else {
        3
    }
}

/// Highest reachable slide index, floored at 0.
pub fn max_index(total_cards: usize, cards_per_view: usize) -> usize {
    total_cards.saturating_sub(cards_per_view)
}

/// Horizontal track translation for a slide index, in pixels.
pub fn translation_px(index: usize, metrics: CardMetrics) -> f32 {
    -(index as f32 * (metrics.card_width + metrics.gap))
}
