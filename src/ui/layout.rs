use ratatui::layout::Rect;

/// Width of the prev/next arrow strips flanking the track.
pub const ARROW_STRIP_WIDTH: u16 = 4;

/// Screen regions: title header, card track, dot row, hint footer.
#[derive(Clone, Copy, Debug)]
pub struct Regions {
    pub header: Rect,
    pub track: Rect,
    pub dots: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let dots_height = 1.min(area.height.saturating_sub(header_height + footer_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let dots = Rect {
        x: area.x,
        y: footer.y.saturating_sub(dots_height),
        width: area.width,
        height: dots_height,
    };
    let track = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + footer_height + dots_height),
    };
    Regions {
        header,
        track,
        dots,
        footer,
    }
}

/// Left and right arrow strips inside the track region.
pub fn arrow_rects(track: Rect) -> (Rect, Rect) {
    let strip = ARROW_STRIP_WIDTH.min(track.width / 2);
    let prev = Rect {
        x: track.x,
        y: track.y,
        width: strip,
        height: track.height,
    };
    let next = Rect {
        x: track.x + track.width.saturating_sub(strip),
        y: track.y,
        width: strip,
        height: track.height,
    };
    (prev, next)
}

/// Track region minus the arrow strips: where cards live and drags start.
pub fn track_interior(track: Rect) -> Rect {
    let strip = ARROW_STRIP_WIDTH.min(track.width / 2);
    Rect {
        x: track.x + strip,
        y: track.y,
        width: track.width.saturating_sub(strip * 2),
        height: track.height,
    }
}

/// Per-card cell geometry, measured from the interior on every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardGeometry {
    pub card_width: u16,
    pub gap: u16,
}

pub fn card_geometry(interior: Rect, cards_per_view: usize, gap_cells: u16) -> CardGeometry {
    let cards = cards_per_view.max(1) as u16;
    let gaps = gap_cells * cards.saturating_sub(1);
    let card_width = (interior.width.saturating_sub(gaps) / cards).max(1);
    CardGeometry {
        card_width,
        gap: gap_cells,
    }
}

/// Column where the centered dot row starts.
pub fn dot_row_origin(dots: Rect, count: usize) -> u16 {
    let row_width = dot_row_width(count);
    dots.x + dots.width.saturating_sub(row_width) / 2
}

/// Dots are one cell wide with one cell between them.
pub fn dot_row_width(count: usize) -> u16 {
    (count.saturating_mul(2).saturating_sub(1)) as u16
}

/// Which indicator, if any, sits at the given cell.
pub fn dot_at(dots: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    if count == 0 || dots.height == 0 || row != dots.y {
        return None;
    }
    let origin = dot_row_origin(dots, count);
    let rel = column.checked_sub(origin)?;
    if rel >= dot_row_width(count) || rel % 2 != 0 {
        return None;
    }
    Some((rel / 2) as usize)
}

/// The carousel's bounding region for hover purposes: track plus dot row.
pub fn hover_region(regions: &Regions) -> Rect {
    regions.track.union(regions.dots)
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
