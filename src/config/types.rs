use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Timing and gesture knobs for the carousel engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-advance period in milliseconds (default: 5000).
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    /// Resize quiescence window in milliseconds (default: 200).
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    /// Pointer displacement required to commit a slide change (default: 80).
    #[serde(default = "default_drag_threshold_px")]
    pub drag_threshold_px: i32,
}

/// How terminal cells map into the engine's pixel space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Assumed pixel width of one terminal column (default: 8).
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
    /// Gap between cards on the track, in columns (default: 2).
    #[serde(default = "default_card_gap_cells")]
    pub card_gap_cells: u16,
}

/// One review card. The engine treats cards as opaque; these fields exist
/// only for the frontend to draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub text: String,
    #[serde(default)]
    pub date: Option<String>,
}

fn default_auto_advance_ms() -> u64 {
    5000
}

fn default_resize_debounce_ms() -> u64 {
    200
}

fn default_drag_threshold_px() -> i32 {
    80
}

fn default_cell_width_px() -> u32 {
    8
}

fn default_card_gap_cells() -> u16 {
    2
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            drag_threshold_px: default_drag_threshold_px(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cell_width_px: default_cell_width_px(),
            card_gap_cells: default_card_gap_cells(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            terminal: TerminalConfig::default(),
            reviews: sample_reviews(),
        }
    }
}

/// Built-in review set used when no config file exists, so the demo has
/// something to spin.
fn sample_reviews() -> Vec<Review> {
    let entries: [(&str, u8, &str, &str); 7] = [
        (
            "Margaux D.",
            5,
            "An absolute gem. The staff remembered our names from day one and \
             the breakfast terrace alone is worth the trip.",
            "2025-09-14",
        ),
        (
            "Tobias K.",
            5,
            "Quiet, elegant, and the thermal pool at dusk is unforgettable. \
             We extended our stay twice.",
            "2025-08-02",
        ),
        (
            "Elena P.",
            4,
            "Beautiful rooms with a view over the valley. Dinner service was a \
             touch slow on the weekend, but the food made up for it.",
            "2025-07-21",
        ),
        (
            "James W.",
            5,
            "Best service we have had anywhere in years. The concierge planned \
             our whole week without a single misstep.",
            "2025-06-30",
        ),
        (
            "Sofia R.",
            4,
            "Lovely spa and very comfortable beds. Parking is tight in high \
             season, so arrive early.",
            "2025-06-11",
        ),
        (
            "Henri L.",
            5,
            "The garden suites are stunning. Waking up to mountain air and \
             fresh pastries is a habit I could keep.",
            "2025-05-05",
        ),
        (
            "Amira S.",
            5,
            "Every detail felt considered, from the welcome tea to the \
             hand-written checkout note. We will be back.",
            "2025-04-18",
        ),
    ];
    entries
        .into_iter()
        .map(|(author, rating, text, date)| Review {
            author: author.to_string(),
            rating,
            text: text.to_string(),
            date: Some(date.to_string()),
        })
        .collect()
}
