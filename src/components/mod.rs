pub mod app;
pub mod creature_card;
pub mod creature_details;
pub mod footer;
pub mod header;
pub mod leader_card;
pub mod region_card;
pub mod trick_tree;

use crate::state::{Palette, ThemeMode};
use yew::prelude::*;

/// Palette from the enclosing provider, dark when rendered outside one.
#[hook]
pub fn use_palette() -> Palette {
    use_context::<Palette>().unwrap_or_else(|| ThemeMode::default().palette())
}

// Shared look of the region/leader/creature cards; `ring` marks the selected one.
fn card_style(palette: &Palette, selected: bool, ring: &str) -> String {
    let emphasis = if selected {
        format!("box-shadow:0 0 0 2px {}; transform:scale(1.05);", ring)
    } else {
        String::new()
    };
    format!(
        "position:relative; cursor:pointer; border-radius:8px; overflow:hidden; transition:all 0.3s; background:{}; border:1px solid {}; {}",
        palette.card_bg, palette.border, emphasis
    )
}
