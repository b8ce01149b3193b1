//! HUD text overlay
//!
//! Builds the lines drawn over the scene. The web front end writes them into
//! the `#hud` element; the native build logs them.

use crate::sim::GameState;

/// Visual weight of a HUD line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudStyle {
    Heading,
    Item,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub style: HudStyle,
    pub text: String,
}

impl HudLine {
    fn heading(text: impl Into<String>) -> Self {
        Self {
            style: HudStyle::Heading,
            text: text.into(),
        }
    }

    fn item(text: impl Into<String>) -> Self {
        Self {
            style: HudStyle::Item,
            text: text.into(),
        }
    }
}

pub const CONTROLS: [&str; 4] = [
    "- Right/Left to move",
    "- Space to jump",
    "- Mouse Wheel to Zoom in-out, R to reset zoom and player position",
    "- C to change camera mode",
];

/// Every HUD line for the current frame, top to bottom
pub fn hud_lines(state: &GameState) -> Vec<HudLine> {
    let mut lines = Vec::with_capacity(10);
    lines.push(HudLine::heading("Controls:"));
    lines.extend(CONTROLS.iter().map(|c| HudLine::item(*c)));
    lines.push(HudLine::heading("Current camera mode:"));
    lines.push(HudLine::item(state.rig.mode().description()));
    lines.push(HudLine::heading("Current player positions:"));
    lines.push(HudLine::item(format!(
        "True X Position: {:12.3}",
        state.player.position.x
    )));
    lines.push(HudLine::item(format!(
        "True Y Position: {:12.3}",
        state.player.position.y
    )));
    lines
}

/// HUD as HTML, one `div` per line
pub fn hud_html(lines: &[HudLine]) -> String {
    lines
        .iter()
        .map(|line| {
            let class = match line.style {
                HudStyle::Heading => "hud-heading",
                HudStyle::Item => "hud-item",
            };
            format!("<div class=\"{}\">{}</div>", class, escape(&line.text))
        })
        .collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
