use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(14, 17, 20);
pub const SURFACE: Color = Color::Rgb(22, 27, 30);
pub const BORDER: Color = Color::Rgb(44, 54, 58);
pub const TEXT: Color = Color::Rgb(214, 222, 218);
pub const TEXT_DIM: Color = Color::Rgb(108, 122, 118);
pub const TEAL: Color = Color::Rgb(86, 170, 158);
pub const AMBER: Color = Color::Rgb(214, 150, 64);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn teal() -> Style {
    Style::default().fg(TEAL)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}
