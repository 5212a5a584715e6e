use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::{animation::SquashAnimation, field::SPRITE};

const MOLE: [&str; 3] = [r#" .-"-. "#, "( o.o )", " (___) "];
const MOLE_SQUASHED: [&str; 3] = ["       ", " .---. ", "(_>.<_)"];

/// The mole, drawn at its placement inside the play area
pub struct Mole<'a> {
    pub squash: &'a SquashAnimation,
}

impl Mole<'_> {
    pub fn art(&self) -> [&'static str; 3] {
        if self.squash.is_squashed() {
            MOLE_SQUASHED
        } else {
            MOLE
        }
    }

    /// Screen rect for a sprite whose corner sits at (x, y) of `play`, clipped to it
    pub fn rect(play: Rect, x: u16, y: u16) -> Rect {
        Rect::new(
            play.x.saturating_add(x),
            play.y.saturating_add(y),
            SPRITE.width,
            SPRITE.height,
        )
        .intersection(play)
    }
}

impl Widget for Mole<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.squash.is_squashed() {
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Rgb(181, 101, 29))
                .add_modifier(Modifier::BOLD)
        };

        let lines: Vec<Line> = self.art().iter().map(|l| Line::from(*l)).collect();
        Paragraph::new(lines).style(style).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_art_matches_sprite_size() {
        for art in [MOLE, MOLE_SQUASHED] {
            assert_eq!(art.len(), SPRITE.height as usize);
            for line in art {
                assert_eq!(line.chars().count(), SPRITE.width as usize);
            }
        }
    }

    #[test]
    fn test_squashed_art_while_pressed() {
        let mut squash = SquashAnimation::new();
        assert_eq!(Mole { squash: &squash }.art(), MOLE);

        squash.start();
        squash.update(Duration::from_millis(100));
        assert_eq!(Mole { squash: &squash }.art(), MOLE_SQUASHED);
    }

    #[test]
    fn test_rect_is_clipped_to_play_area() {
        let play = Rect::new(1, 1, 10, 2);
        let rect = Mole::rect(play, 5, 0);
        assert_eq!(rect, Rect::new(6, 1, 5, 2));
    }
}
