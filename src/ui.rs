pub mod sprite;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::{app::App, board::Board, session::Outcome, ui::sprite::Mole};

const OVERLAY_WIDTH: u16 = 32;
const OVERLAY_HEIGHT: u16 = 7;

/// Where each part of the screen goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub field: Rect,
    /// inside the field border; the mole roams here
    pub play: Rect,
    pub footer: Rect,
}

pub fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // scoreboard
            Constraint::Min(0),    // field
            Constraint::Length(1), // legend
        ])
        .split(area);

    Areas {
        header: chunks[0],
        field: chunks[1],
        play: field_block().inner(chunks[1]),
        footer: chunks[2],
    }
}

fn field_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title(" thwack ")
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.board();
        let areas = layout(area);

        render_scoreboard(board, areas.header, buf);

        field_block()
            .border_style(Style::default().fg(Color::DarkGray))
            .render(areas.field, buf);

        if let Some(placement) = board.target {
            let rect = Mole::rect(areas.play, placement.x, placement.y);
            Mole {
                squash: &board.squash,
            }
            .render(rect, buf);
        }

        if let Some(outcome) = board.outcome {
            render_overlay(board, outcome, areas.play, buf);
        }

        let legend = Paragraph::new(Span::styled(
            "click the mole / (r)eset / (q)uit",
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        legend.render(areas.footer, buf);
    }
}

fn render_scoreboard(board: &Board, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let time_style = if board.remaining_secs <= 5 {
        Style::default().patch(bold_style).fg(Color::Red)
    } else {
        bold_style
    };

    let line = Line::from(vec![
        Span::styled("Hits: ", dim_style),
        Span::styled(
            board.hits.to_string(),
            Style::default().patch(bold_style).fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled("Misses: ", dim_style),
        Span::styled(
            board.failures.to_string(),
            Style::default().patch(bold_style).fg(Color::Red),
        ),
        Span::raw("   "),
        Span::styled("Time: ", dim_style),
        Span::styled(format!("{}s", board.remaining_secs), time_style),
        Span::raw("   "),
        Span::styled("Highscore: ", dim_style),
        Span::styled(
            board.highscore.to_string(),
            Style::default().patch(bold_style).fg(Color::Yellow),
        ),
    ]);

    Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_overlay(board: &Board, outcome: Outcome, play: Rect, buf: &mut Buffer) {
    let (title, color) = match outcome {
        Outcome::Victory => ("YOU WIN!", Color::Green),
        Outcome::Defeat => ("GAME OVER", Color::Red),
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    let text = vec![
        Line::from(Span::styled(title, style)),
        Line::from(""),
        Line::from(format!("{} hits / {} misses", board.hits, board.failures)),
        Line::from(Span::styled(
            "press r to play again",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];

    let rect = centered(play, OVERLAY_WIDTH, OVERLAY_HEIGHT);
    Clear.render(rect, buf);
    Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .alignment(Alignment::Center)
        .render(rect, buf);
}
