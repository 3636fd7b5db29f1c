use crate::command::Command;
use crate::consts;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    style::Style,
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up that interrupts play until the player responds to it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Dialog {
    /// Informs the player that they've reached a new level
    LevelUp { level: u32 },
    /// Asks the player whether to play again
    GameOver { level: u32, selection: Answer },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Answer {
    Yes,
    No,
}

impl Answer {
    fn other(self) -> Answer {
        match self {
            Answer::Yes => Answer::No,
            Answer::No => Answer::Yes,
        }
    }
}

/// The player's response to a dialog
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DialogOutcome {
    Acknowledged,
    PlayAgain,
    Exit,
}

impl Dialog {
    const TEXT_WIDTH: u16 = 36;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    pub(crate) fn level_up(level: u32) -> Dialog {
        Dialog::LevelUp { level }
    }

    pub(crate) fn game_over(level: u32) -> Dialog {
        Dialog::GameOver {
            level,
            selection: Answer::Yes,
        }
    }

    /// Handle a command.  Returns `Some` if the player answered the dialog.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<DialogOutcome> {
        match self {
            Dialog::LevelUp { .. } => matches!(cmd, Command::Enter | Command::Space | Command::Esc)
                .then_some(DialogOutcome::Acknowledged),
            Dialog::GameOver { selection, .. } => match cmd {
                Command::Y => Some(DialogOutcome::PlayAgain),
                Command::N | Command::Q => Some(DialogOutcome::Exit),
                Command::Enter | Command::Space => match selection {
                    Answer::Yes => Some(DialogOutcome::PlayAgain),
                    Answer::No => Some(DialogOutcome::Exit),
                },
                Command::Left | Command::Right | Command::Up | Command::Down => {
                    *selection = selection.other();
                    None
                }
                _ => None,
            },
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Dialog::LevelUp { .. } => " LEVEL UP ",
            Dialog::GameOver { .. } => " GAME OVER ",
        }
    }

    fn paragraphs(&self) -> Vec<String> {
        match self {
            Dialog::LevelUp { level } => {
                vec![format!("Level Up! You are now on level {level}.")]
            }
            Dialog::GameOver { level, .. } => vec![
                format!("Game Over! You reached level {level}."),
                String::from("Do you want to play again?"),
            ],
        }
    }

    fn lines(&self) -> Vec<String> {
        let opts = textwrap::Options::new(usize::from(Dialog::TEXT_WIDTH)).break_words(true);
        self.paragraphs()
            .iter()
            .flat_map(|p| textwrap::wrap(p, &opts))
            .map(Cow::into_owned)
            .collect()
    }

    fn buttons(&self) -> Line<'static> {
        match self {
            Dialog::LevelUp { .. } => Line::from("[OK]"),
            Dialog::GameOver { selection, .. } => {
                let style_for = |answer: Answer| {
                    if *selection == answer {
                        consts::MENU_SELECTION_STYLE
                    } else {
                        Style::new()
                    }
                };
                Line::from_iter([
                    Span::styled("[Yes (y)]", style_for(Answer::Yes)),
                    Span::raw("   "),
                    Span::styled("[No (n)]", style_for(Answer::No)),
                ])
            }
        }
    }
}

impl Widget for &Dialog {
    // `area` is here the area of the entire display in which the program is
    // drawing, not the area for just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Dialog::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(self.title())
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, button_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
                .flex(Flex::Start)
                .spacing(1)
                .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        Text::from_iter(lines.iter().map(String::as_str)).render(text_area, buf);
        self.buttons().centered().render(button_area, buf);
    }
}
