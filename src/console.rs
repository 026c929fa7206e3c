//! Terminal front end: prompts, grid drawing and round announcements

use anyhow::{bail, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{BufRead, Write};

use crate::{
    grid::Grid,
    player::Player,
    round::{Announcer, ColumnSource, Outcome},
    HEIGHT, WIDTH,
};

const INTRO: &str = "
~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

Welcome to Connect Four!

In this game, each player takes turn dropping down their game piece in one of the 7 columns.

The first to get four in a row in a straight line wins! This includes horizontal, vertical, and diagonal lines.

~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
";

#[derive(Copy, Clone, Debug)]
enum Tone {
    Plain,
    Prompt,
    Success,
    Warning,
    Piece,
}

/// Parses a one-indexed column number typed by a player into a zero-based column
pub fn parse_column(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(column @ 1..=WIDTH) => Some(column - 1),
        _ => None,
    }
}

/// Line based console for playing rounds on a terminal
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    /// Turns terminal colours on or off
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    pub fn announce_intro(&mut self) -> Result<()> {
        self.print(INTRO, Tone::Success)?;
        self.print("\nHere is what the board looks like:\n", Tone::Plain)
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        self.print(&format!("{}\n", text), Tone::Plain)
    }

    /// Asks for a player's name, falling back to "Player n" for a blank answer
    pub fn ask_name(&mut self, player_number: usize) -> Result<String> {
        self.print(
            &format!("Player {}, what's your name?\n", player_number),
            Tone::Plain,
        )?;
        let name = self.read_line()?;
        let name = name.trim();

        Ok(if name.is_empty() {
            format!("Player {}", player_number)
        } else {
            name.to_string()
        })
    }

    /// Asks a y/n question until one of the two is given
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        self.print(&format!("{} (y/n)\n=> ", question), Tone::Plain)?;
        loop {
            match self.read_line()?.trim() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.print(
                    "\nInvalid input. Type 'y' to play or 'n' to exit.\n",
                    Tone::Plain,
                )?,
            }
            self.print("=> ", Tone::Plain)?;
        }
    }

    fn warn(&mut self, text: &str) -> Result<()> {
        // leave the newline unstyled so the highlight stops at the text
        self.print("\n", Tone::Plain)?;
        self.print(text, Tone::Warning)?;
        self.print("\n", Tone::Plain)
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            bail!("input closed before an answer was given");
        }
        Ok(buffer)
    }

    fn print(&mut self, text: &str, tone: Tone) -> Result<()> {
        if !self.color {
            write!(self.output, "{}", text)?;
            return Ok(());
        }

        let content = style(text.to_string());
        let content = match tone {
            Tone::Plain => {
                write!(self.output, "{}", text)?;
                return Ok(());
            }
            Tone::Prompt => content.with(Color::Blue),
            Tone::Success => content.with(Color::Green),
            Tone::Warning => content.with(Color::Red).on(Color::Grey),
            Tone::Piece => content.attribute(Attribute::Bold),
        };
        self.output.queue(PrintStyledContent(content))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ColumnSource for Console<R, W> {
    fn request_column(&mut self) -> Result<usize> {
        loop {
            self.print("=> ", Tone::Plain)?;
            match parse_column(&self.read_line()?) {
                Some(column) => return Ok(column),
                None => self.warn(&format!(
                    "Invalid column number. Please choose an integer number from 1 to {}.",
                    WIDTH
                ))?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Announcer for Console<R, W> {
    fn report_turn(&mut self, player: &Player) -> Result<()> {
        self.print(
            &format!(
                "{}, enter the column number in which you want to drop your piece!\n",
                player.name()
            ),
            Tone::Prompt,
        )
    }

    fn render_grid(&mut self, grid: &Grid) -> Result<()> {
        let header: String = (1..=WIDTH).map(|column| format!("  {} ", column)).collect();
        self.print(&format!("{}\n", header.trim_end()), Tone::Plain)?;

        let rule = "—".repeat(WIDTH * 4 + 2);
        for row in 0..HEIGHT {
            self.print("|", Tone::Plain)?;
            for cell in grid.row(row) {
                match cell {
                    Some(mark) => {
                        self.print(" ", Tone::Plain)?;
                        self.print(&mark.to_string(), Tone::Piece)?;
                        self.print(" |", Tone::Plain)?;
                    }
                    None => self.print("   |", Tone::Plain)?,
                }
            }
            self.print(&format!("\n{}\n", rule), Tone::Plain)?;
        }

        self.output.flush()?;
        Ok(())
    }

    fn report_column_full(&mut self, _column: usize) -> Result<()> {
        self.warn(
            "This column is full, you cannot add a piece here. Please pick another column!",
        )
    }

    fn report_move_result(&mut self, player: &Player, column: usize) -> Result<()> {
        self.print(
            &format!(
                "\n{} dropped their piece in column {}!\n",
                player.name(),
                column + 1
            ),
            Tone::Plain,
        )
    }

    fn report_outcome(&mut self, outcome: Outcome<'_>) -> Result<()> {
        let text = match outcome {
            Outcome::Winner(player) => {
                format!("\nYay, {} won!!! Cake for the winner 🎂 :>\n", player.name())
            }
            Outcome::Draw => {
                "\nIts a tie! There are no more slots left and no player has won.\n".to_string()
            }
        };
        self.print(&text, Tone::Success)?;
        self.output.flush()?;
        Ok(())
    }
}
