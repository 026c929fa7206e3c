use anyhow::Result;
use log::info;

use std::io::{stdin, stdout};

use connect_four::{console::Console, Mark, Player, Round};

fn main() -> Result<()> {
    // logs go to stderr, RUST_LOG picks the level
    env_logger::init();

    let color = std::env::var_os("NO_COLOR").is_none();
    let stdin = stdin();
    let mut console = Console::new(stdin.lock(), stdout()).with_color(color);

    let mut question = "Hey there, want to play Connect Four?";
    let mut rounds_played = 0;

    while console.ask_yes_no(question)? {
        console.say("\nGreat! Here we go!")?;

        let players = [
            Player::new(console.ask_name(1)?, Mark::Hollow),
            Player::new(console.ask_name(2)?, Mark::Solid),
        ];
        console.announce_intro()?;

        let mut round = Round::new(players)?;
        round.play(&mut console)?;
        rounds_played += 1;

        question = "\nPlay again?";
    }

    info!("exiting after {} round(s)", rounds_played);
    console.say("\nOkay... Byebye :(")?;
    Ok(())
}
