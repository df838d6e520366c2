use std::io::{BufRead, Write};

use log::{debug, info};

use crate::console::Console;
use crate::draw::{count_matches, DrawEngine, MAX_PLAYER_NUMBERS};
use crate::error::LotteryError;
use crate::picker::pick_numbers;
use crate::prize::prize_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Home,
    LuckyDip,
    PickNumbers,
    Results,
}

/// Outcome of running the handler for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next(GameState),
    Exit,
}

/// Owns everything a session needs: the draw engine, the console and the
/// numbers of the round in progress.
pub struct Game<R, W> {
    engine: DrawEngine,
    console: Console<R, W>,
    state: GameState,
    player_numbers: Vec<u8>,
    finished: bool,
}

fn yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(engine: DrawEngine, console: Console<R, W>) -> Self {
        Game {
            engine,
            console,
            state: GameState::Home,
            player_numbers: Vec::new(),
            finished: false,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player_numbers(&self) -> &[u8] {
        &self.player_numbers
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Plays until the player declines another round.
    pub fn run(&mut self) -> Result<(), LotteryError> {
        loop {
            if self.step()? == Step::Exit {
                info!("Player quit");
                return Ok(());
            }
        }
    }

    /// Runs the handler for the current state. Once the player has quit,
    /// every further call returns `Step::Exit` without touching the console.
    pub fn step(&mut self) -> Result<Step, LotteryError> {
        if self.finished {
            return Ok(Step::Exit);
        }
        let step = match self.state {
            GameState::Home => self.home()?,
            GameState::LuckyDip => self.lucky_dip()?,
            GameState::PickNumbers => self.pick_numbers()?,
            GameState::Results => self.results()?,
        };
        if let Step::Next(next) = step {
            if next != self.state {
                debug!("{:?} -> {:?}", self.state, next);
            }
            self.state = next;
        } else {
            self.finished = true;
        }
        Ok(step)
    }

    fn home(&mut self) -> Result<Step, LotteryError> {
        self.console.say("Welcome to the lottery game\n")?;
        self.console.say("1.\tLucky Dip\n")?;
        self.console.say("2.\tPick Numbers\n")?;

        let key = self.console.read_line()?;
        match key.trim() {
            "1" => Ok(Step::Next(GameState::LuckyDip)),
            "2" => Ok(Step::Next(GameState::PickNumbers)),
            _ => {
                self.console.say(&format!("{} Invalid option\n", key))?;
                Ok(Step::Next(GameState::Home))
            }
        }
    }

    fn lucky_dip(&mut self) -> Result<Step, LotteryError> {
        // all 7 drawn numbers, bonus included, become the player's numbers
        self.player_numbers = self.engine.draw_numbers();

        self.console
            .say(&format!("Your numbers are: {:?}", self.player_numbers))?;
        self.console
            .say("Would you like to keep these numbers? (Y/N)")?;

        if yes(&self.console.read_line()?) {
            Ok(Step::Next(GameState::Results))
        } else {
            self.player_numbers.clear();
            Ok(Step::Next(GameState::LuckyDip))
        }
    }

    fn pick_numbers(&mut self) -> Result<Step, LotteryError> {
        self.console.clear()?;
        self.player_numbers = pick_numbers(&mut self.console)?;
        debug_assert_eq!(self.player_numbers.len(), MAX_PLAYER_NUMBERS);

        self.console
            .say(&format!("Your numbers are: {:?}", self.player_numbers))?;
        Ok(Step::Next(GameState::Results))
    }

    fn results(&mut self) -> Result<Step, LotteryError> {
        self.console.clear()?;

        let winning = self.engine.draw_numbers();
        self.console
            .say(&format!("Your numbers are: {:?}", self.player_numbers))?;
        self.console
            .say(&format!("The winning numbers are: {:?}", winning))?;

        let matches = count_matches(&self.player_numbers, &winning);
        info!("Round finished with {} matches", matches);
        self.console.say(&match_message(matches))?;
        if let Some(pot) = prize_for(matches) {
            self.console.say(&format!("Prize pot: {}", pot))?;
        }

        self.console.say("Would you like to play again? (Y/N)")?;
        if yes(&self.console.read_line()?) {
            self.player_numbers.clear();
            Ok(Step::Next(GameState::Home))
        } else {
            Ok(Step::Exit)
        }
    }
}

pub fn match_message(matches: usize) -> String {
    if matches == MAX_PLAYER_NUMBERS {
        "Congratulations! You have won the jackpot!".to_string()
    } else {
        format!("You matched {} numbers", matches)
    }
}
