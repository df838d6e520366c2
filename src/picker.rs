use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::console::Console;
use crate::draw::{in_range, HIGHEST_NUMBER, LOWEST_NUMBER, MAX_PLAYER_NUMBERS};
use crate::error::{LotteryError, PickError};

/// Validates one line of input against the numbers picked so far.
pub fn parse_pick(input: &str, picked: &[u8]) -> Result<u8, PickError> {
    let input = input.trim();
    let number: i64 = input
        .parse()
        .map_err(|_| PickError::NotANumber(input.to_string()))?;
    if !in_range(number) {
        return Err(PickError::OutOfRange(number));
    }
    let number = number as u8;
    if picked.contains(&number) {
        return Err(PickError::AlreadySelected(number));
    }
    Ok(number)
}

/// Asks until the player has chosen exactly `MAX_PLAYER_NUMBERS` numbers.
/// Bad input is retried, only console failures end the loop early.
pub fn pick_numbers<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<u8>, LotteryError> {
    let mut picked = Vec::with_capacity(MAX_PLAYER_NUMBERS);
    while picked.len() < MAX_PLAYER_NUMBERS {
        console.prompt(&format!(
            "Please select a number between {} and {}: ",
            LOWEST_NUMBER, HIGHEST_NUMBER
        ))?;
        let line = console.read_line()?;
        match parse_pick(&line, &picked) {
            Ok(number) => {
                debug!("Picked {}", number);
                picked.push(number);
            }
            Err(e) => {
                warn!("Rejected pick: {}", e);
                console.say(&e.to_string())?;
            }
        }
    }
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_picker(input: &str) -> (Result<Vec<u8>, LotteryError>, String) {
        run_picker_bytes(input.as_bytes())
    }

    fn run_picker_bytes(input: &[u8]) -> (Result<Vec<u8>, LotteryError>, String) {
        let mut console = Console::new(Cursor::new(input.to_vec()), Vec::new(), false);
        let res = pick_numbers(&mut console);
        let out = String::from_utf8(console.output().clone()).unwrap();
        (res, out)
    }

    #[test]
    fn parse_accepts_in_range() {
        assert_eq!(parse_pick("1", &[]), Ok(1));
        assert_eq!(parse_pick(" 59 ", &[]), Ok(59));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(parse_pick("0", &[]), Err(PickError::OutOfRange(0)));
        assert_eq!(parse_pick("60", &[]), Err(PickError::OutOfRange(60)));
        assert_eq!(parse_pick("-5", &[]), Err(PickError::OutOfRange(-5)));
    }

    #[test]
    fn parse_rejects_garbage_separately() {
        assert_eq!(
            parse_pick("seven", &[]),
            Err(PickError::NotANumber("seven".to_string()))
        );
        assert_eq!(parse_pick("", &[]), Err(PickError::NotANumber("".to_string())));
    }

    #[test]
    fn parse_rejects_duplicates() {
        assert_eq!(parse_pick("5", &[3, 5]), Err(PickError::AlreadySelected(5)));
    }

    #[test]
    fn picks_exactly_six() {
        let (res, _) = run_picker("1\n2\n3\n4\n5\n6\n7\n");
        assert_eq!(res.unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn retries_on_bad_input() {
        let (res, out) = run_picker("0\n60\nabc\n10\n10\n11\n12\n13\n14\n15\n");
        assert_eq!(res.unwrap(), vec![10, 11, 12, 13, 14, 15]);
        assert!(out.contains("Invalid number 0, please try again"));
        assert!(out.contains("Invalid number 60, please try again"));
        assert!(out.contains("'abc' is not a number"));
        assert!(out.contains("You have already selected 10"));
    }

    #[test]
    fn retries_on_invalid_utf8() {
        let (res, out) = run_picker_bytes(b"\xff\xfe\n1\n2\n3\n4\n5\n6\n");
        assert_eq!(res.unwrap(), vec![1, 2, 3, 4, 5, 6]);
        assert!(out.contains("is not a number"));
    }

    #[test]
    fn closed_input_is_fatal() {
        let (res, _) = run_picker("1\n2\n");
        assert!(matches!(res, Err(LotteryError::InputClosed)));
    }
}
