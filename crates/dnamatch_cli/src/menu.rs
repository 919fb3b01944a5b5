//! The interactive prompt: read a sequence and a pattern, then run algorithms chosen from a menu.

use crate::report::Report;
use dnamatch::{
    Algorithm,
    HashParams,
    Sequence,
};
use std::io::{
    BufRead,
    Write,
};

const MENU: &str = "
-------------------------------------------------------
              Pattern Matching Algorithms
-------------------------------------------------------
1. Naive Approach
2. Rabin-Karp Algorithm
3. Knuth-Morris-Pratt (KMP) Algorithm
4. Exit
";

enum Choice {
    Search(Algorithm),
    Exit,
}

fn choice(number: u32, params: HashParams) -> Option<Choice> {
    match number {
        1 => Some(Choice::Search(Algorithm::Naive)),
        2 => Some(Choice::Search(Algorithm::RabinKarp(params))),
        3 => Some(Choice::Search(Algorithm::Kmp)),
        4 => Some(Choice::Exit),
        _ => None,
    }
}

/// Reads one line, without its terminator. `None` at end of input.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Prompts until a valid sequence is entered. `None` at end of input.
fn prompt_sequence(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    invalid: &str,
) -> anyhow::Result<Option<Sequence>> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match Sequence::parse(&line) {
            Ok(sequence) => return Ok(Some(sequence)),
            Err(error) => {
                tracing::debug!(%error, "rejected input");
                writeln!(output, "{invalid}")?;
            }
        }
    }
}

/// Runs the menu until the user exits or input ends.
pub fn run(
    mut input: impl BufRead,
    mut output: impl Write,
    params: HashParams,
) -> anyhow::Result<()> {
    writeln!(output, "=======================================================")?;
    writeln!(output, "               DNA Pattern Matcher")?;
    writeln!(output, "=======================================================")?;

    let Some(sequence) = prompt_sequence(
        &mut input,
        &mut output,
        "Enter DNA Sequence: ",
        "Invalid DNA sequence. Please enter a sequence containing only A, T, G, and C.",
    )?
    else {
        return Ok(());
    };
    let Some(pattern) = prompt_sequence(
        &mut input,
        &mut output,
        "Enter pattern to search: ",
        "Invalid pattern. Please enter a sequence containing only A, T, G, and C.",
    )?
    else {
        return Ok(());
    };

    loop {
        write!(output, "{MENU}\nChoose an option: ")?;
        output.flush()?;
        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        let Ok(number) = line.parse::<u32>() else {
            writeln!(output, "Invalid input. Please enter a number between 1 and 4.")?;
            continue;
        };

        match choice(number, params) {
            Some(Choice::Search(algorithm)) => {
                // patterns parsed by `Sequence::parse` are never empty
                let matches = algorithm.search(sequence.as_bytes(), pattern.as_bytes())?;
                let report = Report::new(algorithm, &sequence, &pattern, matches);
                write!(output, "{report}")?;
            }
            Some(Choice::Exit) => {
                writeln!(output, "Exiting program. Thank you!")?;
                return Ok(());
            }
            None => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}
