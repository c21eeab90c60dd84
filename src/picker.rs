// Interactive quality picker

use std::io::{self, BufRead, Write};

use crate::stream::{QualityCode, QualityList, StreamError};

/// Print the numbered list and read choices until one is valid.
///
/// End of input is an error; anything else invalid re-prompts.
pub fn pick_one<'a, R, W>(
    list: &'a QualityList,
    input: &mut R,
    output: &mut W,
) -> Result<&'a QualityCode, StreamError>
where
    R: BufRead,
    W: Write,
{
    write_list(list, output).map_err(StreamError::Input)?;

    let mut answer = String::new();
    loop {
        write!(output, "? ").and_then(|_| output.flush()).map_err(StreamError::Input)?;

        answer.clear();
        let read = input.read_line(&mut answer).map_err(StreamError::Input)?;
        if read == 0 {
            return Err(StreamError::Input(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a format was picked",
            )));
        }

        if let Some(code) = parse_choice(answer.trim(), list) {
            return Ok(code);
        }

        writeln!(
            output,
            "Invalid input. Please enter a number between 1 and {}",
            list.len()
        )
        .map_err(StreamError::Input)?;
    }
}

fn write_list<W: Write>(list: &QualityList, output: &mut W) -> io::Result<()> {
    writeln!(output, "Pick a format:")?;
    for (i, code) in list.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, code)?;
    }
    Ok(())
}

/// 1-based index into the list
fn parse_choice<'a>(answer: &str, list: &'a QualityList) -> Option<&'a QualityCode> {
    let index: usize = answer.parse().ok()?;
    index.checked_sub(1).and_then(|i| list.get(i))
}
