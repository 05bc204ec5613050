use std::io::{BufRead, Write};

use trilat_core::field::FieldSettings;

use crate::simulation::error::SimError;

const QUESTIONS: [&str; 5] = [
    "Enter the number of anchors: ",
    "Enter field size: ",
    "Enter the radius range of anchor nodes:",
    "Enter chance of error in percentage:",
    "Enter anchor fraction:",
];

/// Asks for the five field parameters, one answer per line, in the order N, L, R, r, f.
pub fn ask_field_settings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<FieldSettings, SimError> {
    let mut answers: [String; 5] = Default::default();
    for (question, answer) in QUESTIONS.iter().zip(answers.iter_mut()) {
        writeln!(output, "{}", question)?;
        output.flush()?;
        input.read_line(answer)?;
    }
    let inputs = [
        answers[0].as_str(),
        answers[1].as_str(),
        answers[2].as_str(),
        answers[3].as_str(),
        answers[4].as_str(),
    ];
    Ok(FieldSettings::parse(inputs)?)
}
