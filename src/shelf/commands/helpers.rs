use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::catalog::LoadOutcome;

/// Parses a user supplied id. Only plain ASCII digits are accepted.
pub fn parse_id(text: &str) -> Result<u64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ShelfError::invalid(
            "id",
            format!("must be a whole number, got \"{}\"", text),
        ));
    }
    text.parse()
        .map_err(|_| ShelfError::invalid("id", format!("{} is out of range", text)))
}

/// Turns the non-fatal load outcomes into messages for the user.
pub fn report_load(outcome: &LoadOutcome, result: &mut CmdResult) {
    match outcome {
        LoadOutcome::Loaded(_) => {}
        LoadOutcome::Missing => result.add_message(CmdMessage::info(
            "No library file found. An empty one has been created.",
        )),
        LoadOutcome::Unreadable(reason) => result.add_message(CmdMessage::warning(format!(
            "Nothing could be read from the library file: {}",
            reason
        ))),
    }
}
