//! Small combinators contracts use to state their rules.

use crate::command::{CommandData, CommandWithSigners};
use crate::error::RejectionReason;

/// Select the one command of kind `kind`.
///
/// Zero matches and multiple matches are both rejected; a transaction that
/// carries other kinds of command alongside is unaffected.
pub fn require_single_command(
    commands: &[CommandWithSigners],
    kind: CommandData,
) -> Result<&CommandWithSigners, RejectionReason> {
    let mut matching = commands.iter().filter(|c| c.value == kind);
    match (matching.next(), matching.next()) {
        (Some(command), None) => Ok(command),
        (first, _) => Err(RejectionReason::AmbiguousCommand {
            command: kind.name(),
            found: first.map_or(0, |_| 2 + matching.count()),
        }),
    }
}

/// Fail with `reason` unless `condition` holds.
pub fn require(condition: bool, reason: RejectionReason) -> Result<(), RejectionReason> {
    if condition {
        Ok(())
    } else {
        Err(reason)
    }
}
