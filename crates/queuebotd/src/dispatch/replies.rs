//! Reply texts sent to the channel.

/// Greeting sent when the platform confirms the connection.
pub const CONNECTED: &str = "QBot is connected!";

/// Farewell sent when the platform announces it is closing the connection.
pub const FAREWELL: &str = "QBot: Out!";

/// Command summary sent for help requests.
pub const HELP: &str = "QBot commands:\n\
    `nq` / `enqueue`: join the queue\n\
    `omw <@user>` / `dq <@user>` / `dequeue <@user>`: take the head of the queue, \
    or leave it yourself by naming yourself\n\
    `q = [ <@a> <@b> ]`: replace the queue\n\
    `q.clear()` / `q.empty()`: empty the queue\n\
    `qbot status`: show the queue\n\
    `qbot help`: show this message";

/// Header sent for status requests.
pub const STATUS: &str = "QBot is listening. Current queue:";

/// Warning for a dequeue naming someone who is neither the head nor the sender.
#[must_use]
pub fn not_your_turn(sender: &str) -> String {
    format!("Sorry {sender}, that person is not at the head of the queue.")
}

/// Warning for a dequeue that names nobody.
#[must_use]
pub fn specify_target(sender: &str) -> String {
    format!("{sender}, please specify who to dequeue, e.g. `omw <@user>`.")
}

/// Warning for an enqueue from someone already waiting.
#[must_use]
pub fn already_queued(sender: &str) -> String {
    format!("{sender}, you are already in the queue.")
}

/// Joins an optional prefix with the queue rendering.
#[must_use]
pub fn with_queue(prefix: Option<&str>, rendering: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}\n{rendering}"),
        None => rendering.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, "QUEUE = [ <@A> ]")]
    #[case(Some("heads up"), "heads up\nQUEUE = [ <@A> ]")]
    fn composes_queue_replies(#[case] prefix: Option<&str>, #[case] expected: &str) {
        assert_eq!(with_queue(prefix, "QUEUE = [ <@A> ]"), expected);
    }

    #[test]
    fn warnings_name_the_sender() {
        for warning in [
            not_your_turn("<@B>"),
            specify_target("<@B>"),
            already_queued("<@B>"),
        ] {
            assert!(warning.contains("<@B>"), "{warning}");
        }
    }

    #[test]
    fn help_lists_every_command() {
        for command in ["nq", "omw", "dq", "q = [", "q.clear()", "status", "help"] {
            assert!(HELP.contains(command), "help text misses {command}");
        }
    }
}
