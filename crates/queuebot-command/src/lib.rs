//! Chat command grammar for the queue bot.
//!
//! [`classify`] maps free-form message text onto exactly one [`Intent`]. The
//! rules are evaluated in a fixed order and the first match wins:
//!
//! 1. queue override or clear (`q = [ <@A> <@B> ]`, `queue.empty()`)
//! 2. dequeue (`omw`, `dq`, `deq`, `dequeue`, `dqueue`)
//! 3. enqueue (`nq`, `enq`, `enqueue`, `nqueue`)
//! 4. help (`qbot ... help`)
//! 5. status (`queue ... status`)
//!
//! Anything else is [`Intent::Unrecognized`]. Matching is case-insensitive and
//! keywords must stand as whole words, so `enqueueis` is not an enqueue.
//!
//! # Example
//!
//! ```
//! use queuebot_command::{Intent, classify};
//!
//! assert_eq!(classify("nq me"), Intent::Enqueue);
//! assert_eq!(
//!     classify("OMW <@U123>!"),
//!     Intent::Dequeue { target: Some("<@U123>".to_owned()) },
//! );
//! ```

mod grammar;
mod intent;
mod mention;

pub use grammar::{classify, is_dequeue, is_enqueue, is_help, is_status, queue_change};
pub use intent::Intent;
pub use mention::{first_mention, mention_for, mentions};

#[cfg(test)]
mod tests;
