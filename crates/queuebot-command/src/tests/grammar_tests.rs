//! Tests for [`classify`] and the individual recognition rules.

use rstest::rstest;

use crate::{Intent, classify, is_dequeue, is_enqueue, is_help, is_status, queue_change};

#[rstest]
#[case("Enqueue")]
#[case("nqueue me~")]
#[case("   enq me please")]
#[case("nq me")]
#[case("ENQ!!!")]
fn recognises_enqueue(#[case] text: &str) {
    assert!(is_enqueue(text), "text: {text}");
    assert_eq!(classify(text), Intent::Enqueue);
}

#[rstest]
#[case("")]
#[case("I have enqueue in the message, but not at the start")]
#[case("enqueueis at the start, but without a word boundary")]
#[case("nqqqqqqq")]
fn rejects_enqueue(#[case] text: &str) {
    assert!(!is_enqueue(text), "text: {text}");
    assert_ne!(classify(text), Intent::Enqueue);
}

#[rstest]
#[case("Dequeue")]
#[case("dqueue dairy queen")]
#[case("   deq me please thx")]
#[case("dq <@U12345678>")]
#[case("OMW <@U12345678>!")]
#[case("DQ!!!")]
fn recognises_dequeue(#[case] text: &str) {
    assert!(is_dequeue(text), "text: {text}");
    assert!(matches!(classify(text), Intent::Dequeue { .. }));
}

#[rstest]
#[case("")]
#[case("I have dequeue in the message, but not at the start")]
#[case("dequeueis at the start, but without a word boundary")]
#[case("dqqqqqqq")]
fn rejects_dequeue(#[case] text: &str) {
    assert!(!is_dequeue(text), "text: {text}");
    assert!(!matches!(classify(text), Intent::Dequeue { .. }));
}

#[test]
fn dequeue_extracts_first_mention_as_target() {
    assert_eq!(
        classify("OMW <@U123>!"),
        Intent::Dequeue {
            target: Some("<@U123>".to_owned())
        }
    );
    assert_eq!(
        classify("dq <@x123> <@y456>"),
        Intent::Dequeue {
            target: Some("<@x123>".to_owned())
        }
    );
}

#[test]
fn dequeue_without_mention_has_no_target() {
    assert_eq!(classify("dq"), Intent::Dequeue { target: None });
    assert_eq!(classify("omw <@   >"), Intent::Dequeue { target: None });
}

#[rstest]
#[case("QUEUE.empty()")]
#[case("Q.CLear(    )")]
#[case("queue.clear()")]
fn clear_calls_yield_queue_clear(#[case] text: &str) {
    assert_eq!(classify(text), Intent::QueueClear);
    assert_eq!(queue_change(text), Some(Vec::new()));
}

#[rstest]
#[case("q=[]")]
#[case("   queue    =   [         ]")]
fn empty_lists_yield_empty_override(#[case] text: &str) {
    assert_eq!(classify(text), Intent::QueueOverride { tokens: Vec::new() });
    assert_eq!(queue_change(text), Some(Vec::new()));
}

#[test]
fn list_assignment_yields_tokens_in_order() {
    let expected = vec!["<@U1234>".to_owned(), "<@xyz>".to_owned()];
    assert_eq!(
        classify("Queue = [ <@U1234> <@xyz>   ]"),
        Intent::QueueOverride {
            tokens: expected.clone()
        }
    );
    assert_eq!(queue_change("q = [ <@U1234> <@xyz> ]"), Some(expected));
}

#[rstest]
#[case("Queue = [ <@U1234> <@xyz> typo ]")]
#[case("Queue = <@fake> <@wrong>")]
#[case("This isn't a real queue change")]
fn malformed_overrides_do_not_match(#[case] text: &str) {
    assert_eq!(queue_change(text), None);
    assert!(classify(text).replacement().is_none());
}

#[test]
fn malformed_override_falls_through_to_later_rules() {
    assert_eq!(classify("Queue = [ <@U1> typo ]"), Intent::Unrecognized);
    assert_eq!(
        classify("dq <@U1> queue = [ oops ]"),
        Intent::Dequeue {
            target: Some("<@U1>".to_owned())
        }
    );
}

#[test]
fn override_takes_precedence_over_dequeue() {
    assert_eq!(
        classify("dq q = [ <@U1> ]"),
        Intent::QueueOverride {
            tokens: vec!["<@U1>".to_owned()]
        }
    );
}

#[rstest]
#[case("qbot!! help!!")]
#[case("  QUEUEbot come help me thx")]
#[case("qbot help please")]
#[case("queue help")]
fn recognises_help(#[case] text: &str) {
    assert!(is_help(text), "text: {text}");
    assert_eq!(classify(text), Intent::HelpRequest);
}

#[rstest]
#[case("queuebot to the rescue")]
#[case("i hope qbot will help me")]
#[case("qbot is a helpful dood")]
#[case("qbothelp")]
fn rejects_help(#[case] text: &str) {
    assert!(!is_help(text), "text: {text}");
    assert_ne!(classify(text), Intent::HelpRequest, "text: {text}");
}

#[rstest]
#[case("qbot!! status!!")]
#[case("QUEUEbot give me that status thx")]
#[case("q  status?")]
#[case("  queue status please!!")]
fn recognises_status(#[case] text: &str) {
    assert!(is_status(text), "text: {text}");
    assert_eq!(classify(text), Intent::StatusRequest);
}

#[rstest]
#[case("queuebot give me the stats")]
#[case("i hope qbot update its status")]
#[case("q is a statusupdating thing")]
#[case("status of the queue")]
fn rejects_status(#[case] text: &str) {
    assert!(!is_status(text), "text: {text}");
    assert_ne!(classify(text), Intent::StatusRequest);
}

#[test]
fn help_wins_over_status_when_both_words_appear() {
    assert_eq!(classify("qbot status help"), Intent::HelpRequest);
}

#[rstest]
#[case("hello everyone")]
#[case("")]
#[case("the queue is long today")]
fn ordinary_chatter_is_unrecognized(#[case] text: &str) {
    assert_eq!(classify(text), Intent::Unrecognized);
}
