//! Tests for mention extraction and formatting.

use rstest::rstest;

use crate::{first_mention, mention_for, mentions};

#[rstest]
#[case("OMW <@U12345678>!", Some("<@U12345678>"))]
#[case("<@x>", Some("<@x>"))]
#[case("<@x123> <@y456>", Some("<@x123>"))]
#[case("these are not the users you're looking for", None)]
#[case("<@     > (boo)", None)]
fn finds_first_mention(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(first_mention(text).as_deref(), expected);
}

#[test]
fn collects_every_mention_in_order() {
    assert_eq!(
        mentions("<@A1> then <@  > then <@B2>"),
        vec!["<@A1>".to_owned(), "<@B2>".to_owned()]
    );
}

#[test]
fn formats_user_ids_as_mentions() {
    assert_eq!(mention_for("U42"), "<@U42>");
}
