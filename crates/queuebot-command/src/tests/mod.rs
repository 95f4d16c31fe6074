//! Unit tests for the command grammar.

mod grammar_tests;
mod mention_tests;
