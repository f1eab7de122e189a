//! Edge case tests for intscan-lex
