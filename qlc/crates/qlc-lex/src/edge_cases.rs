//! Edge case tests for qlc-lex
