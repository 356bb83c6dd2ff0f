//! Terminal output formatting
//!
//! Display utilities for console play and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_check_result, print_outcome, print_rank_result, print_round_result,
    print_round_state, print_session_summary,
};
