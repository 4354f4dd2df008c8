//! Exit code constants for the prepub CLI.
//!
//! The hook contract keeps the code space small:
//! - 0: Success, including the gated no-op on plain installs
//! - 1: Any failure (config missing/malformed/invalid, script failure,
//!   CLI misuse), and the `check` command's "gate closed" result

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure. Also returned by `check` when the gate is closed.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, FAILURE, "Exit codes must be distinct");
    }

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
