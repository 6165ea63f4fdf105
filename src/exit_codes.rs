//! Exit code constants for the flake8-diff CLI.
//!
//! - 0: No violations on changed lines
//! - 1: User error (bad args, bad config, VCS not found or unsupported)
//! - 2: Violations found on changed lines
//! - 3: VCS command failure
//! - 4: Linter process failure

/// Successful execution with no violations on changed lines.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or no usable VCS.
pub const USER_ERROR: i32 = 1;

/// At least one violation was reported on a changed line.
pub const VIOLATIONS_FOUND: i32 = 2;

/// VCS command failure: diff or listing could not be produced.
pub const VCS_FAILURE: i32 = 3;

/// Linter failure: the linter could not be spawned or exited abnormally.
pub const LINTER_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            VIOLATIONS_FOUND,
            VCS_FAILURE,
            LINTER_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_ne!(VIOLATIONS_FOUND, SUCCESS);
    }
}
