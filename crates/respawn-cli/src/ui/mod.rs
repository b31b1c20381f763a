//! Terminal status output.
//!
//! The supervised command owns stdout; everything printed here goes to
//! stderr with a short colored prefix.
//!
//! ```no_run
//! use respawn_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Shutting down...");
//! ```

mod messages;

pub use messages::{info, success, warning};

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to whether stderr
/// is attended.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether messages are colored. `--no-color` always wins.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_no_color_env_disables_colors() {
        unsafe {
            std::env::remove_var("FORCE_COLOR");
            std::env::set_var("NO_COLOR", "1");
        }
        assert!(!should_use_color());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_force_color_env_enables_colors() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(should_use_color());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_messages_print_in_both_color_modes() {
        for no_color in [true, false] {
            init_colors(no_color);
            info("Shutting down...");
            success("Stopped");
            warning("Ctrl+C handling unavailable");
        }
    }

    #[test]
    #[serial]
    fn test_no_color_flag_wins() {
        unsafe {
            std::env::set_var("FORCE_COLOR", "1");
        }
        init_colors(true);
        assert!(!colors_enabled());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }
}
