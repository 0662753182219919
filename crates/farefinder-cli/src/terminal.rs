//! Terminal capability detection and palette selection.

use farefinder_lib::Palette;

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/)
/// and the `TERM=dumb` convention for non-capable terminals.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Select a palette based on terminal capabilities.
#[must_use]
pub fn palette() -> Palette {
    if supports_color() {
        Palette::colored()
    } else {
        Palette::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    /// Environment variables are process-global, so tests modifying them
    /// must not run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();
        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        result
    }

    #[test]
    fn no_color_disables_colors() {
        with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
            assert!(!supports_color());
        });
    }

    #[test]
    fn dumb_terminal_disables_colors() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!supports_color());
        });
    }

    #[test]
    fn normal_terminal_supports_colors() {
        with_env_vars(
            &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
            || {
                assert!(supports_color());
            },
        );
    }
}
