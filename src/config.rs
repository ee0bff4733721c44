//! Server configuration, built once at startup and passed by reference.

/// Environment variable that switches the server into lite mode.
pub const LITE_MODE_ENV: &str = "LITE_MODE";

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// When true, only the raw pass-through execute module is exposed.
    pub lite_mode: bool,
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            lite_mode: parse_flag(std::env::var(LITE_MODE_ENV).ok().as_deref()),
        }
    }
}

/// Recognized truthy forms are "true", "1" and "t", case-insensitive.
/// Anything else, including an absent variable, is false.
pub fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "t"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_forms() {
        for v in ["true", "TRUE", "True", "1", "t", "T"] {
            assert!(parse_flag(Some(v)), "{v:?} should be truthy");
        }
    }

    #[test]
    fn falsy_forms() {
        for v in ["false", "0", "f", "yes", "on", "invalid", "", " true ", "1 "] {
            assert!(!parse_flag(Some(v)), "{v:?} should be falsy");
        }
    }

    #[test]
    fn absent_defaults_to_false() {
        assert!(!parse_flag(None));
    }
}
