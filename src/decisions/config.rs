use std::path::PathBuf;

/// What to do with a row that cannot be read as a decision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// Abort the load with [`DecisionError::Row`](super::error::DecisionError::Row).
    #[default]
    Fail,
    /// Log a warning and keep going.
    Skip,
}

impl TryFrom<&str> for Malformed {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            _ => Err(format!("invalid malformed-row policy: {}", s)),
        }
    }
}

impl std::fmt::Display for Malformed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

/// Where to find the digested decisions and how strictly to read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub malformed: Malformed,
    /// Require every Cards/Board token to be a real card, with no card on both sides.
    pub validate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(Self::PATH),
            malformed: Malformed::default(),
            validate: false,
        }
    }
}

impl Config {
    pub const PATH: &'static str = "parsed.csv";
    pub const ENV_PATH: &'static str = "DECISIONS_CSV";
    pub const ENV_MALFORMED: &'static str = "DECISIONS_MALFORMED";
    pub const ENV_VALIDATE: &'static str = "DECISIONS_VALIDATE";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
    pub fn malformed(self, malformed: Malformed) -> Self {
        Self { malformed, ..self }
    }
    pub fn validate(self, validate: bool) -> Self {
        Self { validate, ..self }
    }

    /// Reads overrides from the environment, falling back to defaults.
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let path = std::env::var(Self::ENV_PATH).unwrap_or_else(|_| String::from(Self::PATH));
        let malformed = std::env::var(Self::ENV_MALFORMED)
            .ok()
            .and_then(|s| {
                Malformed::try_from(s.as_str())
                    .inspect_err(|e| log::warn!("{}: {}", Self::ENV_MALFORMED, e))
                    .ok()
            })
            .unwrap_or_default();
        let validate = std::env::var(Self::ENV_VALIDATE)
            .ok()
            .and_then(|s| {
                s.trim()
                    .parse::<bool>()
                    .inspect_err(|e| log::warn!("{}: {}", Self::ENV_VALIDATE, e))
                    .ok()
            })
            .unwrap_or(false);
        Self::new(path).malformed(malformed).validate(validate)
    }
}

/// Environment variables are process-wide; tests touching them hold this.
#[cfg(test)]
pub(crate) static ENV: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn set_env(vars: &[(&str, Option<&str>)]) {
    for (name, value) in vars {
        // SAFETY: callers hold ENV, so no other test reads or writes the environment concurrently
        unsafe {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unset() -> [(&'static str, Option<&'static str>); 3] {
        [
            (Config::ENV_PATH, None),
            (Config::ENV_MALFORMED, None),
            (Config::ENV_VALIDATE, None),
        ]
    }

    #[test]
    fn env_overrides_and_fallbacks() {
        let _guard = ENV.lock().unwrap_or_else(|e| e.into_inner());

        set_env(&unset());
        assert_eq!(Config::from_env(), Config::default());

        set_env(&[
            (Config::ENV_PATH, Some("/data/digest.csv")),
            (Config::ENV_MALFORMED, Some("Skip")),
            (Config::ENV_VALIDATE, Some(" true ")),
        ]);
        let config = Config::from_env();
        assert_eq!(config.path, PathBuf::from("/data/digest.csv"));
        assert_eq!(config.malformed, Malformed::Skip);
        assert!(config.validate);

        set_env(&[
            (Config::ENV_MALFORMED, Some("ignore")),
            (Config::ENV_VALIDATE, Some("yes")),
        ]);
        let config = Config::from_env();
        assert_eq!(config.path, PathBuf::from("/data/digest.csv"));
        assert_eq!(config.malformed, Malformed::Fail);
        assert!(!config.validate);

        set_env(&unset());
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.path, PathBuf::from("parsed.csv"));
        assert_eq!(config.malformed, Malformed::Fail);
        assert!(!config.validate);
    }

    #[test]
    fn builder() {
        let config = Config::new("/tmp/x.csv")
            .malformed(Malformed::Skip)
            .validate(true);
        assert_eq!(config.path, PathBuf::from("/tmp/x.csv"));
        assert_eq!(config.malformed, Malformed::Skip);
        assert!(config.validate);
    }

    #[test]
    fn policy_parsing() {
        assert_eq!(Malformed::try_from("SKIP"), Ok(Malformed::Skip));
        assert_eq!(Malformed::try_from(" fail "), Ok(Malformed::Fail));
        assert!(Malformed::try_from("ignore").is_err());
    }
}
