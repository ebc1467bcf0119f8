//! Typed environment variable access
//!
//! Every variable the crate reads is declared once here with its name,
//! default and description.

use std::env;
use std::fmt;
use std::path::PathBuf;

/// Environment variable parse error
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// Accessor for one environment variable
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::DEFAULT.ok_or_else(|| EnvError {
                variable: Self::NAME.to_string(),
                message: "Required environment variable not set".to_string(),
            }),
        }
    }

    /// `Ok(None)` when unset, so callers can tell "absent" from "invalid"
    fn get_opt() -> EnvResult<Option<T>> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value).map(Some),
            Err(_) => Ok(None),
        }
    }
}

pub mod core {
    use super::*;

    /// Log level for the command line tool
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "REAVITAL_LOG_LEVEL";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// Location of the persisted local storage file
    pub struct StateFile;
    impl EnvVar<PathBuf> for StateFile {
        const NAME: &'static str = "REAVITAL_STATE_FILE";
        const DEFAULT: Option<PathBuf> = None;
        const DESCRIPTION: &'static str = "Path of the JSON file holding the persisted language preference";

        fn parse(value: &str) -> EnvResult<PathBuf> {
            if value.trim().is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Path must not be empty".to_string(),
                });
            }
            Ok(PathBuf::from(value))
        }
    }
}

pub mod i18n {
    use super::*;

    /// Hard default language
    pub struct DefaultLang;
    impl EnvVar<String> for DefaultLang {
        const NAME: &'static str = "REAVITAL_DEFAULT_LANG";
        const DEFAULT: Option<String> = None;
        const DESCRIPTION: &'static str = "Language used when neither a stored preference nor a locale is available";

        fn parse(value: &str) -> EnvResult<String> {
            let value = value.trim().to_lowercase();
            if value.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Language code must not be empty".to_string(),
                });
            }
            Ok(value)
        }
    }
}

pub mod carousel {
    use super::*;

    /// Auto-advance period in milliseconds
    pub struct AutoAdvanceMs;
    impl EnvVar<u64> for AutoAdvanceMs {
        const NAME: &'static str = "REAVITAL_AUTO_ADVANCE_MS";
        const DEFAULT: Option<u64> = None;
        const DESCRIPTION: &'static str = "Carousel auto-advance period in milliseconds (100-600000)";

        fn parse(value: &str) -> EnvResult<u64> {
            let ms: u64 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: format!("Invalid number '{}'", value),
            })?;

            if !(100..=600_000).contains(&ms) {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Period {}ms out of range (100-600000)", ms),
                });
            }

            Ok(ms)
        }
    }
}

/// Markdown listing of every variable, for `--help-env`
pub fn generate_env_docs() -> String {
    let mut docs = String::from("# Environment Variables\n\n");

    docs.push_str(&format!("- `{}`: {}\n", core::LogLevel::NAME, core::LogLevel::DESCRIPTION));
    docs.push_str(&format!("- `{}`: {}\n", core::StateFile::NAME, core::StateFile::DESCRIPTION));
    docs.push_str(&format!("- `{}`: {}\n", i18n::DefaultLang::NAME, i18n::DefaultLang::DESCRIPTION));
    docs.push_str(&format!(
        "- `{}`: {}\n",
        carousel::AutoAdvanceMs::NAME,
        carousel::AutoAdvanceMs::DESCRIPTION
    ));

    docs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(core::LogLevel::parse("DEBUG").unwrap(), "debug");
        assert!(core::LogLevel::parse("loud").is_err());
    }

    #[test]
    fn test_auto_advance_range() {
        assert_eq!(carousel::AutoAdvanceMs::parse("5000").unwrap(), 5000);
        assert!(carousel::AutoAdvanceMs::parse("0").is_err());
        assert!(carousel::AutoAdvanceMs::parse("soon").is_err());
    }

    #[test]
    fn test_default_lang_normalized() {
        assert_eq!(i18n::DefaultLang::parse(" EN ").unwrap(), "en");
        assert!(i18n::DefaultLang::parse("  ").is_err());
    }

    #[test]
    fn test_docs_list_every_variable() {
        let docs = generate_env_docs();
        assert!(docs.contains("REAVITAL_LOG_LEVEL"));
        assert!(docs.contains("REAVITAL_STATE_FILE"));
        assert!(docs.contains("REAVITAL_DEFAULT_LANG"));
        assert!(docs.contains("REAVITAL_AUTO_ADVANCE_MS"));
    }
}
