use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_SECRETS_FILE: &str = "secrets.env";
pub const SECRETS_FILE_VAR: &str = "LIKED_ARTISTS_SECRETS";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub secrets_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings::with_secrets_override(std::env::var_os(SECRETS_FILE_VAR))
    }

    fn with_secrets_override(secrets_path: Option<OsString>) -> Settings {
        Settings {
            secrets_path: secrets_path
                .filter(|path| !path.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRETS_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_secrets_env() {
        let settings = Settings::with_secrets_override(None);
        assert_eq!(settings.secrets_path, PathBuf::from("secrets.env"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let settings = Settings::with_secrets_override(Some(OsString::new()));
        assert_eq!(settings.secrets_path, PathBuf::from("secrets.env"));
    }

    #[test]
    fn override_wins() {
        let settings = Settings::with_secrets_override(Some("/etc/liked/secrets.env".into()));
        assert_eq!(settings.secrets_path, PathBuf::from("/etc/liked/secrets.env"));
    }
}
