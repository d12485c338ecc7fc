use eyre::Result;
use eyre::WrapErr;
use eyre::eyre;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Key/value pairs read from a `KEY=VALUE` secrets file.
///
/// The format is deliberately bare: one pair per line, split on the first
/// `=`, no quoting, comments or escapes. Empty lines are skipped.
#[derive(Default, Clone)]
pub struct Secrets {
    values: HashMap<String, String>,
}

impl Secrets {
    pub fn load(path: impl AsRef<Path>) -> Result<Secrets> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read secrets file {}", path.display()))?;
        let secrets = Self::parse(&contents)
            .wrap_err_with(|| format!("Malformed secrets file {}", path.display()))?;
        debug!("Loaded {} secrets from {}", secrets.len(), path.display());
        Ok(secrets)
    }

    pub fn parse(contents: &str) -> Result<Secrets> {
        let mut values = HashMap::new();
        for (index, line) in contents.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            // Never echo the line itself, it may be a pasted secret.
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| eyre!("Line {} is not of the form KEY=VALUE", index + 1))?;
            values.insert(key.to_string(), value.to_string());
        }
        Ok(Secrets { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Secrets {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Secrets {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
