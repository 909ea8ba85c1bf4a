//! Runtime settings: defaults, then environment, then command-line flags.

use std::path::PathBuf;

use stockkeep_infra::DEFAULT_INVENTORY_PATH;
use stockkeep_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

pub const FILE_ENV: &str = "STOCKKEEP_FILE";
pub const LOW_THRESHOLD_ENV: &str = "STOCKKEEP_LOW_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inventory_path: PathBuf,
    pub low_threshold: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.
    ///
    /// Unusable values are reported and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(path) = lookup(FILE_ENV).filter(|p| !p.trim().is_empty()) {
            settings.inventory_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_THRESHOLD_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(v) if v >= 0 => settings.low_threshold = v,
                _ => tracing::warn!(
                    "{LOW_THRESHOLD_ENV}={raw:?} is not a non-negative integer; using {}",
                    settings.low_threshold
                ),
            }
        }

        settings
    }

    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.inventory_path = file;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn defaults_without_env() {
        let settings = Settings::from_lookup(lookup(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.inventory_path, PathBuf::from("inventory.json"));
        assert_eq!(settings.low_threshold, 5);
    }

    #[test]
    fn env_overrides_defaults() {
        let vars = [(FILE_ENV, "/tmp/stock.json"), (LOW_THRESHOLD_ENV, "12")];
        let settings = Settings::from_lookup(lookup(&vars));
        assert_eq!(settings.inventory_path, PathBuf::from("/tmp/stock.json"));
        assert_eq!(settings.low_threshold, 12);
    }

    #[test]
    fn bad_threshold_falls_back() {
        let settings = Settings::from_lookup(lookup(&[(LOW_THRESHOLD_ENV, "-3")]));
        assert_eq!(settings.low_threshold, DEFAULT_LOW_STOCK_THRESHOLD);

        let settings = Settings::from_lookup(lookup(&[(LOW_THRESHOLD_ENV, "many")]));
        assert_eq!(settings.low_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }

    #[test]
    fn flag_wins_over_env() {
        let settings = Settings::from_lookup(lookup(&[(FILE_ENV, "env.json")]))
            .with_file(Some(PathBuf::from("flag.json")));
        assert_eq!(settings.inventory_path, PathBuf::from("flag.json"));

        let settings = Settings::from_lookup(lookup(&[(FILE_ENV, "env.json")])).with_file(None);
        assert_eq!(settings.inventory_path, PathBuf::from("env.json"));
    }
}
