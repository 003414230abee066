use anyhow::Result;
use serde::Deserialize;

use crate::trello;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub trello: trello::Params,
}

impl Config {
    /// Reads `file_name` if it exists, then `TRELLO_*` environment variables
    /// on top of it.
    pub fn from_file(file_name: &str) -> Result<Self> {
        let conf = config::Config::builder()
            .add_source(config::File::with_name(file_name).required(false))
            .add_source(config::Environment::with_prefix("TRELLO"))
            .build()?;
        Ok(conf.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use secrecy::ExposeSecret;
    use std::io::Write;

    #[test]
    fn reads_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "api_key = \"file-key\"\ntoken = \"file-token\"\nbase_url = \"http://localhost:9000/1\""
        )
        .unwrap();

        let conf = Config::from_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(conf.trello.api_key.expose_secret(), "file-key");
        assert_eq!(conf.trello.token.expose_secret(), "file-token");
        assert_eq!(
            conf.trello.base_url.as_deref(),
            Some("http://localhost:9000/1")
        );
    }

    #[test]
    fn missing_credentials() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "base_url = \"http://localhost:9000/1\"").unwrap();

        assert!(Config::from_file(file.path().to_str().unwrap()).is_err());
    }
}
