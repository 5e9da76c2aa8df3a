use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    Number,
    #[default]
    Text,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub key_column: usize,
    pub key_kind: KeyKind,
    pub has_headers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            key_column: 0,
            key_kind: KeyKind::Text,
            has_headers: true,
        }
    }
}

pub fn config_path<P: AsRef<Path>>(path: P) -> String {
    format!("{}-config", path.as_ref().display())
}

pub fn load_config<P: AsRef<Path>>(path: P) -> io::Result<Config> {
    let config_path = config_path(path);
    match File::open(&config_path) {
        Ok(f) => {
            let file = BufReader::new(f);
            Ok(serde_json::from_reader(file).unwrap_or_else(|e| {
                log::warn!("ignoring malformed {}: {}", config_path, e);
                Config::default()
            }))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

pub fn store_config<W>(writer: W, config: &Config) -> io::Result<()>
where
    W: Write,
{
    let file = BufWriter::new(writer);
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_json_fills_in_defaults() {
        let c: Config = serde_json::from_str(r#"{ "key_kind": "number" }"#).unwrap();
        assert_eq!(
            c,
            Config {
                key_kind: KeyKind::Number,
                ..Default::default()
            }
        );
    }

    #[test]
    fn stored_config_reads_back() {
        let config = Config {
            key_column: 2,
            key_kind: KeyKind::Number,
            has_headers: false,
        };
        let mut buf = Vec::new();
        store_config(&mut buf, &config).unwrap();
        let back: Config = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_file_is_default() {
        let path = std::env::temp_dir().join("ranked-config-test-does-not-exist");
        assert_eq!(load_config(path).unwrap(), Config::default());
    }
}
