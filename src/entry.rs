use std::{fmt, io::Write, path::Path};

use anyhow::{anyhow, Context};

use crate::{
    compare::{from_ordering, Comparable},
    config::{Config, KeyKind},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Number(i64),
    Text(String),
}

impl Comparable for Key {
    fn compare_to(&self, other: &Self) -> i32 {
        use Key::*;
        match (self, other) {
            (Number(a), Number(b)) => from_ordering(a.cmp(b)),
            (Text(a), Text(b)) => from_ordering(a.cmp(b)),
            (Number(_), Text(_)) => -1,
            (Text(_), Number(_)) => 1,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Number(n) => write!(f, "{}", n),
            Key::Text(s) => f.write_str(s),
        }
    }
}

/// One csv row, ordered by one of its columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub key: Key,
    pub fields: Vec<String>,
}

impl Comparable for Entry {
    fn compare_to(&self, other: &Self) -> i32 {
        self.key.compare_to(&other.key)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(", "))
    }
}

impl Entry {
    pub fn from_fields(fields: Vec<String>, config: &Config) -> Result<Self, String> {
        let raw = fields
            .get(config.key_column)
            .ok_or_else(|| format!("no column {}", config.key_column))?;
        let key = match config.key_kind {
            KeyKind::Number => raw
                .trim()
                .parse()
                .map(Key::Number)
                .map_err(|_| format!("{:?} is not a whole number", raw))?,
            KeyKind::Text => Key::Text(raw.clone()),
        };
        Ok(Self { key, fields })
    }
}

/// Rows of one csv file, plus its header line when the config says it has one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub headers: Option<Vec<String>>,
    pub entries: Vec<Entry>,
}

pub fn load_entries<P: AsRef<Path>>(path: P, config: &Config) -> anyhow::Result<Table> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let table = read_entries(reader, config)?;
    log::info!("loaded {} rows from {}", table.entries.len(), path.display());
    Ok(table)
}

/// Errors name the file line the bad record starts on.
pub fn read_entries<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    config: &Config,
) -> anyhow::Result<Table> {
    let headers = if config.has_headers {
        Some(reader.headers()?.iter().map(String::from).collect())
    } else {
        None
    };
    let entries = reader
        .records()
        .map(|record| {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let fields = record.iter().map(String::from).collect();
            Entry::from_fields(fields, config).map_err(|e| anyhow!("line {}: {}", line, e))
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Table { headers, entries })
}

pub fn store_entries<'a, W, I>(
    writer: W,
    headers: Option<&[String]>,
    entries: I,
) -> csv::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    let mut w = csv::WriterBuilder::new().flexible(true).from_writer(writer);
    if let Some(headers) = headers {
        w.write_record(headers)?;
    }
    for e in entries {
        w.write_record(&e.fields)?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn reader(data: &str, has_headers: bool) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .flexible(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn numeric_keys() {
        let config = Config {
            key_column: 1,
            key_kind: KeyKind::Number,
            ..Default::default()
        };
        let table = read_entries(reader("name,score\na,50\nb, 30\n", true), &config).unwrap();
        let keys: Vec<_> = table.entries.iter().map(|e| e.key.clone()).collect();
        assert_eq!(keys, [Key::Number(50), Key::Number(30)]);
        assert_eq!(
            table.headers,
            Some(vec!["name".to_string(), "score".to_string()])
        );
    }

    #[test]
    fn bad_number_names_the_line() {
        let config = Config {
            key_kind: KeyKind::Number,
            has_headers: false,
            ..Default::default()
        };
        let err = read_entries(reader("1\nx\n", false), &config).unwrap_err();
        assert!(err.to_string().starts_with("line 2:"), "{}", err);
    }

    #[test]
    fn short_row_is_an_error() {
        let config = Config {
            key_column: 3,
            has_headers: false,
            ..Default::default()
        };
        let err = read_entries(reader("a,b\n", false), &config).unwrap_err();
        assert_eq!(err.to_string(), "line 1: no column 3");
    }

    #[test]
    fn header_counts_as_a_line() {
        let config = Config {
            key_kind: KeyKind::Number,
            ..Default::default()
        };
        let err = read_entries(reader("score\n1\n2\nx\n", true), &config).unwrap_err();
        assert!(err.to_string().starts_with("line 4:"), "{}", err);
    }

    #[test]
    fn no_headers_when_config_has_none() {
        let config = Config {
            has_headers: false,
            ..Default::default()
        };
        let table = read_entries(reader("a\nb\n", false), &config).unwrap();
        assert_eq!(table.headers, None);
        assert_eq!(table.entries.len(), 2);
    }

    #[test]
    fn numbers_before_text() {
        assert!(Key::Number(i64::MAX).compare_to(&Key::Text(String::new())) < 0);
        assert!(Key::Text("a".into()).compare_to(&Key::Text("b".into())) < 0);
    }

    #[test]
    fn store_writes_fields_only() {
        let e = Entry::from_fields(vec!["b".into(), "2".into()], &Config::default()).unwrap();
        let mut buf = Vec::new();
        store_entries(&mut buf, None, [&e]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "b,2\n");
    }

    #[test]
    fn exported_headers_survive_a_reload() {
        let config = Config {
            key_column: 1,
            key_kind: KeyKind::Number,
            ..Default::default()
        };
        let table = read_entries(reader("name,score\na,50\nb,30\n", true), &config).unwrap();
        let mut buf = Vec::new();
        store_entries(&mut buf, table.headers.as_deref(), &table.entries).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert_eq!(csv, "name,score\na,50\nb,30\n");

        let again = read_entries(reader(&csv, true), &config).unwrap();
        assert_eq!(again, table);
    }
}
