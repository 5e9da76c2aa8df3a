use std::{collections::HashMap, io};

use serde_json::ser::Formatter;

pub trait Serializable {
    fn serialize(&self) -> String;
}

/// Key-value store for one concrete [`Serializable`] type.
///
/// `get` hands back the stored type itself, not a trait object.
#[derive(Debug, Clone)]
pub struct Cache<V> {
    store: HashMap<String, V>,
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self {
            store: Default::default(),
        }
    }
}

impl<V: Serializable> Cache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<K: Into<String>>(&mut self, key: K, value: V) {
        self.store.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.store.get(key)
    }

    pub fn get_serialized(&self, key: &str) -> Option<String> {
        self.get(key).map(Serializable::serialize)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsonValue {
    pub data: serde_json::Value,
}

impl JsonValue {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }
}

/// Writes `", "` between items and `": "` after keys, and escapes everything
/// outside ascii as `\uXXXX` (utf16 surrogate pairs past the BMP).
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            for unit in c.encode_utf16(&mut [0; 2]) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

impl Serializable for JsonValue {
    fn serialize(&self) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        match serde::Serialize::serialize(&self.data, &mut ser) {
            // serde_json only ever emits utf8
            Ok(()) => String::from_utf8(buf).unwrap_or_default(),
            Err(e) => {
                log::error!("failed to serialize json value: {}", e);
                String::new()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XmlValue {
    pub tag: String,
    pub content: String,
}

impl XmlValue {
    pub fn new<T: Into<String>, C: Into<String>>(tag: T, content: C) -> Self {
        Self {
            tag: tag.into(),
            content: content.into(),
        }
    }
}

impl Serializable for XmlValue {
    fn serialize(&self) -> String {
        format!("<{0}>{1}</{0}>", self.tag, self.content)
    }
}
