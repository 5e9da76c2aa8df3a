pub mod cache;
pub mod compare;
pub mod config;
pub mod entry;
pub mod sorted_vec;

pub use cache::{Cache, JsonValue, Serializable, XmlValue};
pub use compare::{Comparable, Comparator, CompareTo, Name, Score};
pub use sorted_vec::SortedVec;
