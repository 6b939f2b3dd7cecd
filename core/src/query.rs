//! Query-string encoding for request parameter structs.
//!
//! Parameter structs use plain field types and treat the zero value as
//! "unset": empty strings, `0`, `false` and empty lists never reach the wire.
//! An explicit zero therefore cannot be sent.

/// Implemented by every request parameter struct.
pub trait QueryParams {
    fn append_to(&self, query: &mut QueryPairs);

    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = QueryPairs::default();
        self.append_to(&mut query);
        query.into_pairs()
    }
}

/// Ordered key/value pairs that skip zero values on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn text(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn number(&mut self, key: &str, value: u32) -> &mut Self {
        if value != 0 {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn flag(&mut self, key: &str, value: bool) -> &mut Self {
        if value {
            self.pairs.push((key.to_string(), "true".to_string()));
        }
        self
    }

    /// Sends each non-empty element as a separate `key[]=value` pair.
    pub fn list(&mut self, key: &str, values: &[String]) -> &mut Self {
        let key = format!("{key}[]");
        for value in values.iter().filter(|v| !v.is_empty()) {
            self.pairs.push((key.clone(), value.clone()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}
