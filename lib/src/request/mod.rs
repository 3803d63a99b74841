use std::fmt::Display;

use indexmap::IndexMap;


/// The parts of an incoming request a header build depends on.
pub trait RequestContext {
    /// Raw value of the `Accept-Language` header. Lists are not split.
    fn accept_language(&self) -> Option<&str>;
}

impl<T: RequestContext + ?Sized> RequestContext for &T {
    fn accept_language(&self) -> Option<&str> {
        (**self).accept_language()
    }
}

/// Request headers as handed over by the transport layer
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Headers {
    headers: IndexMap<String, String>,
}

impl Headers {
    pub fn new(headers: IndexMap<String, String>) -> Self {
        Self { headers }
    }

    pub fn empty() -> Self {
        Self::new(IndexMap::new())
    }

    /// Replaces an existing header whose name matches ignoring case
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let existing = self
            .headers
            .keys()
            .position(|k| k.eq_ignore_ascii_case(&key));
        match existing {
            Some(i) => {
                self.headers.shift_remove_index(i);
                self.headers.shift_insert(i, key, value.into());
            }
            None => {
                self.headers.insert(key, value.into());
            }
        }
    }

    /// Case-insensitive header lookup
    pub fn get(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn accept_language(&self) -> Option<&str> {
        self.get("accept-language")
    }
}

impl RequestContext for Headers {
    fn accept_language(&self) -> Option<&str> {
        Headers::accept_language(self)
    }
}

impl Display for Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (k, v) in &self.headers {
            write!(f, "{k}: {v}\r\n")?;
        }
        Ok(())
    }
}
