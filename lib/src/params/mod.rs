use indexmap::IndexMap;


/// Query parameters of a single request.
///
/// Keys keep the spelling they were inserted with, lookups ignore ASCII case.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Params {
    values: IndexMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Inserts a parameter. Only an identically spelled key is replaced, keys
    /// differing in case are kept apart.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Exact match first, then the first key equal ignoring ASCII case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .or_else(|| {
                self.values
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(key))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value unless missing or blank
    pub fn present(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// Query flags are only set by the literal `true`.
    pub fn is_true(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    /// Copies every parameter whose key is not in `excluded`
    pub fn without(&self, excluded: &[&str]) -> IndexMap<String, String> {
        self.values
            .iter()
            .filter(|(k, _)| !excluded.iter().any(|e| e.eq_ignore_ascii_case(k)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl From<IndexMap<String, String>> for Params {
    fn from(value: IndexMap<String, String>) -> Self {
        value.into_iter().collect()
    }
}
