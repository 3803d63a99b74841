use indexmap::IndexMap;

use crate::params::Params;
use crate::request::RequestContext;


const SUBAUTHORITY: &str = "subauthority";
const LANG: &str = "lang";
const CONTEXT: &str = "context";
const PERFORMANCE_DATA: &str = "performance_data";
const FORMAT: &str = "format";

const SEARCH_PARAMS: [&str; 4] = [SUBAUTHORITY, LANG, CONTEXT, PERFORMANCE_DATA];
const FETCH_PARAMS: [&str; 4] = [SUBAUTHORITY, LANG, FORMAT, PERFORMANCE_DATA];

/// Defaults applied when a request leaves a value open
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HeaderOptions {
    default_format: String,
}

impl HeaderOptions {
    pub const DEFAULT_FORMAT: &'static str = "json";

    pub fn new(default_format: impl Into<String>) -> Self {
        Self {
            default_format: default_format.into(),
        }
    }

    pub fn default_format(&self) -> &str {
        &self.default_format
    }
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FORMAT)
    }
}

/// Turns the parameters of a search or fetch request into the header expected by
/// the linked-data lookup client.
///
/// Building a header never fails. Missing parameters fall back to defaults and
/// parameters the client does not know about end up in the [Replacements].
pub struct RequestHeaderService<'a, R: RequestContext + ?Sized> {
    request: &'a R,
    params: &'a Params,
    options: HeaderOptions,
}

impl<'a, R: RequestContext + ?Sized> RequestHeaderService<'a, R> {
    pub fn new(request: &'a R, params: &'a Params) -> Self {
        Self::with_options(request, params, HeaderOptions::default())
    }

    pub fn with_options(request: &'a R, params: &'a Params, options: HeaderOptions) -> Self {
        Self {
            request,
            params,
            options,
        }
    }

    /// Header for a term search
    pub fn search_header(&self) -> SearchHeader {
        let _span = tracing::debug_span!("[RequestHeaderService(search)]").entered();
        let header = SearchHeader {
            subauthority: self.subauthority(),
            user_language: self.user_language(),
            context: self.params.is_true(CONTEXT),
            performance_data: self.params.is_true(PERFORMANCE_DATA),
            replacements: self.replacements(&SEARCH_PARAMS),
        };
        tracing::debug!(
            replacements = header.replacements.len(),
            "search header built"
        );
        header
    }

    /// Header for fetching a single term
    pub fn fetch_header(&self) -> FetchHeader {
        let _span = tracing::debug_span!("[RequestHeaderService(fetch)]").entered();
        let format = self
            .params
            .get(FORMAT)
            .unwrap_or(self.options.default_format())
            .to_string();
        let header = FetchHeader {
            subauthority: self.subauthority(),
            user_language: self.user_language(),
            format,
            performance_data: self.params.is_true(PERFORMANCE_DATA),
            replacements: self.replacements(&FETCH_PARAMS),
        };
        tracing::debug!(
            format = %header.format,
            replacements = header.replacements.len(),
            "fetch header built"
        );
        header
    }

    fn subauthority(&self) -> Option<String> {
        self.params.get(SUBAUTHORITY).map(String::from)
    }

    /// An explicit `lang` parameter wins over the language negotiated by the client.
    fn user_language(&self) -> Option<Vec<String>> {
        let language = self.params.present(LANG).or_else(|| {
            self.request
                .accept_language()
                .filter(|l| !l.trim().is_empty())
        })?;
        Some(vec![language.to_string()])
    }

    fn replacements(&self, recognized: &[&str]) -> Replacements {
        Replacements::new(self.params.without(recognized))
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchHeader {
    pub subauthority: Option<String>,
    pub user_language: Option<Vec<String>>,
    pub context: bool,
    pub performance_data: bool,
    pub replacements: Replacements,
}

#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FetchHeader {
    pub subauthority: Option<String>,
    pub user_language: Option<Vec<String>>,
    pub format: String,
    pub performance_data: bool,
    pub replacements: Replacements,
}

impl FetchHeader {
    /// Media type to request for [FetchHeader::format]
    pub fn content_type(&self) -> &'static str {
        match self.format.as_str() {
            "jsonld" => "application/ld+json",
            "n3" => "text/n3",
            "ntriples" => "application/n-triples",
            _ => "application/json",
        }
    }
}

/// Values substituted into the query template of the downstream client
#[derive(Debug, PartialEq, Eq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Replacements(IndexMap<String, String>);

impl Replacements {
    pub fn new(values: IndexMap<String, String>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Replacements
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
