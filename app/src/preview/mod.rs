use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;

use ld_request_header::{HeaderOptions, Headers, RequestHeaderService};

use crate::query;


#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Search,
    Fetch,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operation = match self {
            Operation::Search => "search",
            Operation::Fetch => "fetch",
        };
        write!(f, "{operation}")
    }
}

impl FromStr for Operation {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Operation::Search),
            "fetch" => Ok(Operation::Fetch),
            _ => Err(UsageError::UnknownOperation(s.into())),
        }
    }
}

/// A header build requested by the caller
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PreviewRequest {
    operation: Operation,
    target: String,
    accept_language: Option<String>,
}

impl PreviewRequest {
    pub fn new(
        operation: Operation,
        target: impl Into<String>,
        accept_language: Option<String>,
    ) -> Self {
        Self {
            operation,
            target: target.into(),
            accept_language,
        }
    }

    /// Reads `<search|fetch> <request-target> [accept-language]`
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, UsageError> {
        let operation: Operation = args.next().ok_or(UsageError::MissingOperation)?.parse()?;
        let target = args.next().ok_or(UsageError::MissingTarget)?;
        let accept_language = args.next();
        Ok(Self::new(operation, target, accept_language))
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::empty();
        if let Some(language) = &self.accept_language {
            headers.insert("Accept-Language", language.clone());
        }
        headers
    }
}

/// Builds the header for `request` the way a controller would before handing it to
/// the lookup client.
pub fn render(
    request: &PreviewRequest,
    options: HeaderOptions,
) -> Result<serde_json::Value, UsageError> {
    let params = query::params_from_target(&request.target).map_err(UsageError::InvalidTarget)?;
    let headers = request.headers();
    tracing::debug!("Incoming Request:\r\n{headers}");
    let service = RequestHeaderService::with_options(&headers, &params, options);
    let header = match request.operation {
        Operation::Search => serde_json::to_value(service.search_header()),
        Operation::Fetch => serde_json::to_value(service.fetch_header()),
    }
    .map_err(UsageError::Serialization)?;
    Ok(header)
}

#[derive(Debug)]
pub enum UsageError {
    MissingOperation,
    UnknownOperation(String),
    MissingTarget,
    InvalidTarget(url::ParseError),
    Serialization(serde_json::Error),
}

impl Error for UsageError {}
impl Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageError::MissingOperation => write!(f, "No operation given; use search or fetch"),
            UsageError::UnknownOperation(op) => {
                write!(f, "Unknown operation '{op}'; use search or fetch")
            }
            UsageError::MissingTarget => write!(f, "No request target given"),
            UsageError::InvalidTarget(e) => write!(f, "Request target is not a valid url: {e}"),
            UsageError::Serialization(e) => write!(f, "Failed to serialize header: {e}"),
        }
    }
}
