use ld_request_header::Params;


/// Collects the query of a request target into [Params].
///
/// Accepts absolute URLs as well as origin-form targets like `/search?q=x`.
/// Pairs are percent-decoded, a repeated key keeps its last value.
pub fn params_from_target(target: &str) -> Result<Params, url::ParseError> {
    let url = if is_relative(target) {
        let base = url::Url::parse("http://localhost/")?;
        base.join(target)?
    } else {
        url::Url::parse(target)?
    };
    let params = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    Ok(params)
}

fn is_relative(target: &str) -> bool {
    target.starts_with("/")
}
