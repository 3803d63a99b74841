use ld_request_header::{Headers, Params, RequestHeaderService};

fn request_with_language(language: &str) -> Headers {
    let mut headers = Headers::empty();
    headers.insert("Host", "localhost");
    headers.insert("Accept-Language", language);
    headers
}

#[test]
pub fn lang_param_should_override_negotiated_language_for_both_operations() {
    // Arrange
    let request = request_with_language("de");
    let params: Params = [("LANG", "sp")].into_iter().collect();
    let sut = RequestHeaderService::new(&request, &params);
    // Act
    let search = sut.search_header();
    let fetch = sut.fetch_header();
    // Assert
    assert_eq!(Some(vec!["sp".to_string()]), search.user_language);
    assert_eq!(Some(vec!["sp".to_string()]), fetch.user_language);
    assert!(search.replacements.is_empty());
    assert!(fetch.replacements.is_empty());
}

#[test]
pub fn replacements_should_keep_every_unrecognized_param_verbatim() {
    // Arrange
    let request = Headers::empty();
    let params: Params = [
        ("subauthority", "person"),
        ("maxRecords", "4"),
        ("startRecord", "11"),
        ("q", "Twain, Mark"),
    ]
    .into_iter()
    .collect();
    let sut = RequestHeaderService::new(&request, &params);
    // Act
    let header = sut.search_header();
    // Assert
    let replacements: Vec<(&str, &str)> = header.replacements.iter().collect();
    assert_eq!(
        vec![
            ("maxRecords", "4"),
            ("startRecord", "11"),
            ("q", "Twain, Mark")
        ],
        replacements
    );
    assert_eq!(Some("person"), header.subauthority.as_deref());
    assert_eq!(Some("11"), header.replacements.get("startRecord"));
    assert!(params.contains_key("SUBAUTHORITY"));
}

#[test]
pub fn header_service_should_accept_request_context_trait_objects() {
    // Arrange
    let headers = request_with_language("en-US,en;q=0.5");
    let request: &dyn ld_request_header::RequestContext = &headers;
    let params = Params::new();
    let sut = RequestHeaderService::new(request, &params);
    // Act
    let header = sut.fetch_header();
    // Assert
    assert_eq!(
        Some(vec!["en-US,en;q=0.5".to_string()]),
        header.user_language
    );
}

#[test]
pub fn large_query_should_keep_every_distinct_param() {
    // Arrange
    let request = Headers::empty();
    let params: Params = (0..50_000)
        .map(|i| (format!("p{i}"), i.to_string()))
        .chain([("format".to_string(), "n3".to_string())])
        .collect();
    let sut = RequestHeaderService::new(&request, &params);
    // Act
    let header = sut.fetch_header();
    // Assert
    assert_eq!(50_000, header.replacements.len());
    assert_eq!(Some("49999"), header.replacements.get("p49999"));
    assert_eq!("n3", header.format);
}
