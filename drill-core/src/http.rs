//! HTTP concepts: status codes, methods, URLs, headers and REST routes.
//!
//! Nothing here touches the network. These functions model the vocabulary
//! a client needs before making its first request.

use drill_types::{
    DrillError, HeaderCategories, HttpMethod, RestEndpoints, StatusCategory, StatusInfo, UrlParts,
};
use indexmap::IndexMap;
use url::Url;

/// Class of a status code by its hundreds digit.
pub fn categorize_status_code(code: u16) -> StatusCategory {
    match code {
        200..=299 => StatusCategory::Success,
        300..=399 => StatusCategory::Redirect,
        400..=499 => StatusCategory::ClientError,
        500..=599 => StatusCategory::ServerError,
        _ => StatusCategory::Unknown,
    }
}

/// Reason phrase and description for a status code.
///
/// Common codes get their standard reason phrase; any other code gets the
/// generic wording for its class.
pub fn interpret_status_code(code: u16) -> StatusInfo {
    let category = categorize_status_code(code);
    let (meaning, description) = match code {
        200 => ("OK", "The request succeeded"),
        201 => ("Created", "The request succeeded and a new resource was created"),
        204 => ("No Content", "The request succeeded and there is no body to return"),
        301 => ("Moved Permanently", "The resource has a new permanent URL"),
        302 => ("Found", "The resource is temporarily at a different URL"),
        304 => ("Not Modified", "The cached copy is still valid"),
        400 => ("Bad Request", "The server could not understand the request"),
        401 => ("Unauthorized", "Authentication is required or has failed"),
        403 => ("Forbidden", "The client is not allowed to access this resource"),
        404 => ("Not Found", "The requested resource was not found"),
        405 => ("Method Not Allowed", "The resource does not support this method"),
        409 => ("Conflict", "The request conflicts with the current state of the resource"),
        422 => ("Unprocessable Content", "The request was well-formed but had invalid data"),
        429 => ("Too Many Requests", "The client has been rate limited"),
        500 => ("Internal Server Error", "The server hit an unexpected condition"),
        502 => ("Bad Gateway", "An upstream server sent an invalid response"),
        503 => ("Service Unavailable", "The server is overloaded or down for maintenance"),
        504 => ("Gateway Timeout", "An upstream server did not respond in time"),
        _ => match category {
            StatusCategory::Success => ("Success", "The request succeeded"),
            StatusCategory::Redirect => ("Redirect", "The client must look elsewhere for the resource"),
            StatusCategory::ClientError => ("Client Error", "The request was invalid"),
            StatusCategory::ServerError => ("Server Error", "The server failed to fulfil a valid request"),
            StatusCategory::Unknown => ("Unknown", "Not a standard success, redirect or error code"),
        },
    };

    StatusInfo {
        code,
        category,
        meaning: meaning.to_string(),
        description: description.to_string(),
    }
}

/// Keywords mapped to the method they imply, checked in order.
const ACTION_KEYWORDS: &[(&str, HttpMethod)] = &[
    ("delete", HttpMethod::Delete),
    ("remove", HttpMethod::Delete),
    ("patch", HttpMethod::Patch),
    ("update", HttpMethod::Put),
    ("modify", HttpMethod::Put),
    ("replace", HttpMethod::Put),
    ("change", HttpMethod::Put),
    ("edit", HttpMethod::Put),
    ("create", HttpMethod::Post),
    ("add", HttpMethod::Post),
    ("new", HttpMethod::Post),
    ("submit", HttpMethod::Post),
    ("upload", HttpMethod::Post),
    ("get", HttpMethod::Get),
    ("retrieve", HttpMethod::Get),
    ("fetch", HttpMethod::Get),
    ("read", HttpMethod::Get),
    ("list", HttpMethod::Get),
    ("search", HttpMethod::Get),
    ("find", HttpMethod::Get),
    ("view", HttpMethod::Get),
];

/// Guess the method for an action description such as `"remove user"`.
///
/// Words are matched whole and case-insensitively; `None` if no keyword
/// appears.
pub fn determine_http_method(action: &str) -> Option<HttpMethod> {
    let words: Vec<String> = action
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();

    ACTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| words.iter().any(|w| w == keyword))
        .map(|&(_, method)| method)
}

/// Whether `method` names one of the seven standard methods, any case.
pub fn validate_http_method(method: &str) -> bool {
    method.parse::<HttpMethod>().is_ok()
}

/// Every method with the purpose it usually serves.
pub fn list_http_methods() -> Vec<(HttpMethod, &'static str)> {
    HttpMethod::ALL
        .into_iter()
        .map(|method| {
            let purpose = match method {
                HttpMethod::Get => "retrieve data",
                HttpMethod::Post => "create data",
                HttpMethod::Put => "replace data",
                HttpMethod::Patch => "partially update data",
                HttpMethod::Delete => "delete data",
                HttpMethod::Head => "retrieve headers only",
                HttpMethod::Options => "list supported methods",
            };
            (method, purpose)
        })
        .collect()
}

/// Encode `params` as `k=v` pairs joined by `&`, without a leading `?`.
pub fn build_query_string<K, V, I>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: ToString,
{
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key.as_ref(), &value.to_string());
    }
    serializer.finish()
}

/// Split an absolute URL into protocol, domain, path and parameters.
pub fn parse_url_components(raw: &str) -> Result<UrlParts, DrillError> {
    let url = Url::parse(raw).map_err(|e| DrillError::InvalidUrl(format!("{raw}: {e}")))?;
    let domain = url
        .host_str()
        .ok_or_else(|| DrillError::InvalidUrl(format!("{raw}: no host")))?
        .to_string();

    Ok(UrlParts {
        protocol: url.scheme().to_string(),
        domain,
        path: url.path().to_string(),
        parameters: url.query_pairs().into_owned().collect(),
    })
}

/// Request headers for the supplied values only.
///
/// An auth token is sent as a bearer credential.
pub fn build_request_headers(
    content_type: Option<&str>,
    auth_token: Option<&str>,
    user_agent: Option<&str>,
) -> IndexMap<String, String> {
    let mut headers = IndexMap::new();
    if let Some(content_type) = content_type {
        headers.insert("Content-Type".to_string(), content_type.to_string());
    }
    if let Some(token) = auth_token {
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));
    }
    if let Some(agent) = user_agent {
        headers.insert("User-Agent".to_string(), agent.to_string());
    }
    headers
}

/// Group header names by purpose, keeping their input order.
pub fn categorize_headers<'a, I>(names: I) -> HeaderCategories
where
    I: IntoIterator<Item = &'a str>,
{
    let mut categories = HeaderCategories::default();
    for name in names {
        let lower = name.to_ascii_lowercase();
        let bucket = if lower == "authorization"
            || lower.contains("api-key")
            || lower.contains("token")
            || lower == "cookie"
            || lower == "www-authenticate"
        {
            &mut categories.authentication
        } else if lower.starts_with("content-") || lower == "accept" || lower.starts_with("accept-") {
            &mut categories.content
        } else if matches!(
            lower.as_str(),
            "cache-control" | "etag" | "expires" | "last-modified" | "if-none-match" | "if-modified-since" | "pragma" | "age"
        ) {
            &mut categories.caching
        } else {
            &mut categories.other
        };
        bucket.push(name.to_string());
    }
    categories
}

/// The conventional REST routes for a resource collection.
pub fn create_rest_endpoints(resource: &str) -> RestEndpoints {
    let base = format!("/{}", resource.trim_matches('/'));
    RestEndpoints {
        list_all: format!("{} {base}", HttpMethod::Get),
        get_one: format!("{} {base}/{{id}}", HttpMethod::Get),
        create: format!("{} {base}", HttpMethod::Post),
        update: format!("{} {base}/{{id}}", HttpMethod::Put),
        delete: format!("{} {base}/{{id}}", HttpMethod::Delete),
    }
}
