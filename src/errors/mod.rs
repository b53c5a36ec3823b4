use anyhow::Context as _;

/// Add context to document load errors
pub fn load_context(document: &str) -> String {
    format!("Failed to load document: {}", document)
}

/// Add context to document parse errors
pub fn parse_context(document: &str) -> String {
    format!("Failed to parse document: {}", document)
}

/// Add context to document validation errors
pub fn validate_context(document: &str) -> String {
    format!("Invalid document: {}", document)
}

/// Wrap result with load context
pub fn with_load_context<T, E>(result: Result<T, E>, document: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(load_context(document))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, document: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(document))
}
