use relnote_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a positive result limit
pub fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid limit '{}': {}", s, e)),
    }
}
