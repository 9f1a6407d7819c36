/// Blank profile names select the unscoped config file.
pub fn resolve_profile(requested: Option<&str>) -> Option<String> {
    let trimmed = requested?.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_names() {
        assert_eq!(resolve_profile(Some(" work ")).as_deref(), Some("work"));
        assert_eq!(resolve_profile(Some("   ")), None);
        assert_eq!(resolve_profile(None), None);
    }
}
