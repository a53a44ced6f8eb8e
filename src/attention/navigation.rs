/// Extract the workflow id the user is currently viewing from a navigation
/// path. Recognizes the detail route `/workflows/<id>` and the legacy alias
/// `/workflows/old/<id>`, with or without a trailing tab segment; any other
/// path means no workflow is being viewed.
pub fn viewed_workflow_id(path: &str) -> Option<u64> {
    let rest = path.strip_prefix("/workflows/")?;
    let rest = rest.strip_prefix("old/").unwrap_or(rest);
    let digits = rest.split('/').next()?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_parse() {
        assert_eq!(viewed_workflow_id("/workflows/42"), Some(42));
        assert_eq!(viewed_workflow_id("/workflows/old/7"), Some(7));
        assert_eq!(viewed_workflow_id("/workflows/42/steps"), Some(42));
    }

    #[test]
    fn non_detail_routes_do_not_parse() {
        assert_eq!(viewed_workflow_id("/"), None);
        assert_eq!(viewed_workflow_id("/workflows"), None);
        assert_eq!(viewed_workflow_id("/workflows/"), None);
        assert_eq!(viewed_workflow_id("/workflows/new"), None);
        assert_eq!(viewed_workflow_id("/workflows/old/"), None);
        assert_eq!(viewed_workflow_id("/projects/42"), None);
        assert_eq!(viewed_workflow_id("workflows/42"), None);
    }
}
