use attendant::attention::viewed_workflow_id;

#[test]
fn detail_routes_yield_the_workflow_id() {
    assert_eq!(viewed_workflow_id("/workflows/42"), Some(42));
    assert_eq!(viewed_workflow_id("/workflows/old/42"), Some(42));
    assert_eq!(viewed_workflow_id("/workflows/42/clarification"), Some(42));
    assert_eq!(viewed_workflow_id("/workflows/old/42/steps"), Some(42));
}

#[test]
fn non_workflow_routes_yield_none() {
    assert_eq!(viewed_workflow_id(""), None);
    assert_eq!(viewed_workflow_id("/"), None);
    assert_eq!(viewed_workflow_id("/workflows"), None);
    assert_eq!(viewed_workflow_id("/workflows/new"), None);
    assert_eq!(viewed_workflow_id("/workflows/old/latest"), None);
    assert_eq!(viewed_workflow_id("/projects/3/workflows/42"), None);
}

#[test]
fn malformed_ids_yield_none() {
    assert_eq!(viewed_workflow_id("/workflows/4x2"), None);
    assert_eq!(viewed_workflow_id("/workflows/-1"), None);
    // Larger than u64: parse overflow is a miss, not a panic.
    assert_eq!(viewed_workflow_id("/workflows/99999999999999999999999"), None);
}
