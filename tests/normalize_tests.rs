//! Reply normalisation unit tests

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use unreal_mcp_actors::response::{
        normalize, remote_failure, NormalizeMode, Normalized, ReplyShape,
    };
    use unreal_mcp_actors::ToolError;

    fn items(raw: Option<&Value>, mode: &NormalizeMode) -> Vec<Value> {
        normalize(raw, mode).unwrap().into_items()
    }

    // -----------------------------------------------------------------------
    // Shape detection
    // -----------------------------------------------------------------------

    #[test]
    fn empty_shapes_are_detected() {
        assert_eq!(ReplyShape::detect(None), ReplyShape::Empty);
        for raw in [json!(null), json!({}), json!([]), json!("")] {
            assert_eq!(ReplyShape::detect(Some(&raw)), ReplyShape::Empty, "{}", raw);
        }
    }

    #[test]
    fn result_wrapper_without_content_falls_through_to_content() {
        let raw = json!({"result": {"status": "ok"}, "content": ["B"]});
        assert_eq!(ReplyShape::detect(Some(&raw)), ReplyShape::Content(&json!(["B"])));
    }

    #[test]
    fn non_object_reply_is_unrecognized() {
        let raw = json!(["A"]);
        assert_eq!(ReplyShape::detect(Some(&raw)), ReplyShape::Unrecognized(&raw));
    }

    // -----------------------------------------------------------------------
    // list_content
    // -----------------------------------------------------------------------

    #[test]
    fn list_content_on_nothing_is_empty() {
        assert!(items(None, &NormalizeMode::ListContent).is_empty());
        assert!(items(Some(&json!({})), &NormalizeMode::ListContent).is_empty());
    }

    #[test]
    fn list_content_reads_nested_and_flat_forms() {
        let nested = json!({"result": {"content": ["A", "B"]}});
        let flat = json!({"content": ["A", "B"]});
        assert_eq!(items(Some(&nested), &NormalizeMode::ListContent), vec![json!("A"), json!("B")]);
        assert_eq!(items(Some(&flat), &NormalizeMode::ListContent), vec![json!("A"), json!("B")]);
    }

    #[test]
    fn nested_content_wins_over_flat_content() {
        let both = json!({
            "result": {"content": [{"name": "Nested"}]},
            "content": [{"name": "Flat"}],
        });
        assert_eq!(
            items(Some(&both), &NormalizeMode::ListContent),
            vec![json!({"name": "Nested"})]
        );
    }

    #[test]
    fn unrecognized_shape_yields_no_items() {
        let raw = json!({"actors": ["X"]});
        assert!(items(Some(&raw), &NormalizeMode::ListContent).is_empty());
        assert!(items(Some(&json!(42)), &NormalizeMode::ListContent).is_empty());
    }

    #[test]
    fn non_list_content_is_malformed() {
        let raw = json!({"content": "not a list"});
        let err = normalize(Some(&raw), &NormalizeMode::ListContent).unwrap_err();
        assert!(matches!(err, ToolError::MalformedReply { .. }));
        assert_eq!(NormalizeMode::ListContent.fallback(), Normalized::Items(vec![]));
    }

    // -----------------------------------------------------------------------
    // list_field
    // -----------------------------------------------------------------------

    #[test]
    fn list_field_reads_named_field() {
        let raw = json!({"actors": ["X", "Y"]});
        let mode = NormalizeMode::list_field("actors");
        assert_eq!(items(Some(&raw), &mode), vec![json!("X"), json!("Y")]);
    }

    #[test]
    fn list_field_missing_or_empty_is_empty() {
        let mode = NormalizeMode::list_field("actors");
        assert!(items(Some(&json!({})), &mode).is_empty());
        assert!(items(None, &mode).is_empty());
        assert!(items(Some(&json!({"success": true})), &mode).is_empty());
    }

    #[test]
    fn non_list_field_is_malformed() {
        let raw = json!({"actors": "X"});
        let err = normalize(Some(&raw), &NormalizeMode::list_field("actors")).unwrap_err();
        assert!(matches!(err, ToolError::MalformedReply { .. }));
        assert!(err.to_string().contains("actors"));
    }

    #[test]
    fn list_field_ignores_content_wrapper() {
        let raw = json!({"content": ["A"], "actors": ["X"]});
        let mode = NormalizeMode::list_field("actors");
        assert_eq!(items(Some(&raw), &mode), vec![json!("X")]);
    }

    // -----------------------------------------------------------------------
    // passthrough_or_default
    // -----------------------------------------------------------------------

    #[test]
    fn passthrough_returns_default_when_empty() {
        let mode = NormalizeMode::PassthroughOrDefault(json!({}));
        assert_eq!(normalize(None, &mode).unwrap().into_value(), json!({}));
        assert_eq!(normalize(Some(&json!({})), &mode).unwrap().into_value(), json!({}));
    }

    #[test]
    fn passthrough_returns_reply_unchanged() {
        let raw = json!({"success": false, "message": "Actor not found"});
        let mode = NormalizeMode::PassthroughOrDefault(json!({}));
        assert_eq!(normalize(Some(&raw), &mode).unwrap().into_value(), raw);
    }

    // -----------------------------------------------------------------------
    // Remote-reported failures
    // -----------------------------------------------------------------------

    #[test]
    fn remote_failure_is_detected() {
        assert_eq!(
            remote_failure(&json!({"success": false, "message": "nope"})).as_deref(),
            Some("nope")
        );
        assert_eq!(
            remote_failure(&json!({"status": "error", "error": "boom"})).as_deref(),
            Some("boom")
        );
        assert_eq!(remote_failure(&json!({"success": true})), None);
        assert_eq!(remote_failure(&json!(["x"])), None);
    }
}
