//! ToolRegistry dispatch tests

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use unreal_mcp_actors::protocol::commands;
    use unreal_mcp_actors::{ActorTools, RecordingConnection, ToolError, ToolRegistry};

    fn registry(conn: RecordingConnection) -> ToolRegistry<RecordingConnection> {
        ToolRegistry::new(ActorTools::new(conn))
    }

    #[test]
    fn registry_lists_all_actor_tools() {
        let reg = registry(RecordingConnection::new());
        let names: Vec<_> = reg.descriptors().iter().map(|d| d.name).collect();
        assert_eq!(names, commands::ALL.to_vec());
    }

    #[test]
    fn create_actor_schema_exposes_geometry_fields() {
        let reg = registry(RecordingConnection::new());
        let schema = &reg.descriptor(commands::CREATE_ACTOR).unwrap().input_schema;
        let props = schema["properties"].as_object().unwrap();
        for key in ["name", "type", "location", "rotation", "scale"] {
            assert!(props.contains_key(key), "missing {}", key);
        }
        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"name"));
        assert!(required.contains(&"type"));
        assert!(!required.contains(&"location"));
    }

    #[test]
    fn call_dispatches_json_arguments() {
        let reg = registry(RecordingConnection::new().with_reply(json!({"success": true})));
        let out = reg.call(
            commands::CREATE_ACTOR,
            json!({"name": "Box1", "type": "cube", "scale": [2, 2, 2]}),
        );
        assert_eq!(out, json!({"success": true}));

        let sent = reg.tools().connection().last_sent().unwrap();
        assert_eq!(sent.params["type"], json!("CUBE"));
        assert_eq!(sent.params["scale"], json!([2.0, 2.0, 2.0]));
    }

    #[test]
    fn list_tools_return_arrays() {
        let reg = registry(
            RecordingConnection::new().with_reply(json!({"content": [{"name": "Sky"}]})),
        );
        let out = reg.call(commands::GET_ACTORS_IN_LEVEL, Value::Null);
        assert_eq!(out, json!([{"name": "Sky"}]));
    }

    #[test]
    fn unknown_tool_is_a_failure_reply() {
        let reg = registry(RecordingConnection::new());
        assert!(matches!(
            reg.try_call("spawn_everything", json!({})),
            Err(ToolError::UnknownTool(_))
        ));
        let out = reg.call("spawn_everything", json!({}));
        assert_eq!(out["success"], json!(false));
        assert_eq!(reg.tools().connection().sent_count(), 0);
    }

    #[test]
    fn missing_required_argument_is_a_failure_reply() {
        let reg = registry(RecordingConnection::new());
        assert!(matches!(
            reg.try_call(commands::DELETE_ACTOR, json!({})),
            Err(ToolError::InvalidArguments { .. })
        ));
        let out = reg.call(commands::DELETE_ACTOR, json!({}));
        assert_eq!(out["success"], json!(false));
        assert!(out["message"].as_str().unwrap().contains("delete_actor"));
    }
}
