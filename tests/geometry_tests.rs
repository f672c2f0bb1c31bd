//! Geometry validation unit tests

#[cfg(test)]
mod tests {
    use serde_json::json;
    use unreal_mcp_actors::geometry::{resolve_triple, validate_triple};
    use unreal_mcp_actors::{
        ActorTools, CreateActorArgs, GeometryField, RecordingConnection, ToolError, Vec3,
    };

    #[test]
    fn well_formed_triple_is_accepted_unchanged() {
        let v = json!([1.5, -2.0, 300.25]);
        let out = validate_triple(GeometryField::Location, Some(&v)).unwrap();
        assert_eq!(out, Some(Vec3::new(1.5, -2.0, 300.25)));
    }

    #[test]
    fn elements_are_coerced_to_float() {
        let v = json!([1, "2.5", true]);
        let out = validate_triple(GeometryField::Rotation, Some(&v)).unwrap();
        assert_eq!(out, Some(Vec3::new(1.0, 2.5, 1.0)));
    }

    #[test]
    fn absent_or_null_is_none() {
        assert_eq!(validate_triple(GeometryField::Scale, None).unwrap(), None);
        assert_eq!(
            validate_triple(GeometryField::Scale, Some(&json!(null))).unwrap(),
            None
        );
    }

    #[test]
    fn wrong_length_is_rejected_with_field_name() {
        for bad in [json!([]), json!([1.0, 2.0]), json!([1.0, 2.0, 3.0, 4.0])] {
            let err = validate_triple(GeometryField::Location, Some(&bad)).unwrap_err();
            assert!(matches!(
                err,
                ToolError::InvalidGeometry {
                    field: GeometryField::Location
                }
            ));
            assert!(err.to_string().contains("location"));
        }
    }

    #[test]
    fn non_sequence_and_non_numeric_are_rejected() {
        assert!(validate_triple(GeometryField::Scale, Some(&json!("1,1,1"))).is_err());
        assert!(validate_triple(GeometryField::Scale, Some(&json!({"x": 1}))).is_err());
        assert!(validate_triple(GeometryField::Scale, Some(&json!([1, "abc", 3]))).is_err());
        assert!(validate_triple(GeometryField::Scale, Some(&json!([1, null, 3]))).is_err());
    }

    #[test]
    fn resolve_substitutes_field_defaults() {
        assert_eq!(resolve_triple(GeometryField::Location, None).unwrap(), Vec3::zero());
        assert_eq!(resolve_triple(GeometryField::Rotation, None).unwrap(), Vec3::zero());
        assert_eq!(resolve_triple(GeometryField::Scale, None).unwrap(), Vec3::one());
    }

    #[test]
    fn vec3_serialises_as_array() {
        assert_eq!(
            serde_json::to_value(Vec3::new(1.0, 2.0, 3.0)).unwrap(),
            json!([1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn non_finite_components_are_rejected() {
        for bad in [json!(["nan", 0, 0]), json!([0, "inf", 0]), json!([0, 0, "-1e400"])] {
            let err = validate_triple(GeometryField::Location, Some(&bad)).unwrap_err();
            assert!(matches!(
                err,
                ToolError::InvalidGeometry {
                    field: GeometryField::Location
                }
            ));
        }
    }

    #[test]
    fn non_finite_location_aborts_create_before_sending() {
        let conn = RecordingConnection::new().with_reply(json!({"success": true}));
        let tools = ActorTools::new(conn);
        let mut args = CreateActorArgs::new("Box1", "cube");
        args.location = Some(json!(["nan", "1e400", 0]));

        let reply = tools.create_actor(&args);
        assert_eq!(reply["success"], json!(false));
        assert!(reply["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid location format"));
        assert_eq!(tools.connection().sent_count(), 0);
    }
}
