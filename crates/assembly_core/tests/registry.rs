use assembly_core::{Assignment, CollectionElement, ModelError, bootstrap};
use serde_json::json;

fn as_assignment(element: &dyn CollectionElement) -> &Assignment {
    element
        .as_any()
        .downcast_ref::<Assignment>()
        .expect("element is an assignment")
}

#[test]
fn bootstrap_registers_assignments() {
    let registry = bootstrap().unwrap();
    assert!(registry.contains("assignments/assignment"));
    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["assignments/assignment"]);
}

#[test]
fn registered_factory_builds_assignments() {
    let registry = bootstrap().unwrap();
    let raw = json!({
        "id": 8,
        "title": "Board Election",
        "assignment_related_users": [
            { "user_id": 3, "weight": 2 },
            { "user_id": 1, "weight": 1 },
            { "user_id": 2, "weight": 1 }
        ],
        "polls": "not-an-array"
    });

    let element = registry.build("assignments/assignment", &raw).unwrap();
    assert_eq!(element.collection(), "assignments/assignment");
    assert_eq!(element.id(), Some(8));
    assert_eq!(element.to_string(), "Board Election");

    let assignment = as_assignment(element.as_ref());
    assert_eq!(assignment.candidate_ids(), vec![1, 2, 3]);
    assert!(assignment.polls.is_empty());
}

#[test]
fn factory_output_matches_direct_construction() {
    let registry = bootstrap().unwrap();
    let raw = json!({ "title": "Annual Meeting", "tags_id": [1, 2] });
    let element = registry.build(Assignment::COLLECTION, &raw).unwrap();
    assert_eq!(
        as_assignment(element.as_ref()),
        &Assignment::from_input(&raw).unwrap()
    );
}

#[test]
fn build_many_accepts_objects_and_arrays() {
    let registry = bootstrap().unwrap();

    let single = registry
        .build_many(Assignment::COLLECTION, &json!({ "title": "Chair" }))
        .unwrap();
    assert_eq!(single.len(), 1);

    let many = registry
        .build_many(
            Assignment::COLLECTION,
            &json!([{ "title": "Chair" }, { "title": "Treasurer" }]),
        )
        .unwrap();
    let titles: Vec<String> = many.iter().map(|element| element.to_string()).collect();
    assert_eq!(titles, vec!["Chair", "Treasurer"]);
}

#[test]
fn build_many_reports_bad_element() {
    let registry = bootstrap().unwrap();
    let err = registry
        .build_many(Assignment::COLLECTION, &json!([{ "title": "Chair" }, null]))
        .unwrap_err();
    match err {
        ModelError::Nested { index, source, .. } => {
            assert_eq!(index, 1);
            assert!(matches!(*source, ModelError::InvalidInput { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rendered_json_uses_wire_names() {
    let registry = bootstrap().unwrap();
    let raw = json!({
        "title": "Secretary",
        "assignment_related_users": [{ "user_id": 4, "weight": 1, "elected": true }],
        "tags_id": [9]
    });
    let rendered = registry
        .build(Assignment::COLLECTION, &raw)
        .unwrap()
        .to_json()
        .unwrap();
    assert_eq!(rendered["title"], "Secretary");
    assert_eq!(rendered["tags_id"], json!([9]));
    assert_eq!(rendered["assignment_related_users"][0]["user_id"], 4);
    assert_eq!(rendered["assignment_related_users"][0]["elected"], true);
}
