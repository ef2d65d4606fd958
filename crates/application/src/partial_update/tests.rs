use idbridge_domain::{ProfileMap, ProfileValue};
use proptest::prelude::*;

use super::*;

fn payload_keys<P: serde::Serialize>(payload: &P, section: Option<&str>) -> Vec<String> {
    let json = serde_json::to_value(payload).unwrap_or_else(|_| unreachable!());
    let object = match section {
        Some(section) => json[section].clone(),
        None => json,
    };
    object
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn blank_strings_count_as_absent() {
    let plan = plan_user_update(&UpdateUserInput {
        first_name: Some("   ".to_owned()),
        last_name: Some(String::new()),
        profile: Some(ProfileMap::new()),
    });

    assert_eq!(plan, UpdatePlan::NoChanges);
    assert!(!plan.has_changes());
}

#[test]
fn user_update_carries_only_supplied_fields() {
    let plan = plan_user_update(&UpdateUserInput {
        last_name: Some("Byron".to_owned()),
        ..UpdateUserInput::default()
    });

    let UpdatePlan::Apply(payload) = plan else {
        panic!("expected a write");
    };
    assert_eq!(payload_keys(&payload, Some("profile")), vec!["lastName"]);
}

#[test]
fn profile_attributes_merge_into_user_profile() {
    let mut profile = ProfileMap::new();
    profile.insert("title".to_owned(), ProfileValue::from("Engineer"));
    profile.insert("login".to_owned(), ProfileValue::from("ignored"));

    let plan = plan_user_update(&UpdateUserInput {
        profile: Some(profile),
        ..UpdateUserInput::default()
    });

    let UpdatePlan::Apply(payload) = plan else {
        panic!("expected a write");
    };
    assert_eq!(payload_keys(&payload, Some("profile")), vec!["title"]);
}

#[test]
fn group_update_with_only_description() {
    let plan = plan_group_update(&UpdateGroupInput {
        description: Some("Platform team".to_owned()),
        ..UpdateGroupInput::default()
    });

    let UpdatePlan::Apply(payload) = plan else {
        panic!("expected a write");
    };
    assert_eq!(payload_keys(&payload, Some("profile")), vec!["description"]);
}

#[test]
fn role_update_ignores_empty_permission_list() {
    let plan = plan_role_update(&UpdateRoleInput {
        permissions: Some(Vec::new()),
        ..UpdateRoleInput::default()
    });

    assert_eq!(plan, UpdatePlan::NoChanges);
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), "[ ]{0,3}".prop_map(Some)]
}

proptest! {
    #[test]
    fn all_blank_group_update_is_a_read(name in optional_text(), description in optional_text()) {
        let plan = plan_group_update(&UpdateGroupInput { name, description, profile: None });
        prop_assert_eq!(plan, UpdatePlan::NoChanges);
    }

    #[test]
    fn single_role_field_yields_single_key(
        field in 0_usize..3,
        value in "[A-Za-z][A-Za-z0-9 ]{0,12}",
    ) {
        let input = match field {
            0 => UpdateRoleInput { name: Some(value), ..UpdateRoleInput::default() },
            1 => UpdateRoleInput { description: Some(value), ..UpdateRoleInput::default() },
            _ => UpdateRoleInput { permissions: Some(vec![value]), ..UpdateRoleInput::default() },
        };
        let expected = ["label", "description", "permissions"][field];

        let UpdatePlan::Apply(payload) = plan_role_update(&input) else {
            return Err(TestCaseError::fail("expected a write"));
        };
        prop_assert_eq!(payload_keys(&payload, None), vec![expected.to_owned()]);
    }
}
