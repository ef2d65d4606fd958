use idbridge_domain::{GroupType, ProfileMap, ProfileValue, RoleType, UserStatus};
use proptest::prelude::*;

use super::*;

fn timestamp(value: &str) -> chrono::DateTime<chrono::FixedOffset> {
    chrono::DateTime::parse_from_rfc3339(value).unwrap_or_else(|_| unreachable!())
}

#[test]
fn user_with_full_profile_is_normalized() {
    let mut additional = ProfileMap::new();
    additional.insert("department".to_owned(), ProfileValue::from("Engineering"));

    let user = normalize_user(ExternalUser {
        id: Some("00u1".to_owned()),
        status: Some("LOCKED_OUT".to_owned()),
        created: Some(timestamp("2024-01-02T03:04:05+02:00")),
        profile: Some(ExternalUserProfile {
            email: Some("ada@example.com".to_owned()),
            login: Some("ada@example.com".to_owned()),
            first_name: Some("Ada".to_owned()),
            last_name: Some("Lovelace".to_owned()),
            additional,
        }),
        ..ExternalUser::default()
    })
    .unwrap_or_else(|_| unreachable!());

    assert_eq!(user.id.as_str(), "00u1");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.status, Some(UserStatus::LockedOut));
    assert_eq!(
        user.created.map(|created| created.offset().local_minus_utc()),
        Some(7200)
    );
    assert_eq!(user.activated, None);
    assert_eq!(
        user.profile.get("department").and_then(ProfileValue::as_str),
        Some("Engineering")
    );
}

#[test]
fn user_without_profile_gets_empty_fields() {
    let user = normalize_user(ExternalUser {
        id: Some("00u2".to_owned()),
        status: Some("STAGED".to_owned()),
        ..ExternalUser::default()
    })
    .unwrap_or_else(|_| unreachable!());

    assert_eq!(user.email, "");
    assert_eq!(user.last_name, "");
    assert_eq!(user.status, None);
    assert!(user.profile.is_empty());
}

#[test]
fn user_without_id_is_an_adapter_error() {
    let result = normalize_user(ExternalUser {
        id: Some("  ".to_owned()),
        ..ExternalUser::default()
    });

    assert!(matches!(result, Err(AppError::Adapter(_))));
}

#[test]
fn groups_without_profile_are_listed_with_empty_names() {
    let groups = [
        ("00g1", Some("OKTA_GROUP")),
        ("00g2", Some("BUILT_IN")),
        ("00g3", Some("SOMETHING_NEW")),
    ]
    .into_iter()
    .map(|(id, group_type)| ExternalGroup {
        id: Some(id.to_owned()),
        group_type: group_type.map(ToOwned::to_owned),
        ..ExternalGroup::default()
    })
    .map(normalize_group)
    .collect::<Result<Vec<_>, _>>()
    .unwrap_or_else(|_| unreachable!());

    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|group| group.name.is_empty()));
    assert_eq!(groups[0].group_type, Some(GroupType::IdpManaged));
    assert_eq!(groups[1].group_type, Some(GroupType::BuiltIn));
    assert_eq!(groups[2].group_type, None);
}

#[test]
fn role_type_follows_wire_value_then_catalog() {
    let custom = normalize_role(ExternalRole {
        id: Some("cr0abc".to_owned()),
        role_type: Some("CUSTOM".to_owned()),
        ..ExternalRole::default()
    })
    .unwrap_or_else(|_| unreachable!());
    let standard_wire = normalize_role(ExternalRole {
        id: Some("ra1xyz".to_owned()),
        role_type: Some("USER_ADMIN".to_owned()),
        ..ExternalRole::default()
    })
    .unwrap_or_else(|_| unreachable!());
    let unlisted_system = normalize_role(ExternalRole {
        id: Some("ra1abc".to_owned()),
        role_type: Some("PARTNER_ADMIN".to_owned()),
        ..ExternalRole::default()
    })
    .unwrap_or_else(|_| unreachable!());
    let standard_catalog = normalize_role(ExternalRole {
        id: Some("ORG_ADMIN".to_owned()),
        ..ExternalRole::default()
    })
    .unwrap_or_else(|_| unreachable!());
    let untyped = normalize_role(ExternalRole {
        id: Some("cr0def".to_owned()),
        ..ExternalRole::default()
    })
    .unwrap_or_else(|_| unreachable!());

    assert_eq!(custom.role_type, RoleType::Custom);
    assert_eq!(standard_wire.role_type, RoleType::System);
    assert_eq!(standard_wire.id.as_str(), "USER_ADMIN");
    assert_eq!(unlisted_system.role_type, RoleType::System);
    assert_eq!(unlisted_system.id.as_str(), "ra1abc");
    assert_eq!(standard_catalog.role_type, RoleType::System);
    assert_eq!(untyped.role_type, RoleType::Custom);
}

#[test]
fn role_assignment_prefers_custom_role_id() {
    let role = normalize_role(ExternalRole {
        id: Some("irb1assignment".to_owned()),
        role: Some("cr0custom".to_owned()),
        label: Some("Auditor".to_owned()),
        role_type: Some("CUSTOM".to_owned()),
        ..ExternalRole::default()
    })
    .unwrap_or_else(|_| unreachable!());

    assert_eq!(role.id.as_str(), "cr0custom");
    assert_eq!(role.name, "Auditor");
}

#[test]
fn permission_without_label_is_an_adapter_error() {
    let missing = normalize_permission(ExternalPermission::default());
    let malformed = normalize_permission(ExternalPermission {
        label: Some("nodots".to_owned()),
        ..ExternalPermission::default()
    });

    assert!(matches!(missing, Err(AppError::Adapter(_))));
    assert!(matches!(malformed, Err(AppError::Adapter(_))));
}

#[test]
fn user_create_omits_credentials_without_password() {
    let payload = denormalize_user_create(&CreateUserInput {
        email: "grace@example.com".to_owned(),
        login: "grace@example.com".to_owned(),
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        password: Some(String::new()),
        ..CreateUserInput::default()
    });

    assert!(payload.credentials.is_none());
    let json = serde_json::to_value(&payload).unwrap_or_else(|_| unreachable!());
    assert_eq!(json["profile"]["firstName"], "Grace");
    assert!(json.get("credentials").is_none());
}

#[test]
fn user_create_never_repeats_well_known_keys() {
    let mut profile = ProfileMap::new();
    profile.insert("email".to_owned(), ProfileValue::from("other@example.com"));
    profile.insert("costCenter".to_owned(), ProfileValue::from(42_i64));

    let payload = denormalize_user_create(&CreateUserInput {
        email: "grace@example.com".to_owned(),
        password: Some("s3cret!".to_owned()),
        profile,
        ..CreateUserInput::default()
    });

    assert_eq!(payload.profile.email.as_deref(), Some("grace@example.com"));
    assert!(!payload.profile.additional.contains_key("email"));
    assert_eq!(
        payload.profile.additional.get("costCenter"),
        Some(&ProfileValue::Integer(42))
    );
    assert!(!format!("{payload:?}").contains("s3cret!"));
}

#[test]
fn role_create_sends_permissions_only_when_present() {
    let empty = denormalize_role_create(&CreateRoleInput {
        name: "Auditor".to_owned(),
        ..CreateRoleInput::default()
    });
    let granted = denormalize_role_create(&CreateRoleInput {
        name: "Auditor".to_owned(),
        permissions: vec!["okta.users.read".to_owned()],
        ..CreateRoleInput::default()
    });

    assert_eq!(empty.permissions, None);
    assert_eq!(granted.permissions, Some(vec!["okta.users.read".to_owned()]));
}

fn arbitrary_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,16}"
}

fn arbitrary_profile() -> impl Strategy<Value = ProfileMap> {
    prop::collection::btree_map(
        "[a-z]{1,8}",
        prop_oneof![
            arbitrary_text().prop_map(ProfileValue::String),
            any::<bool>().prop_map(ProfileValue::Bool),
            any::<i64>().prop_map(ProfileValue::Integer),
        ],
        0..4,
    )
}

proptest! {
    #[test]
    fn group_create_then_normalize_preserves_fields(
        name in arbitrary_text(),
        description in arbitrary_text(),
        profile in arbitrary_profile(),
    ) {
        let input = CreateGroupInput { name, description, profile };
        let written = denormalize_group_create(&input);
        let group = normalize_group(ExternalGroup {
            id: Some("00gprop".to_owned()),
            group_type: Some("OKTA_GROUP".to_owned()),
            profile: Some(written.profile),
            ..ExternalGroup::default()
        });

        prop_assert!(group.is_ok());
        let group = group.unwrap_or_else(|_| unreachable!());
        prop_assert_eq!(group.name, input.name);
        prop_assert_eq!(group.description, input.description);
        prop_assert_eq!(
            group.profile,
            without_keys(&input.profile, &ExternalGroupProfile::WELL_KNOWN_KEYS)
        );
    }

    #[test]
    fn role_create_then_normalize_preserves_fields(
        name in arbitrary_text(),
        description in arbitrary_text(),
        permissions in prop::collection::vec("[a-z]{1,6}\\.[a-z]{1,6}", 0..3),
    ) {
        let input = CreateRoleInput { name, description, permissions };
        let written = denormalize_role_create(&input);
        let role = normalize_role(ExternalRole {
            id: Some("cr0prop".to_owned()),
            label: written.label,
            description: written.description,
            role_type: Some("CUSTOM".to_owned()),
            ..ExternalRole::default()
        });

        prop_assert!(role.is_ok());
        let role = role.unwrap_or_else(|_| unreachable!());
        prop_assert_eq!(role.id.as_str(), "cr0prop");
        prop_assert_eq!(role.name, input.name);
        prop_assert_eq!(role.description, input.description);
        prop_assert_eq!(role.role_type, RoleType::Custom);
    }
}
