use idbridge_domain::ProfileMap;

/// Input payload for creating users.
#[derive(Clone, Default, PartialEq)]
pub struct CreateUserInput {
    /// Primary email address.
    pub email: String,
    /// Sign-in name.
    pub login: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Optional initial password.
    pub password: Option<String>,
    /// Additional profile attributes.
    pub profile: ProfileMap,
    /// Activates the user immediately when set.
    pub activate: bool,
}

impl std::fmt::Debug for CreateUserInput {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CreateUserInput")
            .field("email", &self.email)
            .field("login", &self.login)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("profile", &self.profile)
            .field("activate", &self.activate)
            .finish()
    }
}

/// Input payload for partial user updates.
///
/// `None`, blank strings and empty maps all mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserInput {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// Profile attributes to set.
    pub profile: Option<ProfileMap>,
}

/// Input payload for creating groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateGroupInput {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Additional profile attributes.
    pub profile: ProfileMap,
}

/// Input payload for partial group updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGroupInput {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Profile attributes to set.
    pub profile: Option<ProfileMap>,
}

/// Input payload for creating custom roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRoleInput {
    /// Display label.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Dotted permission labels.
    pub permissions: Vec<String>,
}

/// Input payload for partial role updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRoleInput {
    /// New display label.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement permission labels.
    pub permissions: Option<Vec<String>>,
}
