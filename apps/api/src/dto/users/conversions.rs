use idbridge_application::{CreateUserInput, UpdateUserInput};
use idbridge_domain::User;

use super::{CreateUserRequest, UpdateUserRequest, UserResponse};

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.as_str().to_owned(),
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            login: user.login,
            status: user.status.map_or("UNKNOWN", |status| status.as_str()),
            created: user.created,
            activated: user.activated,
            last_login: user.last_login,
            last_updated: user.last_updated,
            profile: user.profile,
        }
    }
}

impl From<CreateUserRequest> for CreateUserInput {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            email: request.email,
            login: request.login,
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
            profile: request.profile,
            activate: request.activate,
        }
    }
}

impl From<UpdateUserRequest> for UpdateUserInput {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            profile: request.profile,
        }
    }
}
