use idbridge_application::{CreateGroupInput, UpdateGroupInput};
use idbridge_domain::Group;

use super::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id.as_str().to_owned(),
            name: group.name,
            description: group.description,
            group_type: group
                .group_type
                .map_or("UNKNOWN", |group_type| group_type.as_str()),
            created: group.created,
            last_updated: group.last_updated,
            profile: group.profile,
        }
    }
}

impl From<CreateGroupRequest> for CreateGroupInput {
    fn from(request: CreateGroupRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            profile: request.profile,
        }
    }
}

impl From<UpdateGroupRequest> for UpdateGroupInput {
    fn from(request: UpdateGroupRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            profile: request.profile,
        }
    }
}
