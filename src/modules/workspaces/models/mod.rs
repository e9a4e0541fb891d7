mod validator;
mod workspace;

pub use validator::WorkspaceValidator;
pub use workspace::{
    CreateWorkspaceParams, UpdateWorkspaceParams, Workspace, WorkspaceStatus, WORKSPACE_ORIGIN,
};
