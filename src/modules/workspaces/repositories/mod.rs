pub mod workspace_repository;

pub use workspace_repository::{MySqlWorkspaceRepository, WorkspaceRepository};
#[cfg(test)]
pub use workspace_repository::MockWorkspaceRepository;
