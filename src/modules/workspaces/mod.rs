// Workspaces module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateWorkspaceParams, UpdateWorkspaceParams, Workspace, WorkspaceStatus};
pub use repositories::{MySqlWorkspaceRepository, WorkspaceRepository};
pub use services::WorkspaceService;
