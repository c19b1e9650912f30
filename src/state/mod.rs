mod manager;
mod persistence;

pub use manager::{SupplementEdit, WorkspaceManager};
pub use persistence::{
    export_workspace, load_workspace, load_workspace_or_default, save_workspace, Workspace,
};
