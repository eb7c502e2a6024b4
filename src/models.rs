use serde::{Deserialize, Serialize};

/// A single TODO
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoResponse {
    pub todo_id: i64,
    pub todo: String,
}

/// Query parameters for TODO creation
#[derive(Deserialize)]
pub struct CreateTodoQuery {
    pub todo: String,
}

/// Generic acknowledgement, e.g. `{"result": "File created"}`
///
/// Reading a file reuses it with the file contents as the result.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CwdResponse {
    pub cwd: String,
}

#[derive(Deserialize)]
pub struct SetCwdQuery {
    pub dir_path: String,
}

/// Entry names of a directory
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContentsResponse {
    pub contents: Vec<String>,
}

#[derive(Deserialize)]
pub struct RenameDirectoryQuery {
    pub new_dir_path: String,
}

#[derive(Deserialize)]
pub struct CreateFileQuery {
    pub file_content: Option<String>,
}

/// `new_file_path` present means rename, absent means overwrite from upload
#[derive(Deserialize)]
pub struct PutFileQuery {
    pub new_file_path: Option<String>,
}
