use crate::cli::api_client::ApiClient;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, completed_mark, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateTodoRequest {
    pub(crate) title: String,
    pub(crate) completed: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateTodoRequest {
    pub(crate) title: String,
    pub(crate) completed: bool,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
    #[serde(default)]
    deleted_count: Option<u64>,
}

#[derive(Tabled)]
pub(crate) struct TodoDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: i64,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Done")]
    pub(crate) done: &'static str,
}

impl From<&Todo> for TodoDisplay {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: truncate_with_ellipsis(&todo.title, 60),
            done: completed_mark(todo.completed),
        }
    }
}

/// Every id-addressed route answers 404 only for a missing todo.
fn absent_as_not_found(id: i64) -> impl FnOnce(CliError) -> CliError {
    move |e| match e {
        CliError::ApiError { status: 404, .. } => CliError::TodoNotFound { id },
        other => other,
    }
}

/// List todos, optionally filtered by status (all, completed, incomplete)
pub async fn list_todos(
    api_client: &ApiClient,
    status: Option<&str>,
    format: &str,
) -> CliResult<String> {
    let mut request = api_client.get("/api/v1/todos");

    if let Some(s) = status {
        request = request.query(&[("status", s)]);
    }

    let todos: Vec<Todo> = ApiClient::handle_response(request.send().await?).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&todos)?),
        _ => Ok(format_table(&todos)),
    }
}

pub(crate) fn format_table(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }

    let display_todos: Vec<TodoDisplay> = todos.iter().map(|t| t.into()).collect();
    let mut table = Table::new(display_todos);
    apply_table_style(&mut table);
    table.to_string()
}

/// Get a single todo by ID
pub async fn get_todo(api_client: &ApiClient, id: i64, format: &str) -> CliResult<String> {
    let response = api_client
        .get(&format!("/api/v1/todos/{}", id))
        .send()
        .await?;

    let todo: Todo = ApiClient::handle_response(response)
        .await
        .map_err(absent_as_not_found(id))?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&todo)?),
        _ => {
            use tabled::builder::Builder;

            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            builder.push_record(["ID", &todo.id.to_string()]);
            builder.push_record(["Title", &todo.title]);
            builder.push_record(["Completed", &todo.completed.to_string()]);

            let mut table = builder.build();
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
    }
}

/// Create a new todo
pub async fn create_todo(api_client: &ApiClient, title: &str, completed: bool) -> CliResult<String> {
    let request = CreateTodoRequest {
        title: title.to_string(),
        completed,
    };

    let response = api_client
        .post("/api/v1/todos")
        .json(&request)
        .send()
        .await?;

    let todo: Todo = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Created todo: {} ({})", todo.title, todo.id))
}

/// Replace a todo's title and completion state
pub async fn update_todo(
    api_client: &ApiClient,
    id: i64,
    title: &str,
    completed: bool,
) -> CliResult<String> {
    let request = UpdateTodoRequest {
        title: title.to_string(),
        completed,
    };

    let response = api_client
        .put(&format!("/api/v1/todos/{}", id))
        .json(&request)
        .send()
        .await?;

    let todo: Todo = ApiClient::handle_response(response)
        .await
        .map_err(absent_as_not_found(id))?;
    Ok(format!("✓ Updated todo: {} ({})", todo.title, todo.id))
}

/// Delete a todo
pub async fn delete_todo(api_client: &ApiClient, id: i64) -> CliResult<String> {
    let response = api_client
        .delete(&format!("/api/v1/todos/{}", id))
        .send()
        .await?;

    let _: MessageResponse = ApiClient::handle_response(response)
        .await
        .map_err(absent_as_not_found(id))?;
    Ok(format!("✓ Deleted todo: {}", id))
}

/// Remove every completed todo
pub async fn clear_completed(api_client: &ApiClient) -> CliResult<String> {
    let response = api_client
        .put("/api/v1/todos/clear-completed")
        .send()
        .await?;

    let body: MessageResponse = ApiClient::handle_response(response).await?;
    Ok(format_cleared(&body))
}

/// Remove every todo
pub async fn clear_all(api_client: &ApiClient) -> CliResult<String> {
    let response = api_client.delete("/api/v1/todos").send().await?;

    let body: MessageResponse = ApiClient::handle_response(response).await?;
    Ok(format_cleared(&body))
}

fn format_cleared(body: &MessageResponse) -> String {
    match body.deleted_count {
        Some(count) => format!("✓ {} ({} removed)", body.message, count),
        None => format!("✓ {}", body.message),
    }
}
