use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to connect to the todos API at {url}")]
    #[diagnostic(
        code(todos::cli::connection_failed),
        help(
            "Start the server with `todos-api`, or point --api-url / TODOS_API_URL at a running one."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from API server: {message}")]
    #[diagnostic(
        code(todos::cli::invalid_response),
        help("The server did not answer with todo JSON. Is --api-url pointing at todos-api?")
    )]
    InvalidResponse { message: String },

    #[error("Todo {id} not found")]
    #[diagnostic(
        code(todos::cli::todo_not_found),
        help("Nothing was changed. Run `todos list` to see existing IDs.")
    )]
    TodoNotFound { id: i64 },

    #[error("Todo rejected by the server: {message}")]
    #[diagnostic(
        code(todos::cli::invalid_todo),
        help("Titles must not be empty.")
    )]
    InvalidTodo { message: String },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(todos::cli::api_error))]
    ApiError { status: u16, message: String },
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            let url = e
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "<unknown>".to_string());
            CliError::ConnectionFailed { url, source: e }
        } else {
            CliError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
