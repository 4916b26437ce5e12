use crate::diagnostics::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {

    /* encapsulate a kube-rust error */
    #[error("kube error: {0}")]
    Kube(#[from] kube::Error),

    #[error("kubeconfig error: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    #[error("kubeconfig inference error: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),

    #[error("Schema Error: {0}")]
    Schema(String),
}

/*
 * Everything that can abort a single data source read. Each variant is
 * terminal for that read and is surfaced as one error diagnostic; nothing
 * is retried.
 */
#[derive(Error, Debug)]
pub enum ReadError {

    #[error("provider is in offline mode")]
    Offline,

    #[error("no kubernetes client was configured")]
    Unconfigured,

    #[error("invalid configuration")]
    InvalidConfig(Vec<Diagnostic>),

    #[error("GET Error ({resource}): {source}")]
    Fetch {
	resource: String,
	source: kube::Error,
    },

    #[error("Marshal Error: {0}")]
    Marshal(serde_json::Error),

    #[error("JSON Error: {0}")]
    Unmarshal(serde_json::Error),

    #[error("State Error: {0}")]
    State(String),
}

impl ReadError {

    /*
     * Renders the error the way it is reported back to the caller.
     */
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
	let diagnostic = match self {
	    ReadError::Offline => Diagnostic::error(
		"Provider in Offline Mode",
		"This data source requires access to a Kubernetes cluster. \
		 Either disable offline mode in the provider configuration \
		 or remove this data source from your configuration.",
	    ),
	    ReadError::Unconfigured => Diagnostic::error(
		"Unconfigured Kubernetes Client",
		"Expected a configured Kubernetes client. Please report this issue to the provider developers.",
	    ),
	    ReadError::InvalidConfig(diagnostics) => return diagnostics,
	    err @ ReadError::Fetch { .. } => Diagnostic::error(
		"Unable to GET resource",
		format!(
		    "An unexpected error occurred while reading the resource. \
		     Please report this issue to the provider developers.\n\n{}",
		    err
		),
	    ),
	    err @ ReadError::Marshal(_) => Diagnostic::error(
		"Unable to marshal response",
		format!("Please report this issue to the provider developers.\n\n{}", err),
	    ),
	    err @ ReadError::Unmarshal(_) => Diagnostic::error(
		"Unable to unmarshal resource",
		format!(
		    "An unexpected error occurred while parsing the resource read response. \
		     Please report this issue to the provider developers.\n\n{}",
		    err
		),
	    ),
	    err @ ReadError::State(_) => Diagnostic::error(
		"Unable to build state",
		format!(
		    "The resource read response does not match the data source schema. \
		     Please report this issue to the provider developers.\n\n{}",
		    err
		),
	    ),
	};

	vec![diagnostic]
    }
}
