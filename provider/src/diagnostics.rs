use serde::Serialize;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/*
 * A user facing message attached to a framework response. Errors abort
 * the operation they belong to, warnings are informational.
 */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,

    // dotted path of the attribute the diagnostic is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {

    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
	Self{
	    severity: Severity::Error,
	    summary: summary.into(),
	    detail: detail.into(),
	    attribute: None,
	}
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
	Self{
	    severity: Severity::Warning,
	    summary: summary.into(),
	    detail: detail.into(),
	    attribute: None,
	}
    }

    pub fn at(mut self, attribute: impl Into<String>) -> Self {
	self.attribute = Some(attribute.into());
	self
    }

    pub fn is_error(&self) -> bool {
	self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	let severity = match self.severity {
	    Severity::Error => "Error",
	    Severity::Warning => "Warning",
	};
	match &self.attribute {
	    Some(attribute) => write!(f, "{}: {} ({})\n\n{}", severity, self.summary, attribute, self.detail),
	    None => write!(f, "{}: {}\n\n{}", severity, self.summary, self.detail),
	}
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {

    pub fn new() -> Self {
	Self(Vec::new())
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
	self.0.push(diagnostic);
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
	self.push(Diagnostic::error(summary, detail));
    }

    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
	self.push(Diagnostic::warning(summary, detail));
    }

    pub fn has_error(&self) -> bool {
	self.0.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
	self.0.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
	self.0.iter().filter(|d| !d.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
	self.0.iter()
    }

    pub fn len(&self) -> usize {
	self.0.len()
    }

    pub fn is_empty(&self) -> bool {
	self.0.is_empty()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
	self.0.extend(iter);
    }
}

impl From<Vec<Diagnostic>> for Diagnostics {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
	Self(diagnostics)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
	self.0.into_iter()
    }
}
