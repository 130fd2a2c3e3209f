use thiserror::Error;

/// Failures of the tab workspace core.
///
/// `InvalidTabDescriptor` is recovered locally by the caller (logged, state left
/// untouched). `MissingProviderContext` is a wiring defect and is raised as a panic
/// by the `use_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("invalid tab descriptor: {reason}")]
    InvalidTabDescriptor { reason: String },

    #[error("{0} is not provided; the component must be rendered inside its provider")]
    MissingProviderContext(&'static str),
}

impl WorkspaceError {
    pub fn invalid_descriptor(reason: impl Into<String>) -> Self {
        WorkspaceError::InvalidTabDescriptor {
            reason: reason.into(),
        }
    }
}

/// Fetches a context value or panics with [`WorkspaceError::MissingProviderContext`].
pub fn expect_provided<T: Clone + 'static>(name: &'static str) -> T {
    leptos::prelude::use_context::<T>()
        .unwrap_or_else(|| panic!("{}", WorkspaceError::MissingProviderContext(name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WorkspaceError::invalid_descriptor("id is missing");
        assert_eq!(err.to_string(), "invalid tab descriptor: id is missing");

        let err = WorkspaceError::MissingProviderContext("AppGlobalContext");
        assert!(err.to_string().starts_with("AppGlobalContext is not provided"));
    }
}
