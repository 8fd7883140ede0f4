use tribody_core::SettingsError;

/// Errors that can occur during three-body integration.
///
/// Numerical singularities are not errors. A close encounter that divides by
/// zero yields non-finite samples, which metrics are expected to expose.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
}
