//! Error types raised while interpreting colors from the backend or the picker.

/// A value received from the backend or typed by the user could not be
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A color string did not contain exactly three components.
    #[error("expected 3 color components, found {0}")]
    ColorArity(usize),

    /// A color component was not an integer in `0..=255`.
    #[error("invalid color component {0:?}")]
    ColorComponent(String),

    /// A hex color was not of the form `#rrggbb`.
    #[error("invalid hex color {0:?}")]
    HexColor(String),
}
