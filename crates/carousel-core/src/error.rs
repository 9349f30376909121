//! Error types for the carousel.

use miette::Diagnostic;
use smol_str::SmolStr;

/// Errors surfaced by carousel components and the browser layer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Diagnostic)]
#[non_exhaustive]
pub enum CarouselError {
    /// A carousel part was rendered outside of a `Carousel`.
    #[error("`{component}` must be rendered inside a `Carousel`")]
    #[diagnostic(
        code(carousel::missing_provider),
        help("wrap the component in `Carousel {{ ... }}`")
    )]
    MissingProvider {
        /// Name of the component that looked up the context.
        component: SmolStr,
    },

    /// Configuration rejected by [`CarouselConfig::validate`](crate::CarouselConfig::validate).
    #[error("invalid carousel config: {0}")]
    #[diagnostic(code(carousel::config))]
    InvalidConfig(String),

    /// A DOM call failed.
    #[error("DOM error: {0}")]
    #[diagnostic(code(carousel::dom))]
    Dom(String),
}

impl CarouselError {
    pub fn missing_provider(component: impl Into<SmolStr>) -> Self {
        Self::MissingProvider {
            component: component.into(),
        }
    }
}
