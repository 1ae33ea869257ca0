/// Convenience result type used across Lifeglass.
pub type LifeglassResult<T> = Result<T, LifeglassError>;

/// Top-level error taxonomy used by crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum LifeglassError {
    /// Invalid user-provided dimensions or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a scene document into a bitmap.
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LifeglassError {
    /// Build a [`LifeglassError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LifeglassError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            LifeglassError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            LifeglassError::raster("x")
                .to_string()
                .contains("raster error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = LifeglassError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
