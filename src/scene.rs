pub(crate) mod model;
pub(crate) mod palette;
pub(crate) mod svg;
