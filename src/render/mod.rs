pub(crate) mod cpu;
pub(crate) mod params;
pub(crate) mod pipeline;
pub(crate) mod scene;
pub(crate) mod svg;
