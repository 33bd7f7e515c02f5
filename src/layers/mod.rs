pub(crate) mod beads;
pub(crate) mod center;
pub(crate) mod kind;
pub(crate) mod linework;
pub(crate) mod rosette;
pub(crate) mod shape;
pub(crate) mod spokes;
