pub(crate) mod hash;
pub(crate) mod hex;
pub(crate) mod palette;
