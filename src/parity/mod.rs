pub(crate) mod compare;
