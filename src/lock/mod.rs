pub(crate) mod scroll;
