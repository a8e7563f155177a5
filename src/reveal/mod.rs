pub(crate) mod controller;
pub(crate) mod navbar;
pub(crate) mod observer;
pub(crate) mod parallax;
