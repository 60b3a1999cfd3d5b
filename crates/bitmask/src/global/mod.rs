pub(crate) mod error;
pub(crate) mod initial;
pub(crate) mod name;
pub(crate) mod schema;
