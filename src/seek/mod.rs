pub(crate) mod backend;
pub(crate) mod guard;
pub(crate) mod scheduler;
