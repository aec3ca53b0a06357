pub(crate) mod context;
pub(crate) mod evaluator;
pub(crate) mod slides;
pub(crate) mod visual;
