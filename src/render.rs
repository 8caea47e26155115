pub(crate) mod input;
pub(crate) mod sampler;
pub(crate) mod snapshot;
pub(crate) mod subpass;
