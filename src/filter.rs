pub(crate) mod blur_pass;
pub(crate) mod compose;
pub(crate) mod coverage;
pub(crate) mod downsample;
pub(crate) mod gaussian;
pub(crate) mod sigma;
