pub(crate) mod preview;
pub(crate) mod sink;
