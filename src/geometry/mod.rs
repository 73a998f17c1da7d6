pub(crate) mod lut;
