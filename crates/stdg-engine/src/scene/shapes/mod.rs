pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod point;
pub(crate) mod rect;
