pub(crate) mod paintshop;
