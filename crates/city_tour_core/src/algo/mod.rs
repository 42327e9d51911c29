pub(crate) mod disjoint_set;
pub(crate) mod distance;
pub(crate) mod mst;
pub(crate) mod preorder;
