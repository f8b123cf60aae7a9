pub(crate) mod coupon;
pub(crate) mod registry;
pub(crate) mod shelf;
