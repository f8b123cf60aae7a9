//! Merchant JSON templates: parse, substitute, render, serialize.
//!
//! Templates are data. Nothing here evaluates script or emits unescaped markup.

pub(crate) mod context;
pub(crate) mod html;
pub(crate) mod interpolate;
pub(crate) mod interpreter;
pub(crate) mod node;
pub(crate) mod tree;
