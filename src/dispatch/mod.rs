//! Section dispatch: configuration plus content to renderable sections.

pub(crate) mod dispatcher;
pub(crate) mod resolve;
