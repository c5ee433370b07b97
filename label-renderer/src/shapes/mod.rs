mod rectangle;
mod rule;

pub(crate) use rectangle::{Fill, Rectangle};
pub(crate) use rule::RuleShape;
