mod errors;
mod list;
mod node;
mod value;

pub use errors::ValueParseError;
pub use list::{Iter, List};
pub use node::Node;
pub use value::Value;
