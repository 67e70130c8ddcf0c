mod errors;
mod leverage;
mod margin_result;
mod request;
mod side;
mod timestamp_ns;

pub use errors::*;
pub use leverage::*;
pub use margin_result::*;
pub use request::*;
pub use side::*;
pub use timestamp_ns::*;
