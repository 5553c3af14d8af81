pub mod form;
pub mod resize;
pub mod wheel;

pub use form::{wire_form, SubmitHandler};
pub use resize::wire_resize;
pub use wheel::wire_wheel;
