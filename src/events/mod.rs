pub mod forms;
pub mod pointer;

pub use forms::wire_page_controls;
pub use pointer::{wire_input_handlers, InputWiring};
