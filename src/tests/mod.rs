#[macro_use]
mod util;

mod postfix;
mod equation;
