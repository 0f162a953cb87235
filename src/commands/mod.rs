pub mod generate;
pub mod next;
