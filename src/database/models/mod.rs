pub mod person;
pub mod receipt;

pub use person::Person;
pub use receipt::Receipt;
