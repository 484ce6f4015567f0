pub mod branch;
pub mod emulator;
pub mod pull_request;
pub mod reference;
pub mod reminder;
pub mod ticket;
