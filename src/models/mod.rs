pub mod communication;
pub mod document;
pub mod question;
pub mod slide;
