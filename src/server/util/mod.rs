//! Small helpers shared by the service layer.

pub mod password;
pub mod token;
