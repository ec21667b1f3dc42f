//! Administrative services for bootstrapping the first admin account.

pub mod code;
