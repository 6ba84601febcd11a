//! Outbound HTTP used by the site. Only the contact form talks to the network.

mod contact;

pub use contact::*;
