pub mod waitlist;

pub use waitlist::{waitlist_list, waitlist_signup};
