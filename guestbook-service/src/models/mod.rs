pub mod name_record;

pub use name_record::{GuestName, NameRecord, EMPTY_NAME_DETAIL};
