pub mod clock;
pub mod header;
pub mod next_prayer;
pub mod schedule;
pub mod search;
pub mod statusbar;
