pub mod client;

pub use client::{query_too_short, ApiError, ScheduleApi, MIN_QUERY_LEN, MYQURAN_BASE_URL};
