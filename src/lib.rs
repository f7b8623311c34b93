#![deny(
    clippy::mutable_key_type,
    clippy::map_entry,
    clippy::boxed_local,
    clippy::let_unit_value,
    clippy::redundant_allocation,
    clippy::bool_comparison,
    clippy::bind_instead_of_map,
    clippy::vec_box,
    clippy::while_let_loop,
    clippy::useless_asref,
    clippy::repeat_once,
    clippy::deref_addrof,
    clippy::suspicious_map,
    clippy::single_char_pattern,
    clippy::let_and_return,
    clippy::match_result_ok,
    clippy::cmp_owned,
    clippy::useless_vec
)]

//! Thin proxy in front of the ODsay transit API: takes a clicked point,
//! routes it to the Yonsei University library, picks the candidate
//! itinerary that best matches the caller's ride/board/drop hints, and
//! returns ODsay's detailed lane geometry for it.

pub mod error;
pub mod models;
pub mod normalize;
pub mod odsay;
pub mod path_select;
