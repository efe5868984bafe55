pub mod dto;
pub mod navigator;
pub mod table;
