pub mod domain;
pub mod expire;
