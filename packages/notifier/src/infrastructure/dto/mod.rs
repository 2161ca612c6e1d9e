//! Wire-format data transfer objects.

pub mod campfire;
