#[macro_use]
extern crate lazy_static;

pub mod data;

#[cfg(test)]
mod icu;
#[cfg(test)]
mod ucd;
