//! Main module for rolemark library functionality

pub mod ast;
pub mod extraction;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
