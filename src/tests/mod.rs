// Test modules

pub mod common;
mod handler_syllabus_test;
