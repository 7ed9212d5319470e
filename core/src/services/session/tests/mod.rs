//! Test modules for the session service

mod service_tests;
