mod error_tests;
mod feature_tests;
