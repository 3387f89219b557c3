mod dependency_tests;
mod fields_tests;
