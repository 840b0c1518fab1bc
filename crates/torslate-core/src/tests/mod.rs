mod fakes;
mod pipeline_tests;
