mod cli_tests;
mod event_loop_tests;
