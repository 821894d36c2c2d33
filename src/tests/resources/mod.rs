mod node_tests;
mod session_tests;
