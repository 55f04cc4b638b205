pub mod check_service;
pub mod injector;
