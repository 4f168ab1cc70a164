pub mod assets;
pub mod instantiate;
pub mod invocation;
pub mod new_app;
pub mod port;
