pub mod fs_root;
pub mod fs_templates;
pub mod fs_writer;
pub mod id;
pub mod ui;
