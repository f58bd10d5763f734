pub mod serde_ext;
