pub mod media_store;
