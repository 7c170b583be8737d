pub mod consolidator;
