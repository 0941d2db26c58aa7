pub mod starfield;
