pub mod bitso;
