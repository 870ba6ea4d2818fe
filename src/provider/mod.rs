pub mod awesome;
