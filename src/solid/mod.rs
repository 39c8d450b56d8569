mod prism;

pub use prism::Prism;
