pub mod wave;
pub mod shading;
pub mod viewer;
pub mod headless;
