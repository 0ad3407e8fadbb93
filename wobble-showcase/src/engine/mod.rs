pub mod assets;
pub mod camera;
pub mod core;
pub mod loading;
pub mod materials;
pub mod reveal;
pub mod scene;
pub mod systems;
