pub mod composer;
pub mod driver;
pub mod fbo;
pub mod output_pass;
pub mod program;
pub mod quad;
pub mod scene_pass;
pub mod screen_pass;
pub mod shaders;

pub use composer::Composer;
pub use driver::Showcase;
pub use screen_pass::ScreenPass;
