pub mod assets;
pub mod camera;
pub mod controller;
pub mod mesh;
pub mod node;

pub use assets::AssetLoader;
pub use camera::Camera;
pub use controller::SceneController;
pub use mesh::MeshData;
pub use node::{ObjectGroup, ObjectNode, ObjectSpec};
