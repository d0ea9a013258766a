mod mesh_solid;

pub use mesh_solid::MeshSolid;
