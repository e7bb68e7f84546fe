pub mod bfs;
pub mod dfs;

pub use bfs::Bfs;
pub use dfs::Dfs;
