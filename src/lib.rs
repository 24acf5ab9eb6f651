pub mod anim;
pub mod config;
pub mod scene;
pub mod sim;
pub mod topo;
pub mod viz;

#[cfg(test)]
mod test;
