mod clock;
mod config;
mod viz_meta;
