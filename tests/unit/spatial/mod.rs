mod direction;
mod grid;
