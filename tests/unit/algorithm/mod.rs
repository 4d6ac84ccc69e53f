mod placement;
mod settings;
