mod config;
mod gestures;
mod selection;
